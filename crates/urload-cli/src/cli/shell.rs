//! Line dispatcher shared by batch files and the interactive prompt.

use super::commands::{registry, Command, CommandError, Env};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use urload_core::config::Settings;
use urload_core::fetch::Fetcher;
use urload_core::session::Session;
use urload_core::UrlRecord;

/// Whether the caller should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The working list plus everything commands run against.
pub struct Shell<W: Write> {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
    records: Vec<UrlRecord>,
    settings: Settings,
    session: Session,
    fetcher: Box<dyn Fetcher>,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(settings: Settings, session: Session, fetcher: Box<dyn Fetcher>, out: W) -> Self {
        Self {
            commands: registry(),
            records: Vec::new(),
            settings,
            session,
            fetcher,
            out,
        }
    }

    pub fn records(&self) -> &[UrlRecord] {
        &self.records
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.commands.keys().copied().collect()
    }

    pub fn prompt(&self) -> String {
        format!("URLoad ({}) > ", self.records.len())
    }

    pub fn greet(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to URLoad! Type 'help' for commands.")?;
        writeln!(self.out, "Current session directory: {:04}", self.session.dir_num())
    }

    pub fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.out, "Goodbye!")
    }

    /// Runs one input line. Command errors are printed and leave the list
    /// as it was; only failures writing the output itself are returned.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let parts: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some((name, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };
        let Some(cmd) = self.commands.get(name.as_str()) else {
            writeln!(self.out, "Unknown command: {}", name)?;
            return Ok(Flow::Continue);
        };

        self.fetcher.apply_settings(&self.settings);
        tracing::debug!(command = %name, ?args, "dispatch");
        let mut env = Env {
            settings: &mut self.settings,
            session: &mut self.session,
            fetcher: self.fetcher.as_ref(),
            out: &mut self.out,
        };
        match cmd.run(args, &self.records, &mut env) {
            Ok(records) => {
                self.records = records;
                Ok(Flow::Continue)
            }
            Err(CommandError::Exit) => Ok(Flow::Exit),
            Err(e) => {
                tracing::debug!(command = %name, "command failed: {}", e);
                writeln!(self.out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs each non-blank line in order, stopping at the first exit.
    pub fn execute_source<I, S>(&mut self, lines: I) -> io::Result<Flow>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            if self.execute_line(line)? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Runs a batch file. An unreadable file is reported and skipped.
    pub fn run_batch_file(&mut self, path: &Path) -> io::Result<Flow> {
        match fs::read_to_string(path) {
            Ok(text) => {
                tracing::info!(path = %path.display(), "running batch file");
                self.execute_source(text.lines())
            }
            Err(e) => {
                writeln!(self.out, "Error reading file '{}': {}", path.display(), e)?;
                Ok(Flow::Continue)
            }
        }
    }
}
