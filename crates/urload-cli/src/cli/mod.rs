//! CLI for URLoad: argument parsing, startup and shutdown around the shell.

mod commands;
mod repl;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use urload_core::config;
use urload_core::fetch::{CurlFetcher, Fetcher};
use urload_core::session::Session;

use shell::{Flow, Shell};

/// Interactive URL list builder and downloader.
#[derive(Debug, Parser)]
#[command(name = "urload", version)]
#[command(about = "URLoad: collect, filter and download lists of URLs", long_about = None)]
pub struct Cli {
    /// Settings file to load at startup and save at exit.
    #[arg(long, env = "URLOAD_CONFIG_FILE", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command files to run, in order, before the interactive prompt.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => config::config_path()?,
        };
        let settings = config::load(&config_path)?;
        tracing::debug!("loaded settings: {:?}", settings);

        let cwd = std::env::current_dir()?;
        let session = Session::start(&cwd)
            .with_context(|| format!("failed to scan {} for session directories", cwd.display()))?;

        let mut fetcher = CurlFetcher::default();
        fetcher.apply_settings(&settings);
        let mut shell = Shell::new(settings, session, Box::new(fetcher), io::stdout());

        let result = run_shell(&mut shell, &self.files);
        let saved = config::save(shell.settings(), &config_path);
        result?;
        saved
    }
}

/// Greets, runs batch files, then hands over to the prompt unless a batch
/// file exited.
fn run_shell<W: Write>(shell: &mut Shell<W>, files: &[PathBuf]) -> Result<()> {
    shell.greet()?;
    for file in files {
        if shell.run_batch_file(file)? == Flow::Exit {
            return Ok(());
        }
    }
    repl::run(shell)
}

#[cfg(test)]
mod tests;
