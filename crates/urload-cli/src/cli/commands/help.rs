//! `help [<command>]` – list commands or show one command's help.

use super::{summary, Command, CommandResult, Env};
use urload_core::UrlRecord;

pub(super) const NAME: &str = "help";

pub(super) const DESCRIPTION: &str = "help [<command>] - Show help for a command.

With no arguments, lists all available commands. With a command name, shows
detailed help for that command.";

/// Name and help text of one registered command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub name: &'static str,
    pub description: &'static str,
}

impl HelpEntry {
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }

    pub fn of(cmd: &dyn Command) -> Self {
        Self::new(cmd.name(), cmd.description())
    }
}

pub struct HelpCommand {
    entries: Vec<HelpEntry>,
}

impl HelpCommand {
    pub fn new(mut entries: Vec<HelpEntry>) -> Self {
        entries.sort_by_key(|e| e.name);
        Self { entries }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        match args.first() {
            None => {
                writeln!(env.out, "Available commands:")?;
                for entry in &self.entries {
                    writeln!(env.out, "  {}", summary(entry.description))?;
                }
                writeln!(env.out, "Type 'help <command>' for more info.")?;
            }
            Some(name) => match self.entries.iter().find(|e| e.name == name.as_str()) {
                Some(entry) => writeln!(env.out, "{}", entry.description.trim())?,
                None => writeln!(env.out, "No such command: {}", name)?,
            },
        }
        Ok(records.to_vec())
    }
}
