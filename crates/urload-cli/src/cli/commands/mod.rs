//! Shell command handlers. Each command is in its own file.
//!
//! A command reads the current list and returns the list that replaces it.
//! Errors leave the list untouched; the shell prints them and carries on.

mod add;
mod clear;
mod count;
mod del;
mod discard;
mod exit;
mod extract;
mod fileformat;
mod get;
mod get_option;
mod head;
mod help;
mod href;
mod img;
mod keep;
mod list;
mod load;
mod save;
mod set_option;
mod sort;
mod tail;
mod timeformat;
mod title;
mod uniq;

#[cfg(test)]
pub(crate) mod test_support;

use std::collections::BTreeMap;
use std::io::{self, Write};
use thiserror::Error;
use urload_core::config::{Settings, SettingsError};
use urload_core::delete_target::DeleteError;
use urload_core::expand::ExpandError;
use urload_core::fetch::Fetcher;
use urload_core::list_file::LoadError;
use urload_core::range::RangeError;
use urload_core::session::Session;
use urload_core::UrlRecord;

pub use help::HelpEntry;

#[derive(Debug, Error)]
pub enum CommandError {
    /// Bad arguments or input; printed verbatim.
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Io(#[from] io::Error),
    /// Ends the read loop (and any remaining batch input).
    #[error("exit requested")]
    Exit,
}

impl CommandError {
    pub fn usage(msg: impl Into<String>) -> Self {
        CommandError::Usage(msg.into())
    }
}

macro_rules! usage_error_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CommandError {
                fn from(err: $ty) -> Self {
                    CommandError::Usage(err.to_string())
                }
            }
        )*
    };
}

usage_error_from!(RangeError, DeleteError, ExpandError, SettingsError, LoadError);

/// Everything a command may touch besides the list itself.
pub struct Env<'a> {
    pub settings: &'a mut Settings,
    pub session: &'a mut Session,
    pub fetcher: &'a dyn Fetcher,
    pub out: &'a mut dyn Write,
}

pub type CommandResult = Result<Vec<UrlRecord>, CommandError>;

pub trait Command {
    fn name(&self) -> &'static str;

    /// Full help text. The first line is the one-line summary shown by `help`.
    fn description(&self) -> &'static str;

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult;
}

/// First non-empty line of a description.
pub fn summary(description: &str) -> &str {
    description
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Builds the full command table, keyed by name.
pub fn registry() -> BTreeMap<&'static str, Box<dyn Command>> {
    let mut commands: Vec<Box<dyn Command>> = vec![
        Box::new(add::AddCommand),
        Box::new(clear::ClearCommand),
        Box::new(del::DelCommand),
        Box::new(discard::DiscardCommand),
        Box::new(exit::ExitCommand),
        Box::new(fileformat::FileformatCommand),
        Box::new(get::GetCommand),
        Box::new(get_option::GetOptionCommand),
        Box::new(head::HeadCommand),
        Box::new(href::HrefCommand),
        Box::new(img::ImgCommand),
        Box::new(keep::KeepCommand),
        Box::new(list::ListCommand),
        Box::new(load::LoadCommand),
        Box::new(save::SaveCommand),
        Box::new(set_option::SetOptionCommand),
        Box::new(sort::SortCommand),
        Box::new(tail::TailCommand),
        Box::new(timeformat::TimeformatCommand),
        Box::new(title::TitleCommand),
        Box::new(uniq::UniqCommand),
    ];
    let mut entries: Vec<HelpEntry> = commands.iter().map(|c| HelpEntry::of(c.as_ref())).collect();
    entries.push(HelpEntry::new(help::NAME, help::DESCRIPTION));
    commands.push(Box::new(help::HelpCommand::new(entries)));

    commands.into_iter().map(|c| (c.name(), c)).collect()
}

/// Rejects any arguments for commands that take none.
fn no_args(name: &str, args: &[String]) -> Result<(), CommandError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(CommandError::usage(format!("{} command takes no arguments.", name)))
    }
}
