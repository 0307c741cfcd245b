//! `tail <n>` – keep the last n URLs.

use super::count::parse_count;
use super::{Command, CommandResult, Env};
use urload_core::UrlRecord;

pub struct TailCommand;

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn description(&self) -> &'static str {
        "tail <n> - Keep the last n URLs from the list.

Keeps only the last n URLs, discarding the rest. `tail 0` empties the list."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], _env: &mut Env<'_>) -> CommandResult {
        let n = parse_count(args)?;
        let skip = records.len().saturating_sub(n);
        Ok(records[skip..].to_vec())
    }
}
