//! `head <n>` – keep the first n URLs.

use super::count::parse_count;
use super::{Command, CommandResult, Env};
use urload_core::UrlRecord;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn description(&self) -> &'static str {
        "head <n> - Keep the first n URLs from the list.

Keeps only the first n URLs, discarding the rest. A count larger than the
list keeps everything."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], _env: &mut Env<'_>) -> CommandResult {
        let n = parse_count(args)?;
        Ok(records.iter().take(n).cloned().collect())
    }
}
