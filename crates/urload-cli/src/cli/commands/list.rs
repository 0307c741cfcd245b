//! `list [<range>]` – print URLs with their indices.

use super::{Command, CommandResult, Env};
use urload_core::range::resolve_range;
use urload_core::UrlRecord;

pub struct ListCommand;

impl Command for ListCommand {
    fn name(&self) -> &'static str {
        "list"
    }

    fn description(&self) -> &'static str {
        "list [<range>] - List URLs in the current list with their indices.

The optional range is N, -N (0 to N), N- (N to the end) or N-M, inclusive."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        if let Some(range) = resolve_range(args.first().map(String::as_str), records.len())? {
            for idx in range.indices() {
                writeln!(env.out, "{}: {}", idx, records[idx].url)?;
            }
        }
        Ok(records.to_vec())
    }
}
