//! `sort` – order the list by URL text.

use super::{no_args, Command, CommandResult, Env};
use urload_core::UrlRecord;

pub struct SortCommand;

impl Command for SortCommand {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn description(&self) -> &'static str {
        "sort - Sort the URLs in the list lexicographically by URL.

The sort is stable: URLs with identical text keep their relative order."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        no_args(self.name(), args)?;
        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| a.url.cmp(&b.url));
        writeln!(env.out, "Sorted URLs.")?;
        Ok(sorted)
    }
}
