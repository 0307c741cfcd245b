//! `uniq` – drop repeated URLs, keeping the first occurrence.

use super::{no_args, Command, CommandResult, Env};
use std::collections::HashSet;
use urload_core::UrlRecord;

pub struct UniqCommand;

impl Command for UniqCommand {
    fn name(&self) -> &'static str {
        "uniq"
    }

    fn description(&self) -> &'static str {
        "uniq - Remove duplicate URLs, keeping only the first occurrence of each.

Duplicates are detected by URL text alone; headers of later copies are dropped
along with them. Order is preserved."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        no_args(self.name(), args)?;
        let mut seen = HashSet::new();
        let unique: Vec<UrlRecord> = records
            .iter()
            .filter(|r| seen.insert(r.url.as_str()))
            .cloned()
            .collect();
        writeln!(env.out, "Removed {} duplicate URLs.", records.len() - unique.len())?;
        Ok(unique)
    }
}
