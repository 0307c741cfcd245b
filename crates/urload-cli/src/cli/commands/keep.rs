//! `keep <regex>` – keep only URLs matching a pattern.

use super::{Command, CommandError, CommandResult, Env};
use regex::Regex;
use urload_core::UrlRecord;

pub struct KeepCommand;

/// Compiles the pattern argument shared by `keep` and `discard`.
/// Matching is unanchored: a pattern matches anywhere in the URL.
pub(super) fn pattern(args: &[String]) -> Result<Regex, CommandError> {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::usage("No regex pattern provided."))?;
    Regex::new(raw).map_err(|e| CommandError::usage(format!("Invalid regex: {}", e)))
}

impl Command for KeepCommand {
    fn name(&self) -> &'static str {
        "keep"
    }

    fn description(&self) -> &'static str {
        "keep <regex> - Keep only URLs matching the regex pattern.

The pattern may match anywhere in the URL; anchor it with ^ or $ as needed."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let re = pattern(args)?;
        let kept: Vec<UrlRecord> = records.iter().filter(|r| re.is_match(&r.url)).cloned().collect();
        writeln!(env.out, "Kept {} URLs matching pattern.", kept.len())?;
        Ok(kept)
    }
}
