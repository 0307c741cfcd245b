//! `discard <regex>` – remove URLs matching a pattern.

use super::keep::pattern;
use super::{Command, CommandResult, Env};
use urload_core::UrlRecord;

pub struct DiscardCommand;

impl Command for DiscardCommand {
    fn name(&self) -> &'static str {
        "discard"
    }

    fn description(&self) -> &'static str {
        "discard <regex> - Remove URLs matching the regex pattern.

The pattern may match anywhere in the URL. Non-matching URLs keep their order."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let re = pattern(args)?;
        let kept: Vec<UrlRecord> = records.iter().filter(|r| !re.is_match(&r.url)).cloned().collect();
        writeln!(env.out, "Removed {} URLs matching pattern.", records.len() - kept.len())?;
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn removes_matches() {
        let mut h = Harness::new();
        let list = records(&["http://a/ad.js", "http://a/page", "http://ads.example/x"]);
        let out = h.run(&DiscardCommand, &["ad"], &list).unwrap();
        assert_eq!(urls(&out), vec!["http://a/page"]);
        assert_eq!(h.take_output(), "Removed 2 URLs matching pattern.\n");
    }

    #[test]
    fn no_match_keeps_everything() {
        let mut h = Harness::new();
        let list = records(&["a", "b"]);
        assert_eq!(h.run(&DiscardCommand, &["zzz"], &list).unwrap(), list);
        assert_eq!(h.take_output(), "Removed 0 URLs matching pattern.\n");
    }

    #[test]
    fn missing_pattern() {
        let mut h = Harness::new();
        assert_usage(h.run(&DiscardCommand, &[], &[]), "No regex pattern provided.");
    }
}
