//! `add <url>...` – append URLs, expanding `[start-end]` ranges.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::expand::expand_brackets;
use urload_core::UrlRecord;

pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "add <url>... - Add one or more URLs to the list.

Each argument may contain numeric ranges such as [1-10] or [08-12]; every
combination is added, zero-padded to the width of the range start.
Nothing is added if any range is invalid."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        if args.is_empty() {
            return Err(CommandError::usage("No URL provided."));
        }
        let mut added = Vec::new();
        for arg in args {
            added.extend(expand_brackets(arg)?.into_iter().map(UrlRecord::new));
        }
        writeln!(env.out, "Added {} URLs.", added.len())?;

        let mut out = records.to_vec();
        out.extend(added);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn appends_single_url() {
        let mut h = Harness::new();
        let out = h.run(&AddCommand, &["http://a/x"], &records(&["http://a/0"])).unwrap();
        assert_eq!(urls(&out), vec!["http://a/0", "http://a/x"]);
        assert_eq!(h.take_output(), "Added 1 URLs.\n");
    }

    #[test]
    fn expands_padded_ranges() {
        let mut h = Harness::new();
        let out = h.run(&AddCommand, &["http://a/img[08-10].jpg"], &[]).unwrap();
        assert_eq!(
            urls(&out),
            vec!["http://a/img08.jpg", "http://a/img09.jpg", "http://a/img10.jpg"]
        );
    }

    #[test]
    fn multiple_arguments_keep_order() {
        let mut h = Harness::new();
        let out = h.run(&AddCommand, &["http://a/[1-2]", "http://b/"], &[]).unwrap();
        assert_eq!(urls(&out), vec!["http://a/1", "http://a/2", "http://b/"]);
        assert_eq!(h.take_output(), "Added 3 URLs.\n");
    }

    #[test]
    fn reversed_range_adds_nothing() {
        let mut h = Harness::new();
        let result = h.run(&AddCommand, &["http://ok/", "http://a/[5-1]"], &[]);
        assert_usage(result, "Range start (5) greater than end (1)");
        assert!(h.take_output().is_empty());
    }

    #[test]
    fn oversized_expansion_is_a_usage_error() {
        let mut h = Harness::new();
        let result = h.run(&AddCommand, &["http://h/[0-18446744073709551615]"], &[]);
        assert!(matches!(result, Err(CommandError::Usage(ref m)) if m.starts_with("Range expands to")));
        assert!(h.take_output().is_empty());
    }

    #[test]
    fn missing_url() {
        let mut h = Harness::new();
        assert_usage(h.run(&AddCommand, &[], &[]), "No URL provided.");
    }
}
