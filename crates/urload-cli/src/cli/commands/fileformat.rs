//! `fileformat [<template>]` – show or set the download filename template.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::UrlRecord;

pub struct FileformatCommand;

impl Command for FileformatCommand {
    fn name(&self) -> &'static str {
        "fileformat"
    }

    fn description(&self) -> &'static str {
        "fileformat [<template>] - Get or set the filename template for saving URLs.

With no arguments, prints the current template. With one argument, validates
and sets it. Example: {index:04d}_{basename}.{ext}

Placeholders:
- basename: the filename up to its first dot
- dirname: the directory part of the URL path
- ext: the filename after its first dot
- filename: the last path segment (index.html if empty)
- host: the host part of the URL
- index: the download counter (integer, e.g. {index:04d})
- timestamp: the time of the `get` run (see `timeformat`)"
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        match args {
            [] => writeln!(env.out, "{}", env.settings.filename_template)?,
            [template] => {
                env.settings.set("filename_template", template)?;
                tracing::info!(template = %template, "filename template changed");
                writeln!(env.out, "Filename template set to: {}", template)?;
            }
            _ => return Err(CommandError::usage("fileformat takes at most one argument.")),
        }
        Ok(records.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn prints_and_sets_template() {
        let mut h = Harness::new();
        h.run(&FileformatCommand, &[], &[]).unwrap();
        assert_eq!(h.take_output(), "{index:04d}_{filename}\n");

        h.run(&FileformatCommand, &["{host}/{filename}"], &[]).unwrap();
        assert_eq!(h.take_output(), "Filename template set to: {host}/{filename}\n");
        assert_eq!(h.settings.filename_template, "{host}/{filename}");
    }

    #[test]
    fn invalid_template_is_not_stored() {
        let mut h = Harness::new();
        match h.run(&FileformatCommand, &["{nope}"], &[]) {
            Err(CommandError::Usage(msg)) => {
                assert!(msg.starts_with("Invalid filename template:"), "{msg}")
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(h.settings.filename_template, "{index:04d}_{filename}");
    }

    #[test]
    fn too_many_arguments() {
        let mut h = Harness::new();
        assert_usage(
            h.run(&FileformatCommand, &["a", "b"], &[]),
            "fileformat takes at most one argument.",
        );
    }
}
