//! `save <file>` – write the list to a list file.

use super::{Command, CommandError, CommandResult, Env};
use std::path::Path;
use urload_core::list_file::save_list;
use urload_core::UrlRecord;

pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &'static str {
        "save"
    }

    fn description(&self) -> &'static str {
        "save <filename> - Save URLs to a file.

Writes one line per URL, followed by its headers as a JSON object when it has
any. The file is replaced if it exists. `load` reads the same format."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let [file] = args else {
            return Err(CommandError::usage(
                "save command requires exactly one filename argument.",
            ));
        };
        save_list(Path::new(file), records)
            .map_err(|e| CommandError::usage(format!("Could not write file: {}", e)))?;
        writeln!(env.out, "Saved {} URLs to {}.", records.len(), file)?;
        Ok(records.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::super::load::LoadCommand;
    use super::super::test_support::*;
    use super::*;
    use std::fs;

    #[test]
    fn writes_lines_and_reloads_identically() {
        let mut h = Harness::new();
        let path = h.dir.path().join("out.txt");
        let file = path.to_str().unwrap();
        let mut list = records(&["http://a/"]);
        list.push(UrlRecord::with_referer("http://b/é", "http://a/"));

        assert_eq!(h.run(&SaveCommand, &[file], &list).unwrap(), list);
        assert_eq!(h.take_output(), format!("Saved 2 URLs to {}.\n", file));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "http://a/\nhttp://b/é {\"Referer\":\"http://a/\"}\n"
        );

        let reloaded = h.run(&LoadCommand, &[file], &[]).unwrap();
        assert_eq!(reloaded, list);
    }

    #[test]
    fn unwritable_path() {
        let mut h = Harness::new();
        let file = h.dir.path().join("no/such/dir/out.txt");
        match h.run(&SaveCommand, &[file.to_str().unwrap()], &[]) {
            Err(CommandError::Usage(msg)) => assert!(msg.starts_with("Could not write file:")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
