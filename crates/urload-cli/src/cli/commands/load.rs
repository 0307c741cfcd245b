//! `load <file>` – append URLs from a list file.

use super::{Command, CommandError, CommandResult, Env};
use std::path::Path;
use urload_core::list_file::load_list;
use urload_core::UrlRecord;

pub struct LoadCommand;

impl Command for LoadCommand {
    fn name(&self) -> &'static str {
        "load"
    }

    fn description(&self) -> &'static str {
        "load <filename> - Load URLs from a file.

Each line holds a URL, optionally followed by a space and a JSON object of
request headers. Blank lines are skipped. Loaded URLs are appended to the
current list; if any line is malformed nothing is loaded."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let [file] = args else {
            return Err(CommandError::usage(
                "load command requires exactly one filename argument.",
            ));
        };
        let loaded = load_list(Path::new(file))?;
        writeln!(env.out, "Loaded {} URLs from {}.", loaded.len(), file)?;

        let mut out = records.to_vec();
        out.extend(loaded);
        Ok(out)
    }
}
