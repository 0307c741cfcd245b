//! `clear` – empty the list.

use super::{no_args, Command, CommandResult, Env};
use urload_core::UrlRecord;

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "clear - Clear the current URL list.

Removes all URLs from the list, leaving it empty."
    }

    fn run(&self, args: &[String], _records: &[UrlRecord], _env: &mut Env<'_>) -> CommandResult {
        no_args(self.name(), args)?;
        Ok(Vec::new())
    }
}
