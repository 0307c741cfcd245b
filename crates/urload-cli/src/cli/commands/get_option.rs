//! `get-option [<key>]` – print settings as `key=value`.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::UrlRecord;

pub struct GetOptionCommand;

impl Command for GetOptionCommand {
    fn name(&self) -> &'static str {
        "get-option"
    }

    fn description(&self) -> &'static str {
        "get-option [<key>] - Get application settings.

Prints all settings as key=value, or a single key if specified."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        match args {
            [] => {
                for (key, value) in env.settings.entries() {
                    writeln!(env.out, "{}={}", key, value)?;
                }
            }
            [key] => {
                let value = env.settings.get(key)?;
                writeln!(env.out, "{}={}", key, value)?;
            }
            _ => return Err(CommandError::usage("Usage: get-option [<key>]")),
        }
        Ok(records.to_vec())
    }
}
