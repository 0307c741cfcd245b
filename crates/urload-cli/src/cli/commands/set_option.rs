//! `set-option <key>=<value>` – change a setting.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::UrlRecord;

pub struct SetOptionCommand;

const USAGE: &str = "Usage: set-option <key>=<value>";

impl Command for SetOptionCommand {
    fn name(&self) -> &'static str {
        "set-option"
    }

    fn description(&self) -> &'static str {
        "set-option <key>=<value> - Set an application setting.

Sets a setting such as filename_template or timeout_secs. The value is
validated first; the settings file is written when the program exits.
Use get-option to list the keys."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let [arg] = args else {
            return Err(CommandError::usage(USAGE));
        };
        let (key, value) = arg.split_once('=').ok_or_else(|| CommandError::usage(USAGE))?;
        let (key, value) = (key.trim(), value.trim());
        env.settings.set(key, value)?;
        tracing::info!(key, value, "setting changed");
        writeln!(env.out, "{} set to {}", key, value)?;
        Ok(records.to_vec())
    }
}
