//! `timeformat [<format>]` – show or set the `{timestamp}` format.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::UrlRecord;

pub struct TimeformatCommand;

impl Command for TimeformatCommand {
    fn name(&self) -> &'static str {
        "timeformat"
    }

    fn description(&self) -> &'static str {
        "timeformat [<format>] - Get or set the current time format string.

With no arguments, prints the current strftime format. With one argument,
validates and sets it. The format must contain at least one % code.
Default: %Y%m%d%H%M%S"
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        match args {
            [] => writeln!(env.out, "{}", env.settings.time_format)?,
            [format] => {
                env.settings.set("time_format", format)?;
                writeln!(env.out, "Time format set to: {}", format)?;
            }
            _ => return Err(CommandError::usage("timeformat takes at most one argument.")),
        }
        Ok(records.to_vec())
    }
}
