//! `del <index> | del <start>-<end>` – remove one URL or an inclusive range.

use super::{Command, CommandResult, Env};
use urload_core::delete_target::DeleteTarget;
use urload_core::UrlRecord;

pub struct DelCommand;

impl Command for DelCommand {
    fn name(&self) -> &'static str {
        "del"
    }

    fn description(&self) -> &'static str {
        "del <index> | del <start>-<end> - Delete one or more URLs by index or range.

Removes a single URL by index, or an inclusive range of URLs. Spaces inside
the argument are ignored, so `del 2 - 4` is the same as `del 2-4`."
    }

    fn run(&self, args: &[String], records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        let joined = args.concat();
        let arg = (!args.is_empty()).then_some(joined.as_str());
        let target = DeleteTarget::parse(arg, records.len())?;
        let remaining = target.apply(records);
        match target {
            DeleteTarget::Index(i) => writeln!(env.out, "Deleted URL at index {}.", i)?,
            DeleteTarget::Range { start, end } => writeln!(
                env.out,
                "Deleted {} URLs from index {} to {}.",
                target.count(),
                start,
                end
            )?,
        }
        Ok(remaining)
    }
}
