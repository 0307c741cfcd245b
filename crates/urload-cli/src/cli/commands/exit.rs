//! `exit` – leave the shell.

use super::{Command, CommandError, CommandResult, Env};
use urload_core::UrlRecord;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "exit - Exit the application.

Settings are saved on the way out. In a batch file, exit also skips the
remaining lines and files."
    }

    fn run(&self, _args: &[String], _records: &[UrlRecord], env: &mut Env<'_>) -> CommandResult {
        writeln!(env.out, "Goodbye!")?;
        Err(CommandError::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn says_goodbye_and_signals_exit() {
        let mut h = Harness::new();
        assert!(matches!(h.run(&ExitCommand, &[], &[]), Err(CommandError::Exit)));
        assert_eq!(h.take_output(), "Goodbye!\n");
    }
}
