//! Interactive prompt: rustyline editor with command-name completion.

use super::shell::{Flow, Shell};
use anyhow::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use std::io::Write;

/// Completes command names at the start of the line and as the argument of
/// `help`; never anywhere else.
pub struct CommandHelper {
    commands: Vec<&'static str>,
}

impl CommandHelper {
    pub fn new(commands: Vec<&'static str>) -> Self {
        Self { commands }
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = complete_command(line, pos, &self.commands);
        let candidates = names
            .into_iter()
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<Self::Hint> {
        None
    }
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

impl Helper for CommandHelper {}

/// Completion candidates for the text before `pos`, and the byte offset
/// the replacement starts at.
pub fn complete_command<'a>(line: &str, pos: usize, commands: &[&'a str]) -> (usize, Vec<&'a str>) {
    let before = line.get(..pos).unwrap_or(line);
    let tokens: Vec<&str> = before.split_whitespace().collect();
    let at_word_boundary = before.is_empty() || before.ends_with(char::is_whitespace);

    let matching = |prefix: &str| -> Vec<&'a str> {
        commands.iter().copied().filter(|c| c.starts_with(prefix)).collect()
    };

    match (tokens.as_slice(), at_word_boundary) {
        ([], _) => (pos, matching("")),
        ([word], false) => (pos - word.len(), matching(*word)),
        (["help"], true) => (pos, matching("")),
        (["help", word], false) => (pos - word.len(), matching(*word)),
        _ => (pos, Vec::new()),
    }
}

/// Reads and executes lines until `exit`, Ctrl-C or Ctrl-D.
pub fn run<W: Write>(shell: &mut Shell<W>) -> Result<()> {
    let mut rl: Editor<CommandHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandHelper::new(shell.command_names())));

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                if shell.execute_line(&line)? == Flow::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                shell.farewell()?;
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
