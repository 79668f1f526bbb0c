//! Turning HCPL source text into validated [`Action`]s.
//!
//! Parsing is deliberately line-oriented and incremental: an action occupies
//! one logical line, except for DO and LET which also consume the following
//! logical line as their value operand. The [`Parser`] validates each line
//! once and hands out one typed action at a time; the VM never re-inspects
//! source text.

use crate::errors::RunError;
use crate::ops::Action;

/// The action keyword every command line must start with.
pub const KEYWORD: &str = "PLEASE";

pub const DO: &str = "PLEASE DO :1.";
pub const DONT: &str = "PLEASE DONT :2.";
pub const LET: &str = "PLEASE LET :3.";
pub const CALL: &str = "PLEASE CALL :4.";
pub const BREACH: &str = "PLEASE BREACH :5.";
pub const EXIT: &str = "PLEASE EXIT :6.";

const COMMANDS: [&str; 6] = ["DO", "DONT", "LET", "CALL", "BREACH", "EXIT"];

/// Strip comments and blank lines from source text, preserving order.
///
/// Everything from the first `//` to the end of a line is discarded, lines
/// are trimmed, and empty results are dropped. This stage never fails.
pub fn normalize(source: &str) -> Vec<&str> {
    source
        .lines()
        .map(|line| {
            let line = match line.find("//") {
                Some(i) => &line[..i],
                None => line,
            };
            line.trim()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

/// Structural validation of a single logical line, applied before dispatch.
/// The order of the checks decides which error wins when several apply.
fn validate(line: &str) -> Result<(), RunError> {
    let is_command = line.starts_with(KEYWORD);
    if is_command && !line.contains('.') {
        return Err(RunError::MissingOrb);
    }
    if is_command && !line.contains(':') {
        return Err(RunError::MissingSemiOrb);
    }
    if line.matches('.').count() > 1 {
        return Err(RunError::TooManyOrbs);
    }
    if is_command {
        if let Some(word) = command_word(line) {
            if !COMMANDS.contains(&word) {
                return Err(RunError::UnknownCommand);
            }
        }
    }
    Ok(())
}

/// Extract the command word from `PLEASE <WORD> :...`, requiring whitespace
/// on both sides of the word. Returns `None` when the line does not have
/// that shape; such lines fall through to dispatch and fail there.
fn command_word(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(KEYWORD)?;
    let word_start = rest.trim_start();
    if word_start.len() == rest.len() {
        return None;
    }
    let end = word_start
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(word_start.len());
    if end == 0 {
        return None;
    }
    let (word, after) = word_start.split_at(end);
    let after_colon = after.trim_start();
    if after_colon.len() == after.len() || !after_colon.starts_with(':') {
        return None;
    }
    Some(word)
}

/// Parse a value operand line: an optional minus sign followed by digits,
/// nothing else.
fn parse_value(line: &str) -> Option<i64> {
    let digits = line.strip_prefix('-').unwrap_or(line);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Parse an inline index operand: optional whitespace, then a digit run.
/// An index too large for `usize` saturates and fails the range check in
/// the Databer instead.
fn inline_index(rest: &str, command: &'static str) -> Result<usize, RunError> {
    let rest = rest.trim_start();
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return Err(RunError::MissingIndex { command });
    }
    Ok(rest[..end].parse().unwrap_or(usize::MAX))
}

/// A cursor over the logical lines of a program, yielding one validated
/// action at a time.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Parser { lines: normalize(source), pos: 0 }
    }

    /// Whether the normalized program contains an EXIT line. Checked before
    /// any action runs.
    pub fn has_exit(&self) -> bool {
        self.lines.iter().any(|line| line.starts_with(EXIT))
    }

    /// The next action, or `None` at the end of the program. Consumes one
    /// logical line, plus a second one for DO and LET value operands.
    pub fn next_action(&mut self) -> Option<Result<Action, RunError>> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            self.pos += 1;
            if let Err(error) = validate(line) {
                return Some(Err(error));
            }
            // Lines starting with '#' are skipped once they survive
            // validation.
            if line.starts_with('#') {
                continue;
            }
            return Some(self.classify(line));
        }
        None
    }

    fn classify(&mut self, line: &'a str) -> Result<Action, RunError> {
        if line.starts_with(DO) {
            let value = self.take_value(DO)?;
            Ok(Action::Do { value })
        } else if line.starts_with(DONT) {
            let index = inline_index(&line[DONT.len()..], DONT)?;
            Ok(Action::Dont { index })
        } else if line.starts_with(LET) {
            let index = inline_index(&line[LET.len()..], LET)?;
            let value = self.take_value(LET)?;
            Ok(Action::Let { index, value })
        } else if line.starts_with(CALL) {
            Ok(Action::Call)
        } else if line.starts_with(BREACH) {
            Ok(Action::Breach)
        } else if line.starts_with(EXIT) {
            Ok(Action::Exit)
        } else {
            Err(RunError::UnrecognizedAction { line: line.to_string() })
        }
    }

    fn take_value(&mut self, command: &'static str) -> Result<i64, RunError> {
        let Some(&line) = self.lines.get(self.pos) else {
            return Err(RunError::MissingValue { command });
        };
        self.pos += 1;
        parse_value(line).ok_or(RunError::ExpectedValue { command })
    }
}
