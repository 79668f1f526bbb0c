//! Executing HCPL programs.
use crate::chars;
use crate::errors::RunError;
use crate::ops::Action;
use crate::parser::Parser;

#[cfg(test)]
mod tests;

/// The Databer, the sole HCPL data structure: an ordered sequence of
/// integer Datalings.
///
/// A Dataling has no identity beyond its current position. Removal shifts
/// every later Dataling down by one, so indices are reusable: removing
/// index 0 twice removes the first two original elements. Programs rely on
/// this, so it must stay this way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Databer {
    datalings: Vec<i64>,
}

impl Databer {
    /// Append a new Dataling and return its index.
    pub fn add(&mut self, value: i64) -> usize {
        self.datalings.push(value);
        self.datalings.len() - 1
    }

    /// Remove the Dataling at `index`; later Datalings shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<(), RunError> {
        if index >= self.datalings.len() {
            return Err(RunError::RemoveOutOfRange { index });
        }
        self.datalings.remove(index);
        Ok(())
    }

    /// Overwrite the Dataling at `index`.
    pub fn update(&mut self, index: usize, value: i64) -> Result<(), RunError> {
        match self.datalings.get_mut(index) {
            Some(dataling) => {
                *dataling = value;
                Ok(())
            }
            None => Err(RunError::UpdateOutOfRange { index }),
        }
    }

    /// Remove every Dataling.
    pub fn clear(&mut self) {
        self.datalings.clear();
    }

    pub fn len(&self) -> usize {
        self.datalings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datalings.is_empty()
    }

    /// The Datalings in order, for state inspection. This borrows the live
    /// store the VM mutated; there is no shadow copy.
    pub fn datalings(&self) -> &[i64] {
        &self.datalings
    }

    /// Render every Dataling through the character table and concatenate,
    /// with no separators. Empty Databer renders as the empty string.
    pub fn values(&self) -> String {
        self.datalings.iter().map(|&value| chars::render(value)).collect()
    }
}

/// Options for the HCPL virtual machine.
#[derive(Debug, Clone)]
pub struct VMOptions {
    /// The maximum number of actions to run. HCPL has no loops, so any
    /// valid program terminates on its own; this is a defensive cap,
    /// surfaced as a Stupid error when reached.
    pub max_actions: u64,
    /// When set, DO/DONT/LET/BREACH append descriptive records to the
    /// output as well. Off by default, which leaves exactly one output
    /// record per CALL or EXIT.
    pub trace: bool,
}

impl Default for VMOptions {
    fn default() -> Self {
        Self { max_actions: 1_000_000, trace: false }
    }
}

/// The result of running an HCPL program.
///
/// A failing run keeps every output record produced before the failure, so
/// this is a pair of output and optional error rather than a `Result`.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The output records, in order.
    pub output: Vec<String>,
    /// The final Databer, exactly as the VM left it.
    pub databer: Databer,
    /// The number of actions which have been run.
    pub actions_run: u64,
    /// The error that stopped the run, if any.
    pub error: Option<RunError>,
}

/// The internal state of the VM.
struct State {
    databer: Databer,
    output: Vec<String>,
    trace: bool,
}

enum Effect {
    None,
    Halt,
}

impl State {
    fn new(trace: bool) -> Self {
        State { databer: Databer::default(), output: Vec::new(), trace }
    }

    fn apply(&mut self, action: Action) -> Result<Effect, RunError> {
        match action {
            Action::Do { value } => {
                let index = self.databer.add(value);
                if self.trace {
                    self.output.push(format!(
                        "Created Dataling with value: {value} at index {index}"
                    ));
                }
            }
            Action::Dont { index } => {
                self.databer.remove(index)?;
                if self.trace {
                    self.output.push(format!("Removed Dataling at index: {index}"));
                }
            }
            Action::Let { index, value } => {
                self.databer.update(index, value)?;
                if self.trace {
                    self.output.push(format!(
                        "Updated Dataling at index {index} with value: {value}"
                    ));
                }
            }
            Action::Call => {
                let values = self.databer.values();
                self.output.push(if values.is_empty() {
                    "empty".to_string()
                } else {
                    values
                });
            }
            Action::Breach => {
                self.databer.clear();
                if self.trace {
                    self.output.push("All Datalings removed from Databer".to_string());
                }
            }
            Action::Exit => {
                self.output.push("Exiting INTERFUCK IDE".to_string());
                return Ok(Effect::Halt);
            }
        }
        Ok(Effect::None)
    }
}

/// Run an HCPL program with the given options.
///
/// One invocation is one pass over one source string: the program is
/// validated and executed a single action at a time, fail-fast, and the
/// Databer starts empty and is returned as part of the result.
///
/// # Example
/// ```
/// use hcpl::vm::{run, VMOptions};
///
/// let result = run("PLEASE DO :1.\n100\nPLEASE CALL :4.\nPLEASE EXIT :6.", VMOptions::default());
/// assert!(result.error.is_none());
/// assert_eq!(result.output[0], "100");
/// ```
pub fn run(source: &str, options: VMOptions) -> RunResult {
    let mut parser = Parser::new(source);
    let mut state = State::new(options.trace);
    let mut actions_run: u64 = 0;
    let mut error = None;

    // A program that never asks to leave is refused before any action runs.
    if !parser.has_exit() {
        error = Some(RunError::MissingExit);
    } else {
        while let Some(action) = parser.next_action() {
            match action.and_then(|action| state.apply(action)) {
                Ok(Effect::None) => {}
                Ok(Effect::Halt) => {
                    actions_run += 1;
                    break;
                }
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
            actions_run += 1;
            if actions_run >= options.max_actions {
                error = Some(RunError::TooManyActions { limit: options.max_actions });
                break;
            }
        }
    }

    RunResult { output: state.output, databer: state.databer, actions_run, error }
}
