//! The four HCPL error kinds and their message templates.
use thiserror::Error;

/// The flat HCPL error taxonomy. Every [`RunError`] variant classifies as
/// exactly one of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// A required structural marker is missing from an action line.
    Amnesia,
    /// An action line carries more than one Orb.
    OrbOverload,
    /// A structurally valid action line names an unknown command.
    Syntax,
    /// Any semantic failure: missing EXIT, bad operand, bad index,
    /// unrecognized line.
    Stupid,
}

/// An error that terminates an HCPL run. The first one encountered stops
/// execution; nothing is ever recovered internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("AMNESIA ERROR - Missing Orb (.) in command.")]
    MissingOrb,
    #[error("AMNESIA ERROR - Missing Semi-Orb (:) in command.")]
    MissingSemiOrb,
    #[error("ORB OVERLOAD ERROR - Too many Orbs (.) in command.")]
    TooManyOrbs,
    #[error("SYNTAX ERROR - Unknown command despite correct syntax.")]
    UnknownCommand,
    #[error("Stupid error: Missing PLEASE EXIT :6. command at the end of the program")]
    MissingExit,
    #[error("Stupid error: Expected numeric value in the next line after {command}")]
    ExpectedValue { command: &'static str },
    #[error("Stupid error: Missing value after {command}")]
    MissingValue { command: &'static str },
    #[error("Stupid error: {command} requires an index")]
    MissingIndex { command: &'static str },
    #[error("Stupid error: Cannot remove Dataling at index {index}, out of range")]
    RemoveOutOfRange { index: usize },
    #[error("Stupid error: Cannot update Dataling at index {index}, out of range")]
    UpdateOutOfRange { index: usize },
    #[error("Unrecognized action: {line}")]
    UnrecognizedAction { line: String },
    #[error("Stupid error: Too many actions executed (limit {limit})")]
    TooManyActions { limit: u64 },
}

impl RunError {
    /// The kind this error classifies as.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::MissingOrb | RunError::MissingSemiOrb => ErrorKind::Amnesia,
            RunError::TooManyOrbs => ErrorKind::OrbOverload,
            RunError::UnknownCommand => ErrorKind::Syntax,
            RunError::MissingExit
            | RunError::ExpectedValue { .. }
            | RunError::MissingValue { .. }
            | RunError::MissingIndex { .. }
            | RunError::RemoveOutOfRange { .. }
            | RunError::UpdateOutOfRange { .. }
            | RunError::UnrecognizedAction { .. }
            | RunError::TooManyActions { .. } => ErrorKind::Stupid,
        }
    }
}
