//! Movement-subsystem error type.

use thiserror::Error;

/// Errors produced by `nt-movement`.
#[derive(Debug, Error)]
pub enum MovementError {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MovementError {
    /// Build a parse error tagged with a 1-based line number.
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        MovementError::Parse { line, reason: reason.into() }
    }
}

pub type MovementResult<T> = Result<T, MovementError>;
