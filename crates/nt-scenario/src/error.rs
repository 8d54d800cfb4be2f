//! Scenario-subsystem error type.

use thiserror::Error;

/// Errors produced by `nt-scenario`.  All of them are fatal: a run never
/// starts against a partially parsed scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScenarioError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        ScenarioError::Parse { line, reason: reason.into() }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
