//! Engine error type.

use nt_core::SimTime;
use thiserror::Error;

use crate::task::TaskError;

/// Errors that abort an [`EventLoop`][crate::EventLoop] run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{label} failed at {at}: {source}")]
    Task {
        at:     SimTime,
        label:  &'static str,
        #[source]
        source: TaskError,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
