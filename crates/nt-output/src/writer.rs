//! The `TraceSink` trait implemented by all backend writers.

use crate::{OutputResult, TraceRecord};

/// Destination for trace records.
///
/// `append` persists a single record; backends that can do so durably flush
/// before returning.  `finish` closes the underlying file and must be
/// idempotent — safe to call more than once.
pub trait TraceSink {
    fn append(&mut self, record: &TraceRecord) -> OutputResult<()>;

    fn finish(&mut self) -> OutputResult<()>;
}
