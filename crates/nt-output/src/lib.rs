//! `nt-output` — trace-log writers for the rust_nt framework.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | File created  |
//! |-----------|---------|---------------|
//! | *(none)*  | CSV     | `traces.csv`  |
//! | `sqlite`  | SQLite  | `traces.db`   |
//! | `parquet` | Parquet | `traces.parquet` |
//!
//! All backends implement [`TraceSink`] and receive one [`TraceRecord`] per
//! flow per sampling interval.  The CSV backend flushes after every record
//! so an aborted run loses at most the row being written; Parquet cannot
//! offer that (files need their closing footer), which is called out on the
//! writer.

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use row::{TraceRecord, wall_clock_stamp};
pub use writer::TraceSink;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteTraceWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetTraceWriter;
