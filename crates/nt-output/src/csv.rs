//! CSV trace backend — the default.
//!
//! One file, header written once at open, **flush after every record**: the
//! sampling interval is long relative to a row write, and an abruptly killed
//! run must lose at most the row in flight.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceSink;
use crate::{OutputResult, TraceRecord};

/// Column order of the trace log.
pub const HEADER: [&str; 13] = [
    "Time",
    "TxBytes",
    "TxPackets",
    "RxBytes",
    "RxPackets",
    "MeanLatency",
    "LastLatency",
    "MeanJitter",
    "LostPackets",
    "Distance",
    "RxPower",
    "Position",
    "Timestamp",
];

/// Writes trace records to a single CSV file.
pub struct CsvTraceWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvTraceWriter {
    /// Create (or truncate) the trace file at `path` and write the header.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut out = Writer::from_path(path)?;
        out.write_record(HEADER)?;
        out.flush()?;
        Ok(Self { out, finished: false })
    }
}

impl TraceSink for CsvTraceWriter {
    fn append(&mut self, r: &TraceRecord) -> OutputResult<()> {
        self.out.write_record(&[
            r.time_secs.to_string(),
            r.tx_bytes.to_string(),
            r.tx_packets.to_string(),
            r.rx_bytes.to_string(),
            r.rx_packets.to_string(),
            r.mean_latency_secs.to_string(),
            r.last_latency_secs.to_string(),
            r.mean_jitter_secs.to_string(),
            r.lost_packets.to_string(),
            r.distance_m.to_string(),
            r.rx_power_dbm.to_string(),
            r.position.to_string(),
            r.logged_at.clone(),
        ])?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
