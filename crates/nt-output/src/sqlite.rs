//! SQLite trace backend (feature `sqlite`).
//!
//! Single `traces` table, one row per record.  WAL journaling keeps the
//! per-record insert cheap while preserving durability across a crash.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::TraceSink;
use crate::{OutputResult, TraceRecord};

/// Writes trace records to an SQLite database.
pub struct SqliteTraceWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteTraceWriter {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS traces (
                 time_secs         REAL    NOT NULL,
                 tx_bytes          INTEGER NOT NULL,
                 tx_packets        INTEGER NOT NULL,
                 rx_bytes          INTEGER NOT NULL,
                 rx_packets        INTEGER NOT NULL,
                 mean_latency_secs REAL    NOT NULL,
                 last_latency_secs REAL    NOT NULL,
                 mean_jitter_secs  REAL    NOT NULL,
                 lost_packets      INTEGER NOT NULL,
                 distance_m        REAL    NOT NULL,
                 rx_power_dbm      REAL    NOT NULL,
                 position          TEXT    NOT NULL,
                 logged_at         TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl TraceSink for SqliteTraceWriter {
    fn append(&mut self, r: &TraceRecord) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO traces \
             (time_secs, tx_bytes, tx_packets, rx_bytes, rx_packets, \
              mean_latency_secs, last_latency_secs, mean_jitter_secs, \
              lost_packets, distance_m, rx_power_dbm, position, logged_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        stmt.execute(rusqlite::params![
            r.time_secs,
            r.tx_bytes,
            r.tx_packets,
            r.rx_bytes,
            r.rx_packets,
            r.mean_latency_secs,
            r.last_latency_secs,
            r.mean_jitter_secs,
            r.lost_packets,
            r.distance_m,
            r.rx_power_dbm,
            r.position.to_string(),
            r.logged_at,
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
