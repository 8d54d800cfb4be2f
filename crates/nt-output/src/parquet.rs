//! Parquet trace backend (feature `parquet`).
//!
//! Each `append` writes a single-row record batch; `finish()` **must** be
//! called to write the file footer — a Parquet file without its footer
//! cannot be opened, so this backend does not bound data loss on abrupt
//! termination the way the CSV backend does.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::TraceSink;
use crate::{OutputResult, TraceRecord};

fn trace_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("time_secs",         DataType::Float64, false),
        Field::new("tx_bytes",          DataType::UInt64,  false),
        Field::new("tx_packets",        DataType::UInt64,  false),
        Field::new("rx_bytes",          DataType::UInt64,  false),
        Field::new("rx_packets",        DataType::UInt64,  false),
        Field::new("mean_latency_secs", DataType::Float64, false),
        Field::new("last_latency_secs", DataType::Float64, false),
        Field::new("mean_jitter_secs",  DataType::Float64, false),
        Field::new("lost_packets",      DataType::UInt32,  false),
        Field::new("distance_m",        DataType::Float64, false),
        Field::new("rx_power_dbm",      DataType::Float64, false),
        Field::new("position",          DataType::Utf8,    false),
        Field::new("logged_at",         DataType::Utf8,    false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes trace records to a Parquet file.
pub struct ParquetTraceWriter {
    out:    Option<ArrowWriter<File>>,
    schema: Arc<Schema>,
}

impl ParquetTraceWriter {
    /// Create the Parquet file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let schema = trace_schema();
        let file = File::create(path)?;
        let out = ArrowWriter::try_new(file, Arc::clone(&schema), Some(snappy_props()))?;
        Ok(Self { out: Some(out), schema })
    }
}

impl TraceSink for ParquetTraceWriter {
    fn append(&mut self, r: &TraceRecord) -> OutputResult<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };

        let mut time_secs         = Float64Builder::new();
        let mut tx_bytes          = UInt64Builder::new();
        let mut tx_packets        = UInt64Builder::new();
        let mut rx_bytes          = UInt64Builder::new();
        let mut rx_packets        = UInt64Builder::new();
        let mut mean_latency_secs = Float64Builder::new();
        let mut last_latency_secs = Float64Builder::new();
        let mut mean_jitter_secs  = Float64Builder::new();
        let mut lost_packets      = UInt32Builder::new();
        let mut distance_m        = Float64Builder::new();
        let mut rx_power_dbm      = Float64Builder::new();
        let mut position          = StringBuilder::new();
        let mut logged_at         = StringBuilder::new();

        time_secs.append_value(r.time_secs);
        tx_bytes.append_value(r.tx_bytes);
        tx_packets.append_value(r.tx_packets);
        rx_bytes.append_value(r.rx_bytes);
        rx_packets.append_value(r.rx_packets);
        mean_latency_secs.append_value(r.mean_latency_secs);
        last_latency_secs.append_value(r.last_latency_secs);
        mean_jitter_secs.append_value(r.mean_jitter_secs);
        lost_packets.append_value(r.lost_packets);
        distance_m.append_value(r.distance_m);
        rx_power_dbm.append_value(r.rx_power_dbm);
        position.append_value(r.position.to_string());
        logged_at.append_value(&r.logged_at);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.schema),
            vec![
                Arc::new(time_secs.finish()),
                Arc::new(tx_bytes.finish()),
                Arc::new(tx_packets.finish()),
                Arc::new(rx_bytes.finish()),
                Arc::new(rx_packets.finish()),
                Arc::new(mean_latency_secs.finish()),
                Arc::new(last_latency_secs.finish()),
                Arc::new(mean_jitter_secs.finish()),
                Arc::new(lost_packets.finish()),
                Arc::new(distance_m.finish()),
                Arc::new(rx_power_dbm.finish()),
                Arc::new(position.finish()),
                Arc::new(logged_at.finish()),
            ],
        )?;
        out.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(out) = self.out.take() {
            out.close()?;
        }
        Ok(())
    }
}
