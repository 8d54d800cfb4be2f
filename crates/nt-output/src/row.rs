//! The trace-log row type.

use nt_core::Vec3;

/// One sample of one flow: derived traffic metrics plus the radio-link
/// context they were measured in.  Never mutated after emission.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    /// Simulated time of the sample, seconds.
    pub time_secs:         f64,
    pub tx_bytes:          u64,
    pub tx_packets:        u64,
    pub rx_bytes:          u64,
    pub rx_packets:        u64,
    /// Mean one-way latency over received packets, seconds.
    pub mean_latency_secs: f64,
    /// Latency of the most recently received packet, seconds.
    pub last_latency_secs: f64,
    /// Mean delay variation over received packets, seconds.
    pub mean_jitter_secs:  f64,
    pub lost_packets:      u32,
    /// Terminal–station Euclidean distance, metres.
    pub distance_m:        f64,
    /// Received signal power, dBm.  `-inf` marks an interval with no
    /// received packets.
    pub rx_power_dbm:      f64,
    /// Terminal position at sample time, logged as `x:y:z`.
    pub position:          Vec3,
    /// Wall-clock time the row was produced, `%Y-%m-%d %H:%M:%S`.
    pub logged_at:         String,
}

/// Wall-clock timestamp in the trace-log format.
pub fn wall_clock_stamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
