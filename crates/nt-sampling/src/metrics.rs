//! Derived per-flow KPIs.

use nt_radio::FlowCounters;

/// Metrics derived from one flow's counter snapshot.
///
/// Transmit-side totals are carried through unconditionally.  The
/// receive-side derivations divide by the received-packet count, so a flow
/// that received nothing this interval reports every derived field as zero
/// rather than NaN; the signal-power sentinel for that case is applied where
/// the trace record is assembled.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FlowMetrics {
    pub tx_bytes:          u64,
    pub tx_packets:        u64,
    pub rx_bytes:          u64,
    pub rx_packets:        u64,
    pub mean_latency_secs: f64,
    pub last_latency_secs: f64,
    pub mean_jitter_secs:  f64,
    pub lost_packets:      u32,
}

impl FlowMetrics {
    pub fn derive(c: &FlowCounters) -> Self {
        if c.rx_packets == 0 {
            return FlowMetrics {
                tx_bytes:   c.tx_bytes,
                tx_packets: c.tx_packets,
                ..Default::default()
            };
        }

        let rx = c.rx_packets as f64;
        FlowMetrics {
            tx_bytes:          c.tx_bytes,
            tx_packets:        c.tx_packets,
            rx_bytes:          c.rx_bytes,
            rx_packets:        c.rx_packets,
            mean_latency_secs: c.delay_sum_secs / rx,
            last_latency_secs: c.last_delay_secs,
            mean_jitter_secs:  c.jitter_sum_secs / rx,
            lost_packets:      c.lost_packets,
        }
    }

    /// `true` when the interval saw no received packets — the trace record
    /// then carries the negative-infinity signal sentinel.
    pub fn is_silent(&self) -> bool {
        self.rx_packets == 0
    }
}
