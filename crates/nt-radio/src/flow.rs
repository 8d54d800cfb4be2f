//! Flow counters and the probe interface that snapshots them.

use nt_core::{FlowId, SimTime};

// ── FlowCounters ──────────────────────────────────────────────────────────────

/// Raw cumulative counters for one tracked traffic flow, as maintained by
/// the external flow monitor.
///
/// Delay and jitter are carried as *sums* over all received packets; the
/// sampling layer divides by `rx_packets` to derive means.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct FlowCounters {
    pub tx_bytes:        u64,
    pub tx_packets:      u64,
    pub rx_bytes:        u64,
    pub rx_packets:      u64,
    /// Sum of per-packet one-way delay, seconds.
    pub delay_sum_secs:  f64,
    /// Sum of per-packet delay variation, seconds.
    pub jitter_sum_secs: f64,
    /// Delay of the most recently received packet, seconds.
    pub last_delay_secs: f64,
    pub lost_packets:    u32,
}

// ── FlowProbe ─────────────────────────────────────────────────────────────────

/// Source of per-flow counter snapshots.
///
/// `flow_counters` returns the cumulative counters of every tracked flow as
/// of `now`, in a stable flow order.  The call is synchronous and local;
/// there is nothing to retry.
pub trait FlowProbe {
    fn flow_counters(&mut self, now: SimTime) -> Vec<(FlowId, FlowCounters)>;
}

// ── CbrFlowModel ──────────────────────────────────────────────────────────────

/// Reference probe: one constant-bit-rate downlink flow with a fixed one-way
/// delay and no loss.
///
/// Packets of `packet_size_bytes` leave the source every
/// `packet_size_bytes * 8 / bitrate_bps` seconds starting at `start`; a
/// packet is counted as received once `one_way_delay` has elapsed since its
/// transmission.  Useful for demos and deterministic tests — a real run
/// substitutes the radio library's flow monitor.
#[derive(Clone, Debug)]
pub struct CbrFlowModel {
    pub flow:              FlowId,
    pub bitrate_bps:       f64,
    pub packet_size_bytes: u32,
    pub one_way_delay:     SimTime,
    pub start:             SimTime,
}

impl CbrFlowModel {
    /// Interval between consecutive packets.
    fn packet_interval(&self) -> SimTime {
        let secs = self.packet_size_bytes as f64 * 8.0 / self.bitrate_bps;
        SimTime::from_micros((secs * 1e6).round() as u64)
    }

    /// Packets transmitted by `at` (the first packet leaves at `start`).
    fn packets_sent_by(&self, at: SimTime) -> u64 {
        if at < self.start {
            return 0;
        }
        let interval = self.packet_interval();
        if interval == SimTime::ZERO {
            return 0;
        }
        (at - self.start).as_micros() / interval.as_micros() + 1
    }

    /// Counter snapshot as of `now`.
    pub fn counters(&self, now: SimTime) -> FlowCounters {
        let tx_packets = self.packets_sent_by(now);
        // A packet is received once it has been in flight for the full delay.
        let rx_packets = if now < self.start + self.one_way_delay {
            0
        } else {
            self.packets_sent_by(now - self.one_way_delay)
        };
        let delay = self.one_way_delay.as_secs_f64();

        FlowCounters {
            tx_bytes:        tx_packets * self.packet_size_bytes as u64,
            tx_packets,
            rx_bytes:        rx_packets * self.packet_size_bytes as u64,
            rx_packets,
            delay_sum_secs:  rx_packets as f64 * delay,
            jitter_sum_secs: 0.0,
            last_delay_secs: if rx_packets > 0 { delay } else { 0.0 },
            lost_packets:    0,
        }
    }
}

impl FlowProbe for CbrFlowModel {
    fn flow_counters(&mut self, now: SimTime) -> Vec<(FlowId, FlowCounters)> {
        vec![(self.flow, self.counters(now))]
    }
}
