//! Received-power readings.

use nt_core::{NodeId, SimTime};

// ── SignalSource ──────────────────────────────────────────────────────────────

/// Source of received-power readings for a terminal/station pair, in dBm.
pub trait SignalSource {
    fn rx_power_dbm(&self, terminal: NodeId, station: NodeId, now: SimTime) -> f64;
}

// ── LogDistancePathLoss ───────────────────────────────────────────────────────

/// Log-distance path-loss curve:
///
/// ```text
/// rx = tx − (ref_loss_db + 10 · exponent · log10(d / 1 m))
/// ```
///
/// Distances below one metre clamp to the reference loss.  This is a pure
/// model — callers supply the transmit power and the distance; wiring it to
/// node positions is the world's job.
#[derive(Copy, Clone, Debug)]
pub struct LogDistancePathLoss {
    /// Path-loss exponent; ~1.7 for indoor line-of-sight, 3+ obstructed.
    pub exponent:    f64,
    /// Loss at the 1 m reference distance, dB.
    pub ref_loss_db: f64,
}

impl LogDistancePathLoss {
    /// Indoor-office line-of-sight defaults at millimetre-wave frequencies.
    pub fn indoor_office() -> Self {
        Self { exponent: 1.73, ref_loss_db: 61.4 }
    }

    /// Received power for a transmitter at `tx_power_dbm`, `distance_m` away.
    pub fn rx_power_dbm(&self, tx_power_dbm: f64, distance_m: f64) -> f64 {
        let d = distance_m.max(1.0);
        tx_power_dbm - (self.ref_loss_db + 10.0 * self.exponent * d.log10())
    }
}
