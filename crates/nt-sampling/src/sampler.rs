//! The `Sampler` task: read counters, steer, measure, persist, re-arm.

use nt_core::{NodeId, SimRng, SimTime};
use nt_engine::{Task, TaskError};
use nt_mobility::Steering;
use nt_output::{TraceRecord, TraceSink, wall_clock_stamp};
use nt_radio::{FlowProbe, MobilityModel, SignalSource};

use crate::metrics::FlowMetrics;

// ── SamplerConfig ─────────────────────────────────────────────────────────────

/// Static parameters of a sampling run.
#[derive(Copy, Clone, Debug)]
pub struct SamplerConfig {
    /// The tracked mobile terminal.
    pub terminal: NodeId,
    /// The station distance and signal power are measured against.
    pub station:  NodeId,
    /// Spacing between samples.
    pub interval: SimTime,
    /// Total simulated duration of the run.
    pub horizon:  SimTime,
}

// ── Sampler ───────────────────────────────────────────────────────────────────

/// The periodic measurement task.
///
/// Schedule it at `t = 0`; it then re-arms itself every `interval` for as
/// long as the *next* sample still fits the run, i.e. samples land at every
/// multiple of the interval in `[0, horizon − interval]`.  The final firing
/// finishes the sink.  There is no explicit cancellation — the task simply
/// declines to re-arm once the horizon is reached.
///
/// Per firing, in order:
///
/// 1. If a steering controller is attached, show it the terminal's current
///    position and apply the velocity it answers — *before* any measurement,
///    so the sample reflects this tick's steering decision.
/// 2. Read terminal and station positions and take their Euclidean distance;
///    read the received signal power.
/// 3. Snapshot all flow counters, derive each flow's metrics, and append one
///    record per flow to the sink (the sink flushes per record).  A flow
///    with no received packets reports zeroed metrics and `-inf` signal
///    power.
pub struct Sampler<S, W> {
    config:   SamplerConfig,
    /// `None` when mobility is driven entirely by the collaborator (e.g. a
    /// random-walk model owned by the radio library).
    steering: Option<S>,
    rng:      SimRng,
    sink:     W,
}

impl<S, W> Sampler<S, W> {
    pub fn new(config: SamplerConfig, steering: Option<S>, rng: SimRng, sink: W) -> Self {
        Self { config, steering, rng, sink }
    }
}

impl<C, S, W> Task<C> for Sampler<S, W>
where
    C: FlowProbe + MobilityModel + SignalSource,
    S: Steering,
    W: TraceSink,
{
    fn fire(&mut self, now: SimTime, world: &mut C) -> Result<Option<SimTime>, TaskError> {
        let SamplerConfig { terminal, station, interval, horizon } = self.config;

        // ── Steering first: the sample sees this tick's decision ──────────
        if let Some(steering) = self.steering.as_mut() {
            let position = world.position(terminal, now);
            let velocity = steering.steer(now, position, &mut self.rng);
            world.set_velocity(terminal, now, velocity);
        }

        // ── Radio-link context ────────────────────────────────────────────
        let terminal_pos = world.position(terminal, now);
        let station_pos  = world.position(station, now);
        let distance_m = terminal_pos.distance(station_pos);
        let rx_power_dbm = world.rx_power_dbm(terminal, station, now);

        // ── One record per flow ───────────────────────────────────────────
        let logged_at = wall_clock_stamp();
        for (_flow, counters) in world.flow_counters(now) {
            let m = FlowMetrics::derive(&counters);
            self.sink.append(&TraceRecord {
                time_secs:         now.as_secs_f64(),
                tx_bytes:          m.tx_bytes,
                tx_packets:        m.tx_packets,
                rx_bytes:          m.rx_bytes,
                rx_packets:        m.rx_packets,
                mean_latency_secs: m.mean_latency_secs,
                last_latency_secs: m.last_latency_secs,
                mean_jitter_secs:  m.mean_jitter_secs,
                lost_packets:      m.lost_packets,
                distance_m,
                rx_power_dbm:      if m.is_silent() { f64::NEG_INFINITY } else { rx_power_dbm },
                position:          terminal_pos,
                logged_at:         logged_at.clone(),
            })?;
        }

        // ── Re-arm while the next sample still fits the horizon ───────────
        let next = now + interval;
        if next + interval <= horizon {
            Ok(Some(next))
        } else {
            self.sink.finish()?;
            Ok(None)
        }
    }

    fn label(&self) -> &'static str {
        "sampler"
    }
}
