//! Tests for the sampling tasks.
//!
//! The world here is the reference radio stack: kinematic mobility, one CBR
//! flow, log-distance path loss.  The sink collects rows in memory through a
//! shared handle so tests can inspect what a run persisted.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use nt_core::{FlowId, NodeId, SimRng, SimTime, Vec3, WaypointId};
use nt_engine::EventLoop;
use nt_mobility::WaypointWalker;
use nt_movement::{LegalPath, MovementGraph, SpeedInterval, Waypoint};
use nt_output::{OutputResult, TraceRecord, TraceSink};
use nt_radio::{
    CbrFlowModel, FlowCounters, FlowProbe, KinematicModel, LogDistancePathLoss, MobilityModel,
    SignalSource,
};

use crate::{Sampler, SamplerConfig};

// ── Fixtures ──────────────────────────────────────────────────────────────────

struct World {
    kinematics:   KinematicModel,
    flows:        Vec<CbrFlowModel>,
    path_loss:    LogDistancePathLoss,
    tx_power_dbm: f64,
}

impl World {
    /// Terminal at `terminal_pos`, station at `station_pos`, one CBR flow.
    fn new(terminal_pos: Vec3, station_pos: Vec3, flows: Vec<CbrFlowModel>) -> (Self, NodeId, NodeId) {
        let mut kinematics = KinematicModel::new();
        let terminal = kinematics.add_node(terminal_pos);
        let station = kinematics.add_node(station_pos);
        let world = World {
            kinematics,
            flows,
            path_loss: LogDistancePathLoss::indoor_office(),
            tx_power_dbm: 23.0,
        };
        (world, terminal, station)
    }
}

impl FlowProbe for World {
    fn flow_counters(&mut self, now: SimTime) -> Vec<(FlowId, FlowCounters)> {
        self.flows.iter().map(|f| (f.flow, f.counters(now))).collect()
    }
}

impl MobilityModel for World {
    fn position(&self, node: NodeId, now: SimTime) -> Vec3 {
        self.kinematics.position(node, now)
    }
    fn place(&mut self, node: NodeId, position: Vec3, now: SimTime) {
        self.kinematics.place(node, position, now);
    }
    fn set_velocity(&mut self, node: NodeId, now: SimTime, velocity: Vec3) {
        self.kinematics.set_velocity(node, now, velocity);
    }
}

impl SignalSource for World {
    fn rx_power_dbm(&self, terminal: NodeId, station: NodeId, now: SimTime) -> f64 {
        let d = self
            .kinematics
            .position(terminal, now)
            .distance(self.kinematics.position(station, now));
        self.path_loss.rx_power_dbm(self.tx_power_dbm, d)
    }
}

/// Sink that records rows behind a shared handle.
#[derive(Clone, Default)]
struct SharedSink {
    rows:     Rc<RefCell<Vec<TraceRecord>>>,
    finished: Rc<Cell<bool>>,
}

impl TraceSink for SharedSink {
    fn append(&mut self, record: &TraceRecord) -> OutputResult<()> {
        self.rows.borrow_mut().push(record.clone());
        Ok(())
    }
    fn finish(&mut self) -> OutputResult<()> {
        self.finished.set(true);
        Ok(())
    }
}

/// 1000-byte packets at 8 Mbit/s with a 10 ms one-way delay.
fn cbr_flow() -> CbrFlowModel {
    CbrFlowModel {
        flow:              FlowId(0),
        bitrate_bps:       8e6,
        packet_size_bytes: 1000,
        one_way_delay:     SimTime::from_millis(10),
        start:             SimTime::ZERO,
    }
}

/// Corridor 1 — 2 — 3 along the x axis, both ends spawn points, 1 m/s.
fn corridor() -> Arc<MovementGraph> {
    let wp = |id: u32, x: f64| Waypoint {
        id:       WaypointId(id),
        position: Vec3::new(x, 0.0, 1.5),
    };
    Arc::new(MovementGraph {
        waypoints:    vec![wp(1, 0.0), wp(2, 5.0), wp(3, 10.0)],
        spawn_points: vec![WaypointId(1), WaypointId(3)],
        legal_paths:  vec![
            LegalPath {
                from: WaypointId(1),
                to:   WaypointId(3),
                hops: vec![WaypointId(1), WaypointId(2), WaypointId(3)],
            },
            LegalPath {
                from: WaypointId(3),
                to:   WaypointId(1),
                hops: vec![WaypointId(3), WaypointId(2), WaypointId(1)],
            },
        ],
        speed: SpeedInterval { min_mps: 1.0, max_mps: 1.0 },
    })
}

fn config(terminal: NodeId, station: NodeId, interval: SimTime, horizon: SimTime) -> SamplerConfig {
    SamplerConfig { terminal, station, interval, horizon }
}

// ── Sampler scheduling ────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduling {
    use super::*;

    #[test]
    fn hundred_samples_for_the_reference_run() {
        // Interval 100 000 µs against a 10 s horizon: samples at every
        // interval multiple from 0 through 9.9 s — exactly 100 of them.
        let (mut world, terminal, station) =
            World::new(Vec3::new(5.0, 5.0, 1.5), Vec3::new(10.0, 5.0, 3.0), vec![cbr_flow()]);
        let sink = SharedSink::default();

        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_micros(100_000), SimTime::from_secs(10)),
            None::<WaypointWalker>,
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        let end = engine.run(&mut world).unwrap();

        let rows = sink.rows.borrow();
        assert_eq!(rows.len(), 100);
        for (i, row) in rows.iter().enumerate() {
            assert!((row.time_secs - i as f64 * 0.1).abs() < 1e-9);
        }
        assert_eq!(end, SimTime::from_micros(9_900_000));
        assert!(sink.finished.get(), "final firing must finish the sink");
        assert_eq!(engine.live_tasks(), 0);
    }

    #[test]
    fn horizon_shorter_than_interval_fires_once() {
        let (mut world, terminal, station) =
            World::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), vec![cbr_flow()]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(5), SimTime::from_secs(3)),
            None::<WaypointWalker>,
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        assert_eq!(sink.rows.borrow().len(), 1);
        assert!(sink.finished.get());
    }

    #[test]
    fn one_record_per_flow_per_interval() {
        let mut second = cbr_flow();
        second.flow = FlowId(1);
        second.bitrate_bps = 4e6;

        let (mut world, terminal, station) =
            World::new(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), vec![cbr_flow(), second]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(1), SimTime::from_secs(4)),
            None::<WaypointWalker>,
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        // 4 sample instants (0, 1, 2, 3 s) × 2 flows.
        assert_eq!(sink.rows.borrow().len(), 8);
    }
}

// ── Record contents ───────────────────────────────────────────────────────────

#[cfg(test)]
mod records {
    use super::*;

    #[test]
    fn active_flow_reports_derived_means() {
        let (mut world, terminal, station) =
            World::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0), vec![cbr_flow()]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(1), SimTime::from_secs(2)),
            None::<WaypointWalker>,
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        let rows = sink.rows.borrow();
        // t = 1 s: 1001 packets sent, 991 landed, each 10 ms late.
        let row = &rows[1];
        assert_eq!(row.tx_packets, 1001);
        assert_eq!(row.rx_packets, 991);
        assert!((row.mean_latency_secs - 0.010).abs() < 1e-9);
        assert!((row.last_latency_secs - 0.010).abs() < 1e-9);
        assert_eq!(row.mean_jitter_secs, 0.0);
        assert_eq!(row.lost_packets, 0);
        assert_eq!(row.distance_m, 5.0);
        assert!(row.rx_power_dbm.is_finite());
        assert!(!row.logged_at.is_empty());
    }

    #[test]
    fn silent_flow_reports_zeros_and_negative_infinity() {
        // Delay longer than the run: packets transmit but none ever land.
        let mut flow = cbr_flow();
        flow.one_way_delay = SimTime::from_secs(1_000);

        let (mut world, terminal, station) =
            World::new(Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0), vec![flow]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(1), SimTime::from_secs(3)),
            None::<WaypointWalker>,
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        for row in sink.rows.borrow().iter() {
            assert!(row.tx_packets > 0, "transmit side still counts");
            assert_eq!(row.rx_packets, 0);
            assert_eq!(row.rx_bytes, 0);
            assert_eq!(row.mean_latency_secs, 0.0);
            assert_eq!(row.last_latency_secs, 0.0);
            assert_eq!(row.mean_jitter_secs, 0.0);
            assert_eq!(row.lost_packets, 0);
            assert_eq!(row.rx_power_dbm, f64::NEG_INFINITY);
        }
    }
}

// ── Steering integration ──────────────────────────────────────────────────────

#[cfg(test)]
mod steering {
    use super::*;

    #[test]
    fn walker_drives_terminal_down_the_corridor() {
        // Terminal spawns on waypoint 1 at the west end; the only legal trip
        // is to waypoint 3 at the east end, next to the station.
        let graph = corridor();
        let walker = WaypointWalker::new(Arc::clone(&graph), WaypointId(1), 0.5);

        let (mut world, terminal, station) =
            World::new(Vec3::new(0.0, 0.0, 1.5), Vec3::new(10.0, 0.0, 3.0), vec![cbr_flow()]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(1), SimTime::from_secs(10)),
            Some(walker),
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        let rows = sink.rows.borrow();
        assert_eq!(rows.len(), 10);

        // 1 m/s eastbound: the logged position advances one metre per sample
        // and the station distance shrinks monotonically.
        for (i, row) in rows.iter().enumerate() {
            assert!((row.position.x - i as f64).abs() < 1e-9, "sample {i}: {}", row.position);
        }
        for pair in rows.windows(2) {
            assert!(pair[1].distance_m < pair[0].distance_m);
        }

        // The velocity applied at the last sample is still eastbound.
        assert_eq!(world.kinematics.velocity(terminal), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn distance_reflects_position_after_steering() {
        // Place the terminal *off* the graph; the first sample must log the
        // position as read after the steering call of that same tick.
        let graph = corridor();
        let walker = WaypointWalker::new(Arc::clone(&graph), WaypointId(1), 0.5);

        let (mut world, terminal, station) =
            World::new(Vec3::new(-2.0, 0.0, 1.5), Vec3::new(10.0, 0.0, 3.0), vec![cbr_flow()]);
        let sink = SharedSink::default();
        let sampler = Sampler::new(
            config(terminal, station, SimTime::from_secs(1), SimTime::from_secs(2)),
            Some(walker),
            SimRng::new(1),
            sink.clone(),
        );

        let mut engine: EventLoop<World> = EventLoop::new();
        engine.schedule_at(SimTime::ZERO, sampler);
        engine.run(&mut world).unwrap();

        let rows = sink.rows.borrow();
        // Velocity is set at t=0 but the position itself only changes
        // between ticks: sample 0 logs x = −2, sample 1 logs x = −1.
        assert!((rows[0].position.x - -2.0).abs() < 1e-9);
        assert!((rows[1].position.x - -1.0).abs() < 1e-9);
    }
}

// ── FlowMetrics ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod metrics {
    use nt_radio::FlowCounters;

    use crate::FlowMetrics;

    #[test]
    fn derives_means_from_sums() {
        let counters = FlowCounters {
            tx_bytes:        20_000,
            tx_packets:      20,
            rx_bytes:        16_000,
            rx_packets:      16,
            delay_sum_secs:  0.8,
            jitter_sum_secs: 0.032,
            last_delay_secs: 0.06,
            lost_packets:    4,
        };
        let m = FlowMetrics::derive(&counters);
        assert_eq!(m.mean_latency_secs, 0.05);
        assert_eq!(m.mean_jitter_secs, 0.002);
        assert_eq!(m.last_latency_secs, 0.06);
        assert_eq!(m.lost_packets, 4);
        assert_eq!(m.tx_bytes, 20_000);
        assert!(!m.is_silent());
    }

    #[test]
    fn zero_rx_short_circuits_to_zeros() {
        let counters = FlowCounters {
            tx_bytes:   5_000,
            tx_packets: 5,
            // Receive-side fields deliberately junk: they must not leak.
            rx_bytes:        123,
            delay_sum_secs:  9.9,
            last_delay_secs: 9.9,
            jitter_sum_secs: 9.9,
            lost_packets:    7,
            rx_packets:      0,
        };
        let m = FlowMetrics::derive(&counters);
        assert_eq!(m.tx_bytes, 5_000);
        assert_eq!(m.tx_packets, 5);
        assert_eq!(m.rx_bytes, 0);
        assert_eq!(m.mean_latency_secs, 0.0);
        assert_eq!(m.last_latency_secs, 0.0);
        assert_eq!(m.mean_jitter_secs, 0.0);
        assert_eq!(m.lost_packets, 0);
        assert!(m.is_silent());
    }
}

// ── ProgressReporter ──────────────────────────────────────────────────────────

#[cfg(test)]
mod progress {
    use nt_core::SimTime;
    use nt_engine::Task;

    use crate::ProgressReporter;

    #[test]
    fn rearms_every_hundredth_of_the_horizon() {
        let horizon = SimTime::from_secs(10);
        let mut reporter = ProgressReporter::new(horizon);

        let next = reporter.fire(SimTime::ZERO, &mut ()).unwrap();
        assert_eq!(next, Some(SimTime::from_millis(100)));
    }

    #[test]
    fn rearms_even_past_the_horizon() {
        // No stop condition of its own — bounding the reporter is the event
        // loop's job.
        let horizon = SimTime::from_secs(10);
        let mut reporter = ProgressReporter::new(horizon);

        let next = reporter.fire(SimTime::from_secs(12), &mut ()).unwrap();
        assert_eq!(next, Some(SimTime::from_micros(12_100_000)));
    }
}
