//! office — a complete single-terminal indoor run.
//!
//! One mobile terminal walks the corridors of a 50 × 20 m office floor
//! between four spawn points while a constant-bit-rate downlink flow runs
//! against the nearest millimetre-wave cell.  Every 100 ms the sampler
//! steers the terminal, reads the flow counters, and appends one KPI row to
//! `output/traces.csv`.

mod world;

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use nt_core::{FlowId, SimRng, SimTime};
use nt_engine::EventLoop;
use nt_mobility::WaypointWalker;
use nt_movement::parse_graph;
use nt_output::CsvTraceWriter;
use nt_radio::{CbrFlowModel, KinematicModel, LogDistancePathLoss, MobilityModel};
use nt_sampling::{ProgressReporter, Sampler, SamplerConfig};
use nt_scenario::parse_scenario;

use world::OfficeWorld;

// ── Run parameters ────────────────────────────────────────────────────────────

const SEED:               u64 = 1234;
const SIM_TIME_SECS:      u64 = 10;
const SAMPLE_INTERVAL_US: u64 = 100_000; // 100 ms
const ARRIVAL_TOLERANCE_M: f64 = 1.0;
const SELECTED_STATION:   usize = 0;

const BITRATE_BPS:       f64 = 380e6;
const PACKET_SIZE_BYTES: u32 = 1000;
const ONE_WAY_DELAY_MS:  u64 = 10;

// ── Embedded site definitions ─────────────────────────────────────────────────

/// Office floor: a rectangular corridor loop with four spawn rooms.
const WAYPOINTS_TXT: &str = "\
# 50 x 20 m office floor, terminal height 1.5 m
WAYPOINTS
0 5.0 5.0 1.5
1 25.0 5.0 1.5
2 45.0 5.0 1.5
3 45.0 15.0 1.5
4 25.0 15.0 1.5
5 5.0 15.0 1.5

SPAWN_POINTS
0
2
3
5

LEGAL_PATHS
0 2 0 1 2
2 0 2 1 0
0 3 0 1 2 3
3 0 3 2 1 0
0 5 0 5
5 0 5 0
2 3 2 3
3 2 3 2
2 5 2 1 0 5
5 2 5 0 1 2
3 5 3 4 5
5 3 5 4 3

SPEED_INTERVAL
0.8 1.4
";

/// Two ceiling-mounted cells on one 28 GHz band.
const SCENARIO_TXT: &str = "\
# bounds: MinX MaxX MinY MaxY
! 0.0 50.0 0.0 20.0
# band: id centralFrequency bandwidth
* 0 28e9 400e6
# stations: id x y z bandId txPower kind
0 12.0 10.0 3.0 0 23.0 I
1 38.0 10.0 3.0 0 23.0 H
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== office — rust_nt radio trace demo ===");
    println!("Horizon: {SIM_TIME_SECS} s  |  Interval: {SAMPLE_INTERVAL_US} us  |  Seed: {SEED}");
    println!();

    // 1. Load the site definitions.  Malformed configuration is fatal.
    let graph = Arc::new(parse_graph(Cursor::new(WAYPOINTS_TXT)).context("waypoint definition")?);
    let scenario = parse_scenario(Cursor::new(SCENARIO_TXT)).context("scenario definition")?;
    println!(
        "Site: {} waypoints, {} spawn points, {} legal paths, {} stations",
        graph.waypoints.len(),
        graph.spawn_points.len(),
        graph.legal_paths.len(),
        scenario.stations.len(),
    );

    let Some(station_record) = scenario.stations.get(SELECTED_STATION) else {
        bail!(
            "selected station {SELECTED_STATION} out of range (scenario has {})",
            scenario.stations.len()
        );
    };

    // 2. Seed the run's randomness and pick the initial spawn point.
    let mut rng = SimRng::new(SEED);
    let (walker, spawn_pos) =
        WaypointWalker::spawn_at_random(Arc::clone(&graph), ARRIVAL_TOLERANCE_M, &mut rng)
            .context("waypoint definition has no spawn points")?;
    println!("Terminal spawns at {} ({spawn_pos})", walker.last_departed());

    // 3. Build the radio world: terminal + station + downlink flow.
    let mut kinematics = KinematicModel::new();
    let terminal = kinematics.add_node(spawn_pos);
    let station = kinematics.add_node(station_record.position);
    let mut world = OfficeWorld {
        kinematics,
        flow: CbrFlowModel {
            flow:              FlowId(0),
            bitrate_bps:       BITRATE_BPS,
            packet_size_bytes: PACKET_SIZE_BYTES,
            one_way_delay:     SimTime::from_millis(ONE_WAY_DELAY_MS),
            start:             SimTime::ZERO,
        },
        path_loss:    LogDistancePathLoss::indoor_office(),
        tx_power_dbm: station_record.tx_power_dbm,
    };

    // 4. Open the trace log.
    std::fs::create_dir_all("output")?;
    let trace_path = Path::new("output/traces.csv");
    let sink = CsvTraceWriter::create(trace_path)?;

    // 5. Schedule the periodic tasks and run to the horizon.
    let horizon = SimTime::from_secs(SIM_TIME_SECS);
    let interval = SimTime::from_micros(SAMPLE_INTERVAL_US);

    let sampler = Sampler::new(
        SamplerConfig { terminal, station, interval, horizon },
        Some(walker),
        rng.child(1),
        sink,
    );

    let mut engine: EventLoop<OfficeWorld> = EventLoop::new();
    engine.stop_at(horizon);
    engine.schedule_at(SimTime::ZERO, sampler);
    engine.schedule_at(horizon / 100, ProgressReporter::new(horizon));

    let t0 = Instant::now();
    let end = engine.run(&mut world)?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    let final_pos = world.position(terminal, end);
    println!();
    println!("Run complete in {:.3} s wall clock", elapsed.as_secs_f64());
    println!("  simulated time : {end}");
    println!("  terminal ended : {final_pos}");
    println!("  trace log      : {}", trace_path.display());

    Ok(())
}
