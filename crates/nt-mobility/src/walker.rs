//! `WaypointWalker` — the waypoint-queue steering controller.

use std::collections::VecDeque;
use std::sync::Arc;

use nt_core::{SimRng, SimTime, Vec3, WaypointId};
use nt_movement::{MovementGraph, Waypoint, resolve};

use crate::steering::Steering;

/// Steers a terminal along precomputed legal paths between spawn points.
///
/// The walker owns its full working state — pending-waypoint queue, the id
/// of the last waypoint it departed, the arrival tolerance — plus a shared
/// handle to the read-only movement graph.  Per tick it:
///
/// 1. Replans when the queue is empty: picks a spawn point uniformly at
///    random, excluding the last-departed id (a zero-length trip), resolves
///    the legal path from the last-departed id to it, and enqueues the
///    path's waypoints.
/// 2. Detects arrival *before* computing the tick's velocity: when the
///    remaining distance to the front waypoint is within the tolerance
///    (boundary inclusive), the front is recorded as last-departed and
///    popped, so the arrival tick already steers toward the successor.  A
///    pop that drains the queue replans immediately.
/// 3. Draws a speed uniformly from the graph's speed interval and returns
///    `unit-direction × speed` — the magnitude never depends on the
///    remaining distance.
///
/// Degenerate inputs steer to a standstill rather than erroring: an
/// unresolvable path leaves the queue empty, and a target at the exact
/// current position has no direction to normalize; both yield zero
/// velocity for the tick.
pub struct WaypointWalker {
    graph:         Arc<MovementGraph>,
    pending:       VecDeque<Waypoint>,
    last_departed: WaypointId,
    tolerance_m:   f64,
}

impl WaypointWalker {
    /// Controller starting at the spawn point `start`, with an empty queue
    /// (the first tick replans).
    pub fn new(graph: Arc<MovementGraph>, start: WaypointId, tolerance_m: f64) -> Self {
        Self {
            graph,
            pending: VecDeque::new(),
            last_departed: start,
            tolerance_m,
        }
    }

    /// Pick a uniformly random spawn point as the starting location.
    ///
    /// Returns the controller and the spawn position to place the terminal
    /// at, or `None` when the graph has no spawn points.  A spawn id with no
    /// matching waypoint yields the origin — the definition file is not
    /// cross-validated.
    pub fn spawn_at_random(
        graph:       Arc<MovementGraph>,
        tolerance_m: f64,
        rng:         &mut SimRng,
    ) -> Option<(Self, Vec3)> {
        let &start = rng.choose(&graph.spawn_points)?;
        let position = graph
            .waypoint(start)
            .map(|w| w.position)
            .unwrap_or_default();
        Some((Self::new(graph, start, tolerance_m), position))
    }

    /// Ids still queued, front first.
    pub fn pending(&self) -> impl Iterator<Item = WaypointId> + '_ {
        self.pending.iter().map(|w| w.id)
    }

    /// The waypoint the terminal most recently departed (or spawned at).
    pub fn last_departed(&self) -> WaypointId {
        self.last_departed
    }

    /// Refill the queue with a fresh trip from the last-departed waypoint to
    /// a random other spawn point.
    fn replan(&mut self, rng: &mut SimRng) {
        let candidates: Vec<WaypointId> = self
            .graph
            .spawn_points
            .iter()
            .copied()
            .filter(|&id| id != self.last_departed)
            .collect();
        let Some(&target) = rng.choose(&candidates) else {
            return; // a single-spawn graph has nowhere to go
        };

        log::debug!("replanning trip {} -> {}", self.last_departed, target);
        self.pending
            .extend(resolve(&self.graph, self.last_departed, target));
    }
}

impl Steering for WaypointWalker {
    fn steer(&mut self, _now: SimTime, position: Vec3, rng: &mut SimRng) -> Vec3 {
        if self.pending.is_empty() {
            self.replan(rng);
        }
        let Some(&front) = self.pending.front() else {
            return Vec3::ZERO;
        };

        // Arrival check precedes velocity computation.
        let mut target = front;
        if position.distance(front.position) <= self.tolerance_m {
            self.last_departed = front.id;
            self.pending.pop_front();
            if self.pending.is_empty() {
                self.replan(rng);
            }
            match self.pending.front() {
                Some(&next) => target = next,
                None => return Vec3::ZERO,
            }
        }

        let Some(direction) = (target.position - position).try_normalized() else {
            return Vec3::ZERO; // coincident target: stand still this tick
        };
        let speed = self.graph.speed.sample(rng);
        direction * speed
    }
}
