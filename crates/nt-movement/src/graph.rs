//! The movement graph: waypoints, spawn points, legal paths, speed interval.
//!
//! A `MovementGraph` is built once by the loader and read-only afterwards.
//! All fields are `pub` for direct access; lookups that the controller needs
//! on its replan path are provided as methods.

use nt_core::{SimRng, Vec3, WaypointId};

// ── Waypoint ──────────────────────────────────────────────────────────────────

/// A named 3-D point a terminal can travel toward.  Immutable after load.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    pub id:       WaypointId,
    /// Position in metres, site coordinates.
    pub position: Vec3,
}

// ── SpeedInterval ─────────────────────────────────────────────────────────────

/// Closed range `[min_mps, max_mps]` a terminal's travel speed is drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedInterval {
    pub min_mps: f64,
    pub max_mps: f64,
}

impl SpeedInterval {
    /// Draw a speed uniformly from the interval.
    ///
    /// A degenerate interval (`min == max`, including the all-zero default)
    /// returns `min` without consuming randomness.
    pub fn sample(&self, rng: &mut SimRng) -> f64 {
        if self.max_mps <= self.min_mps {
            return self.min_mps;
        }
        rng.gen_range(self.min_mps..=self.max_mps)
    }
}

// ── LegalPath ─────────────────────────────────────────────────────────────────

/// One directed, precomputed route between two spawn points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalPath {
    pub from: WaypointId,
    pub to:   WaypointId,
    /// Waypoint ids to traverse in order, including the endpoints.
    pub hops: Vec<WaypointId>,
}

// ── MovementGraph ─────────────────────────────────────────────────────────────

/// Aggregate of waypoints, spawn points, legal paths, and one speed interval.
///
/// Spawn points reference waypoints by id; the reference is deliberately not
/// validated at load time — a dangling spawn id degrades to "no position"
/// downstream rather than failing the load.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementGraph {
    pub waypoints:    Vec<Waypoint>,
    pub spawn_points: Vec<WaypointId>,
    pub legal_paths:  Vec<LegalPath>,
    pub speed:        SpeedInterval,
}

impl MovementGraph {
    /// Look up a waypoint by id.
    ///
    /// Linear scan — waypoint sets are small and this only runs on the
    /// infrequent replan path.
    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    /// Membership check for spawn points, by id equality.
    pub fn is_spawn_point(&self, id: WaypointId) -> bool {
        self.spawn_points.contains(&id)
    }

    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }
}
