//! Node position read-back and velocity actuation.
//!
//! The sampling core *steers* — it hands a velocity vector to the mobility
//! collaborator once per control tick.  Position integration between ticks
//! belongs to the collaborator, not to the core.

use nt_core::{NodeId, SimTime, Vec3};

// ── MobilityModel ─────────────────────────────────────────────────────────────

/// Position/velocity actuation interface for radio nodes.
///
/// Stations are ordinary nodes that simply never receive a velocity.
pub trait MobilityModel {
    /// Current position of `node` at `now`.
    fn position(&self, node: NodeId, now: SimTime) -> Vec3;

    /// Teleport `node` to `position` (initial placement).
    fn place(&mut self, node: NodeId, position: Vec3, now: SimTime);

    /// Replace the velocity of `node` as of `now`.
    fn set_velocity(&mut self, node: NodeId, now: SimTime, velocity: Vec3);
}

// ── KinematicModel ────────────────────────────────────────────────────────────

/// Per-node kinematic state: straight-line motion from an anchor point.
#[derive(Copy, Clone, Debug, Default)]
struct Kinematics {
    origin:      Vec3,
    origin_time: SimTime,
    velocity:    Vec3,
}

/// Reference mobility model: every node moves in a straight line at its
/// last-set velocity.
///
/// `position(node, now) = origin + velocity · (now − origin_time)`, with the
/// anchor re-based on every `place`/`set_velocity` call.  This is exactly
/// the constant-velocity integration the steering controller assumes the
/// external library performs between control ticks.
#[derive(Default)]
pub struct KinematicModel {
    nodes: Vec<Kinematics>,
}

impl KinematicModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node at `position`, stationary.  Returns its handle.
    pub fn add_node(&mut self, position: Vec3) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Kinematics { origin: position, ..Default::default() });
        id
    }

    /// Current velocity of `node`.
    pub fn velocity(&self, node: NodeId) -> Vec3 {
        self.nodes[node.index()].velocity
    }
}

impl MobilityModel for KinematicModel {
    fn position(&self, node: NodeId, now: SimTime) -> Vec3 {
        let k = &self.nodes[node.index()];
        let dt = now.saturating_sub(k.origin_time).as_secs_f64();
        k.origin + k.velocity * dt
    }

    fn place(&mut self, node: NodeId, position: Vec3, now: SimTime) {
        self.nodes[node.index()] = Kinematics {
            origin:      position,
            origin_time: now,
            velocity:    Vec3::ZERO,
        };
    }

    fn set_velocity(&mut self, node: NodeId, now: SimTime, velocity: Vec3) {
        // Re-base the anchor so the position stays continuous across the
        // velocity change.
        let position = self.position(node, now);
        self.nodes[node.index()] = Kinematics { origin: position, origin_time: now, velocity };
    }
}
