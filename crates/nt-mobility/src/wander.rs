//! `RandomWalk` — the steering fallback for runs without a movement graph.

use nt_core::{SimRng, SimTime, Vec3};
use nt_scenario::Bounds;

use crate::steering::Steering;

/// Bounded constant-speed random walk in the horizontal plane.
///
/// A fresh heading is drawn uniformly in `[0, 2π)` at the start of every
/// leg; between redraws the velocity holds steady.  At the scenario bounds
/// the offending velocity component is reflected, keeping the terminal
/// inside the site without interrupting the leg.
pub struct RandomWalk {
    bounds:        Bounds,
    speed_mps:     f64,
    /// How long one heading is held.
    leg:           SimTime,
    heading_until: SimTime,
    velocity:      Vec3,
}

impl RandomWalk {
    pub fn new(bounds: Bounds, speed_mps: f64, leg: SimTime) -> Self {
        Self {
            bounds,
            speed_mps,
            leg,
            heading_until: SimTime::ZERO,
            velocity:      Vec3::ZERO,
        }
    }
}

impl Steering for RandomWalk {
    fn steer(&mut self, now: SimTime, position: Vec3, rng: &mut SimRng) -> Vec3 {
        if now >= self.heading_until {
            let theta = rng.gen_range(0.0..std::f64::consts::TAU);
            self.velocity = Vec3::new(theta.cos(), theta.sin(), 0.0) * self.speed_mps;
            self.heading_until = now + self.leg;
        }

        // Reflect any component that is carrying the terminal out of bounds.
        if (position.x <= self.bounds.min_x && self.velocity.x < 0.0)
            || (position.x >= self.bounds.max_x && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (position.y <= self.bounds.min_y && self.velocity.y < 0.0)
            || (position.y >= self.bounds.max_y && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }

        self.velocity
    }
}
