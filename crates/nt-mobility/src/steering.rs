//! The per-tick steering interface.

use nt_core::{SimRng, SimTime, Vec3};

/// A velocity-vector controller, invoked once per control tick.
///
/// `steer` receives the terminal's current position and returns the velocity
/// to apply until the next tick.  Controllers draw all randomness from the
/// passed-in `rng` so a run is reproducible from its seed alone.
pub trait Steering {
    fn steer(&mut self, now: SimTime, position: Vec3, rng: &mut SimRng) -> Vec3;
}
