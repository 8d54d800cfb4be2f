//! `nt-mobility` — velocity-vector steering for mobile terminals.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`steering`] | the per-control-tick `Steering` trait                 |
//! | [`walker`]   | `WaypointWalker` — waypoint-queue controller          |
//! | [`wander`]   | `RandomWalk` — bounded constant-speed fallback        |
//!
//! # Control model
//!
//! A steering controller does not move anything.  Once per control tick it
//! is shown the terminal's current position and answers with a velocity
//! vector; integrating that velocity into a position between ticks is the
//! mobility collaborator's job.  Coarse ticks therefore overshoot: a
//! terminal steering at 1.4 m/s toward a waypoint 0.5 m away will pass it
//! and be steered back next tick — the arrival tolerance exists to absorb
//! exactly this.

pub mod steering;
pub mod walker;
pub mod wander;


pub use steering::Steering;
pub use walker::WaypointWalker;
pub use wander::RandomWalk;
