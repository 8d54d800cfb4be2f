//! `nt-core` — foundational types for the `rust_nt` radio-trace framework.
//!
//! This crate is a dependency of every other `nt-*` crate.  It intentionally
//! has no `nt-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                |
//! |----------|---------------------------------------------------------|
//! | [`ids`]  | `WaypointId`, `NodeId`, `FlowId`, `StationId`, `BandId`, `TaskId` |
//! | [`vec3`] | `Vec3` — 3-D position/velocity vector in metres         |
//! | [`time`] | `SimTime` — simulated time in integer microseconds      |
//! | [`rng`]  | `SimRng` — owned, seeded random source                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{BandId, FlowId, NodeId, StationId, TaskId, WaypointId};
pub use rng::SimRng;
pub use time::SimTime;
pub use vec3::Vec3;
