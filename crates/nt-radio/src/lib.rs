//! `nt-radio` — the seams to the external radio-network simulation library.
//!
//! The sampling core does not simulate propagation, PHY/MAC transmission, or
//! packet-level networking.  It consumes three narrow interfaces and leaves
//! everything behind them to a collaborator:
//!
//! | Trait            | Provides                                            |
//! |------------------|-----------------------------------------------------|
//! | [`FlowProbe`]    | per-flow traffic counter snapshots as of "now"      |
//! | [`MobilityModel`]| node position read-back and velocity actuation      |
//! | [`SignalSource`] | received-power readings for a terminal/station pair |
//!
//! Each trait ships with one small reference implementation
//! ([`CbrFlowModel`], [`KinematicModel`], [`LogDistancePathLoss`]) — enough
//! to run demos and tests without a full radio stack behind them.

pub mod flow;
pub mod mobility;
pub mod signal;


pub use flow::{CbrFlowModel, FlowCounters, FlowProbe};
pub use mobility::{KinematicModel, MobilityModel};
pub use signal::{LogDistancePathLoss, SignalSource};
