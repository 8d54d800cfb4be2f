//! `nt-sampling` — the periodic measurement tasks of a run.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`metrics`]  | `FlowMetrics` — derived per-flow KPIs                  |
//! | [`sampler`]  | `Sampler` — the self-rearming measurement task         |
//! | [`progress`] | `ProgressReporter` — elapsed-percentage logging        |
//!
//! # Task state
//!
//! Both tasks are state-owning objects dispatched by an
//! [`EventLoop`][nt_engine::EventLoop]: everything a firing needs — steering
//! controller, RNG, output sink, interval and horizon — lives *in* the task
//! and is handed back `&mut` on every activation.  Nothing is re-captured
//! per firing, so no field can be forgotten on a re-arm.

pub mod metrics;
pub mod progress;
pub mod sampler;

#[cfg(test)]
mod tests;

pub use metrics::FlowMetrics;
pub use progress::ProgressReporter;
pub use sampler::{Sampler, SamplerConfig};
