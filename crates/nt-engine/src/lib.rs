//! `nt-engine` — cooperative, single-threaded, virtual-time task host.
//!
//! # Execution model
//!
//! All work executes as callbacks dispatched in simulated-time order by an
//! [`EventLoop`].  There is no real concurrency: correctness rests on the
//! causal ordering of dispatch, not on locks.  A periodic task re-arms
//! itself by returning its next fire time; *cancellation is declining to
//! re-arm* — there is no mechanism to revoke an already-queued firing.
//!
//! ```text
//! loop:
//!   (t, tasks) = earliest queue entry          // BTreeMap keeps time order
//!   stop if queue empty or t > stop_at
//!   now = t
//!   for each task (FIFO within the timestamp):
//!     match task.fire(now, ctx):
//!       Some(next) where next > now  → re-queue at next
//!       otherwise                    → retire the task
//! ```
//!
//! The context type `C` is the task's window onto the world (counter
//! probes, mobility actuation, signal readings); the engine itself is
//! agnostic to it.

pub mod engine;
pub mod error;
pub mod task;

#[cfg(test)]
mod tests;

pub use engine::EventLoop;
pub use error::{EngineError, EngineResult};
pub use task::{Task, TaskError};
