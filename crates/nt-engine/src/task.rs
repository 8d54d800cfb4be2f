//! The `Task` trait implemented by everything the event loop dispatches.

use nt_core::SimTime;

/// Boxed error a task may surface from a firing.  The engine wraps it in
/// [`EngineError::Task`][crate::EngineError::Task] and aborts the run.
pub type TaskError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A schedulable unit of work.
///
/// `fire` runs once per scheduled activation and returns the task's next
/// fire time, or `None` to retire.  A returned time that is not strictly in
/// the future is treated as `None` — a task cannot wedge the loop by
/// re-arming at the current instant.
///
/// All mutable state a task needs across activations lives in the task
/// itself (it is owned by the loop and handed back `&mut` every firing), so
/// nothing has to be re-captured or re-threaded per activation.
pub trait Task<C> {
    fn fire(&mut self, now: SimTime, ctx: &mut C) -> Result<Option<SimTime>, TaskError>;

    /// Short label used in error reports.
    fn label(&self) -> &'static str {
        "task"
    }
}
