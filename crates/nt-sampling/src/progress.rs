//! Console progress reporting.

use nt_core::SimTime;
use nt_engine::{Task, TaskError};

/// Logs the elapsed fraction of the horizon, as a truncated percentage, once
/// every hundredth of the run.
///
/// The reporter re-arms unconditionally; it has no stop condition of its
/// own and relies on the event loop's stop time to cease being dispatched.
pub struct ProgressReporter {
    horizon: SimTime,
}

impl ProgressReporter {
    pub fn new(horizon: SimTime) -> Self {
        Self { horizon }
    }
}

impl<C> Task<C> for ProgressReporter {
    fn fire(&mut self, now: SimTime, _ctx: &mut C) -> Result<Option<SimTime>, TaskError> {
        log::info!("elapsed {now}, progress {}%", now.percent_of(self.horizon));
        Ok(Some(now + self.horizon / 100))
    }

    fn label(&self) -> &'static str {
        "progress-reporter"
    }
}
