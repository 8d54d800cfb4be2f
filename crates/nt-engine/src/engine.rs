//! `EventLoop` — the time-ordered dispatch queue.
//!
//! # Why a `BTreeMap`
//!
//! The queue maps fire times to the tasks due at that instant.  `BTreeMap`
//! gives O(log W) insert and pop where W = number of distinct queued times
//! (a handful for a sampler plus a progress reporter), and — unlike a binary
//! heap — preserves insertion order within one timestamp, which makes
//! same-instant dispatch deterministic.

use std::collections::BTreeMap;

use nt_core::{SimTime, TaskId};

use crate::error::{EngineError, EngineResult};
use crate::task::Task;

/// A single-threaded virtual-time event loop over a task context `C`.
pub struct EventLoop<C> {
    now:     SimTime,
    stop_at: Option<SimTime>,
    /// Fire time → task slots due at that time, FIFO within the entry.
    queue:   BTreeMap<SimTime, Vec<TaskId>>,
    /// Task slots.  Retired tasks leave a `None`; slots are not reused.
    tasks:   Vec<Option<Box<dyn Task<C>>>>,
}

impl<C> EventLoop<C> {
    pub fn new() -> Self {
        Self {
            now:     SimTime::ZERO,
            stop_at: None,
            queue:   BTreeMap::new(),
            tasks:   Vec::new(),
        }
    }

    /// Current virtual time — the fire time of the most recent dispatch.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Stop dispatching once the next due time exceeds `t`.  Work queued
    /// past the stop time is left undispatched.
    pub fn stop_at(&mut self, t: SimTime) {
        self.stop_at = Some(t);
    }

    /// Schedule `task` to first fire at absolute time `at`.
    ///
    /// A time earlier than the current virtual clock is clamped to "now".
    pub fn schedule_at<T: Task<C> + 'static>(&mut self, at: SimTime, task: T) -> TaskId {
        let id = TaskId(self.tasks.len() as u32);
        self.tasks.push(Some(Box::new(task)));
        self.queue.entry(at.max(self.now)).or_default().push(id);
        id
    }

    /// Schedule `task` to first fire `delay` after the current virtual time.
    pub fn schedule_in<T: Task<C> + 'static>(&mut self, delay: SimTime, task: T) -> TaskId {
        self.schedule_at(self.now + delay, task)
    }

    /// Number of live (not yet retired) tasks.
    pub fn live_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_some()).count()
    }

    /// Run until the queue drains or the stop time is reached.  Returns the
    /// final virtual time.
    pub fn run(&mut self, ctx: &mut C) -> EngineResult<SimTime> {
        while let Some((&at, _)) = self.queue.first_key_value() {
            if self.stop_at.is_some_and(|stop| at > stop) {
                break;
            }
            self.now = at;

            // Pop the whole entry; same-instant re-arms are impossible
            // (a re-arm must be strictly in the future), so this cannot
            // starve anything.
            let due = self.queue.remove(&at).unwrap_or_default();
            for id in due {
                let Some(mut task) = self.tasks[id.index()].take() else {
                    continue;
                };
                match task.fire(self.now, ctx) {
                    Ok(Some(next)) if next > self.now => {
                        self.tasks[id.index()] = Some(task);
                        self.queue.entry(next).or_default().push(id);
                    }
                    Ok(_) => {
                        // Retired: either explicit `None` or a non-future
                        // re-arm time.  Slot stays empty.
                    }
                    Err(source) => {
                        return Err(EngineError::Task {
                            at:    self.now,
                            label: task.label(),
                            source,
                        });
                    }
                }
            }
        }
        Ok(self.now)
    }
}

impl<C> Default for EventLoop<C> {
    fn default() -> Self {
        Self::new()
    }
}
