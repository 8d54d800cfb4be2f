//! Unit tests for the event loop.

use nt_core::SimTime;

use crate::{EngineError, EventLoop, Task, TaskError};

// ── Test fixtures ─────────────────────────────────────────────────────────────

/// Shared journal the tasks write into; stands in for the world.
#[derive(Default)]
struct Journal {
    entries: Vec<(SimTime, &'static str)>,
}

/// Fires once, records itself, retires.
struct OneShot(&'static str);

impl Task<Journal> for OneShot {
    fn fire(&mut self, now: SimTime, ctx: &mut Journal) -> Result<Option<SimTime>, TaskError> {
        ctx.entries.push((now, self.0));
        Ok(None)
    }
}

/// Re-arms every `period` until it has fired `remaining` times.
struct Periodic {
    name:      &'static str,
    period:    SimTime,
    remaining: u32,
}

impl Task<Journal> for Periodic {
    fn fire(&mut self, now: SimTime, ctx: &mut Journal) -> Result<Option<SimTime>, TaskError> {
        ctx.entries.push((now, self.name));
        self.remaining -= 1;
        if self.remaining == 0 {
            return Ok(None);
        }
        Ok(Some(now + self.period))
    }
}

/// Re-arms forever.
struct Unbounded {
    period: SimTime,
}

impl Task<Journal> for Unbounded {
    fn fire(&mut self, now: SimTime, ctx: &mut Journal) -> Result<Option<SimTime>, TaskError> {
        ctx.entries.push((now, "unbounded"));
        Ok(Some(now + self.period))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn dispatches_in_time_order() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_at(SimTime::from_secs(3), OneShot("late"));
    engine.schedule_at(SimTime::from_secs(1), OneShot("early"));
    engine.schedule_at(SimTime::from_secs(2), OneShot("middle"));

    let mut journal = Journal::default();
    let end = engine.run(&mut journal).unwrap();

    let names: Vec<_> = journal.entries.iter().map(|(_, n)| *n).collect();
    assert_eq!(names, ["early", "middle", "late"]);
    assert_eq!(end, SimTime::from_secs(3));
    assert_eq!(engine.live_tasks(), 0);
}

#[test]
fn same_instant_is_fifo_in_schedule_order() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    let t = SimTime::from_secs(1);
    engine.schedule_at(t, OneShot("first"));
    engine.schedule_at(t, OneShot("second"));
    engine.schedule_at(t, OneShot("third"));

    let mut journal = Journal::default();
    engine.run(&mut journal).unwrap();

    let names: Vec<_> = journal.entries.iter().map(|(_, n)| *n).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn periodic_task_rearms_until_done() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_at(
        SimTime::ZERO,
        Periodic { name: "tick", period: SimTime::from_millis(100), remaining: 5 },
    );

    let mut journal = Journal::default();
    engine.run(&mut journal).unwrap();

    assert_eq!(journal.entries.len(), 5);
    let times: Vec<_> = journal.entries.iter().map(|(t, _)| *t).collect();
    assert_eq!(
        times,
        (0..5u64).map(|i| SimTime::from_millis(i * 100)).collect::<Vec<_>>()
    );
}

#[test]
fn stop_time_leaves_later_work_undispatched() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.stop_at(SimTime::from_millis(250));
    engine.schedule_at(SimTime::ZERO, Unbounded { period: SimTime::from_millis(100) });

    let mut journal = Journal::default();
    let end = engine.run(&mut journal).unwrap();

    // Fires at 0, 100, 200; the 300 ms activation is past the stop time.
    assert_eq!(journal.entries.len(), 3);
    assert_eq!(end, SimTime::from_millis(200));
    // The task never retired — it is still live, just never dispatched again.
    assert_eq!(engine.live_tasks(), 1);
}

#[test]
fn non_future_rearm_retires_task() {
    struct Stuck;
    impl Task<Journal> for Stuck {
        fn fire(&mut self, now: SimTime, ctx: &mut Journal) -> Result<Option<SimTime>, TaskError> {
            ctx.entries.push((now, "stuck"));
            Ok(Some(now)) // re-arm at the current instant
        }
    }

    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_at(SimTime::from_secs(1), Stuck);

    let mut journal = Journal::default();
    engine.run(&mut journal).unwrap();

    assert_eq!(journal.entries.len(), 1, "a same-instant re-arm must not loop");
    assert_eq!(engine.live_tasks(), 0);
}

#[test]
fn past_schedule_clamps_to_now() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_at(SimTime::from_secs(2), OneShot("anchor"));

    let mut journal = Journal::default();
    engine.run(&mut journal).unwrap();
    assert_eq!(engine.now(), SimTime::from_secs(2));

    // Scheduling "at one second" after the clock reached two clamps forward.
    engine.schedule_at(SimTime::from_secs(1), OneShot("latecomer"));
    engine.run(&mut journal).unwrap();
    assert_eq!(journal.entries[1], (SimTime::from_secs(2), "latecomer"));
}

#[test]
fn task_error_aborts_run() {
    struct Failing;
    impl Task<Journal> for Failing {
        fn fire(&mut self, _now: SimTime, _ctx: &mut Journal) -> Result<Option<SimTime>, TaskError> {
            Err("backing store went away".into())
        }
        fn label(&self) -> &'static str {
            "failing"
        }
    }

    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_at(SimTime::from_millis(5), Failing);
    engine.schedule_at(SimTime::from_secs(1), OneShot("never"));

    let mut journal = Journal::default();
    let err = engine.run(&mut journal).unwrap_err();
    match err {
        EngineError::Task { at, label, .. } => {
            assert_eq!(at, SimTime::from_millis(5));
            assert_eq!(label, "failing");
        }
    }
    assert!(journal.entries.is_empty(), "later work must not run after an abort");
}

#[test]
fn schedule_in_is_relative_to_current_time() {
    let mut engine: EventLoop<Journal> = EventLoop::new();
    engine.schedule_in(SimTime::from_secs(1), OneShot("a"));

    let mut journal = Journal::default();
    engine.run(&mut journal).unwrap();

    engine.schedule_in(SimTime::from_secs(1), OneShot("b"));
    engine.run(&mut journal).unwrap();

    assert_eq!(journal.entries[0].0, SimTime::from_secs(1));
    assert_eq!(journal.entries[1].0, SimTime::from_secs(2));
}
