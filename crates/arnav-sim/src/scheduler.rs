//! Tick cadence, decided by the host rather than an ambient timer.
//!
//! The runner asks its scheduler before every tick whether to proceed.
//! [`FixedTicks`] runs as fast as possible (tests, batch output);
//! [`Realtime`] paces ticks at the configured interval for an interactive
//! front end.

use std::time::{Duration, Instant};

use arnav_core::{SimClock, Tick};

/// Whether the runner should process another tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickDecision {
    Run,
    Stop,
}

pub trait Scheduler {
    /// Called before each tick.  May block (e.g. to pace real time).
    fn next_tick(&mut self, clock: &SimClock) -> TickDecision;
}

/// Run until the clock reaches `end`, without waiting.
#[derive(Copy, Clone, Debug)]
pub struct FixedTicks {
    end: Tick,
}

impl FixedTicks {
    /// Stop once `clock.current_tick >= end`.
    pub fn until(end: Tick) -> Self {
        Self { end }
    }

    /// Run exactly `n` ticks starting from `clock`'s current tick.
    pub fn count(clock: &SimClock, n: u64) -> Self {
        Self { end: clock.current_tick + n }
    }
}

impl Scheduler for FixedTicks {
    fn next_tick(&mut self, clock: &SimClock) -> TickDecision {
        if clock.current_tick < self.end {
            TickDecision::Run
        } else {
            TickDecision::Stop
        }
    }
}

/// Like [`FixedTicks`], but sleeps so that consecutive ticks start at least
/// `clock.tick_interval_ms` apart on the wall clock.
#[derive(Debug)]
pub struct Realtime {
    end:  Tick,
    last: Option<Instant>,
}

impl Realtime {
    pub fn until(end: Tick) -> Self {
        Self { end, last: None }
    }
}

impl Scheduler for Realtime {
    fn next_tick(&mut self, clock: &SimClock) -> TickDecision {
        if clock.current_tick >= self.end {
            return TickDecision::Stop;
        }
        let interval = Duration::from_millis(clock.tick_interval_ms as u64);
        if let Some(last) = self.last {
            let wait = interval.saturating_sub(last.elapsed());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
        }
        self.last = Some(Instant::now());
        TickDecision::Run
    }
}
