//! The `Sim` struct and its tick loop.

use std::collections::VecDeque;

use arnav_core::{SimClock, SimConfig, Tick};
use arnav_nav::{NavIntent, NavSteps, NavigationState};
use arnav_poi::{PoiStatus, PointOfInterest};
use arnav_projection::{ProjectionConfig, Viewport, nearest, project_all};

use crate::{FixedTicks, Frame, NearbyItem, Scheduler, SimObserver, TickDecision};

/// The simulation runner.
///
/// Holds the observer state, the session's point list, and the inputs the
/// projection needs.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (tick interval, step sizes, projection constants).
    pub config: SimConfig,

    /// Simulation clock; tracks the current tick and maps to wall time.
    pub clock: SimClock,

    /// Observer pose.  Mutated only by applying intents.
    pub state: NavigationState,

    /// Session point list; a point's index is its `PoiId`.
    pub points: Vec<PointOfInterest>,

    /// How the point list was obtained, for the status line.
    pub status: PoiStatus,

    /// Overlay size in pixels.  Update with [`Sim::set_viewport`] on resize.
    pub viewport: Viewport,

    steps:      NavSteps,
    projection: ProjectionConfig,

    /// Intents queued by the host, applied at the start of the next tick.
    pending: VecDeque<NavIntent>,
}

impl Sim {
    pub(crate) fn new(
        config:   SimConfig,
        state:    NavigationState,
        points:   Vec<PointOfInterest>,
        status:   PoiStatus,
        viewport: Viewport,
    ) -> Self {
        Self {
            clock:      config.make_clock(),
            steps:      NavSteps::from(&config),
            projection: ProjectionConfig::from(&config),
            config,
            state,
            points,
            status,
            viewport,
            pending:    VecDeque::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()` without pacing.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let mut scheduler = FixedTicks::until(self.config.end_tick());
        self.run_with(&mut scheduler, observer);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Run for as long as `scheduler` allows, then signal the observer.
    pub fn run_with<S: Scheduler + ?Sized, O: SimObserver>(
        &mut self,
        scheduler: &mut S,
        observer:  &mut O,
    ) {
        while scheduler.next_tick(&self.clock) == TickDecision::Run {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Apply `intent` now and return the refreshed frame.
    pub fn apply(&mut self, intent: NavIntent) -> Frame {
        self.apply_intent(intent);
        self.frame()
    }

    /// Queue `intent` for the start of the next tick.
    pub fn push_intent(&mut self, intent: NavIntent) {
        self.pending.push_back(intent);
    }

    /// Number of intents waiting for the next tick.
    pub fn pending_intents(&self) -> usize {
        self.pending.len()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Project the current state without advancing the clock.
    pub fn frame(&self) -> Frame {
        let now = self.clock.current_tick;
        let points = project_all(&self.state, &self.points, self.viewport, &self.projection);
        let nearby = nearest(&self.points, &self.state, self.config.nearby_list_size)
            .into_iter()
            .map(|e| NearbyItem { id: e.id, distance_m: e.distance_m })
            .collect();
        Frame {
            tick:    now,
            unix_ms: self.clock.unix_ms_at(now),
            state:   self.state,
            points,
            nearby,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now: Tick = self.clock.current_tick;
        observer.on_tick_start(now);

        // Drain in arrival order; each intent sees the state left by the
        // previous one.
        while let Some(intent) = self.pending.pop_front() {
            self.apply_intent(intent);
            observer.on_intent(now, intent, &self.state);
        }

        let frame = self.frame();
        log::trace!(
            "{now}: {} points, {} visible, heading {:.1}",
            frame.points.len(),
            frame.visible().count(),
            frame.state.heading_deg,
        );
        observer.on_frame(&frame, &self.points);

        self.clock.advance();
    }

    fn apply_intent(&mut self, intent: NavIntent) {
        self.state = self.state.apply(intent, self.steps);
        log::debug!(
            "{intent}: position {} heading {:.1}",
            self.state.position,
            self.state.heading_deg,
        );
    }
}
