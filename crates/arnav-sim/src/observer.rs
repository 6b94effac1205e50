//! Simulation observer trait: the presentation adapter's hook into the loop.

use arnav_core::Tick;
use arnav_nav::{NavIntent, NavigationState};
use arnav_poi::PointOfInterest;

use crate::Frame;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: visible-count printer
///
/// ```rust,ignore
/// struct VisibleCounter;
///
/// impl SimObserver for VisibleCounter {
///     fn on_frame(&mut self, frame: &Frame, _pois: &[PointOfInterest]) {
///         println!("{}: {} visible", frame.tick, frame.visible().count());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before queued intents apply.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each queued intent is applied, with the resulting state.
    fn on_intent(&mut self, _tick: Tick, _intent: NavIntent, _state: &NavigationState) {}

    /// Called once per tick with the freshly computed frame.
    ///
    /// `pois` is the session's point list, indexed by `PoiId`.
    fn on_frame(&mut self, _frame: &Frame, _pois: &[PointOfInterest]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
