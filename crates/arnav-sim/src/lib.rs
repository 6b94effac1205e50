//! `arnav-sim`: the simulation runner for the arnav engine.
//!
//! # Tick loop
//!
//! ```text
//! while scheduler says Run:
//!   ① Start   — observer.on_tick_start(tick)
//!   ② Intents — drain queued NavIntents in FIFO order, applying each to
//!               the NavigationState
//!   ③ Project — recompute every ProjectedPoint and the nearby list into a
//!               Frame; observer.on_frame(frame)
//!   ④ Advance — clock.advance()
//! ```
//!
//! Intents can also be applied outside the loop with [`Sim::apply`], which
//! returns a fresh frame at once (the immediate display refresh after a key
//! press).
//!
//! # Ownership
//!
//! `Sim` owns its `NavigationState` and point list outright.  There is no
//! global state, so any number of independent simulations can run side by
//! side.  Tick cadence belongs to a [`Scheduler`] supplied by the host.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Projects each frame on Rayon's thread pool.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use arnav_core::SimConfig;
//! use arnav_poi::JsonPoiSource;
//! use arnav_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default())
//!     .source(JsonPoiSource::from_path("points.json"))
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod observer;
pub mod scheduler;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use frame::{Frame, NearbyItem};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::{FixedTicks, Realtime, Scheduler, TickDecision};
pub use sim::Sim;
