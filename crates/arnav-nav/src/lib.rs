//! `arnav-nav`: the simulated observer and its state transitions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`state`]   | `NavigationState`: position + heading, `rotate`, `move_forward` |
//! | [`intent`]  | `NavIntent` (`RotateLeft`, `RotateRight`, `MoveForward`), `NavSteps` |
//! | [`error`]   | `NavError`, `NavResult<T>`                                   |
//!
//! # Design notes
//!
//! Every transition is a pure function `state -> state'`: it consumes a
//! `Copy` value and returns the next one.  Nothing here can fail for finite
//! input, so the only error type covers parsing user commands.

pub mod error;
pub mod intent;
pub mod state;


pub use error::{NavError, NavResult};
pub use intent::{NavIntent, NavSteps};
pub use state::NavigationState;
