//! `arnav-projection`: places points of interest on screen and on the map.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`viewport`]  | `Viewport`, `ProjectionConfig`                                |
//! | [`ar`]        | `project_to_ar` → `ArPlacement` (forward cone, screen x/y, scale) |
//! | [`map`]       | `project_to_map` → `MapPlacement` (percent offsets)           |
//! | [`projected`] | `ProjectedPoint`, `project`, `project_all`                    |
//! | [`rank`]      | `rank_by_proximity`, `nearest`, `NearbyEntry`                 |
//!
//! Every function here is pure: output depends only on the arguments, and
//! nothing is cached between ticks.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `project_all` runs on Rayon's thread pool.             |

pub mod ar;
pub mod map;
pub mod projected;
pub mod rank;
pub mod viewport;


pub use ar::{ArPlacement, in_forward_cone, project_to_ar};
pub use map::{MapPlacement, project_to_map};
pub use projected::{ProjectedPoint, project, project_all};
pub use rank::{NearbyEntry, nearest, rank_by_proximity};
pub use viewport::{ProjectionConfig, Viewport};
