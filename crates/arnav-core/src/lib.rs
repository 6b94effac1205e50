//! `arnav-core`: foundational types for the `arnav` AR navigation engine.
//!
//! This crate is a dependency of every other `arnav-*` crate.  It has no
//! `arnav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`/`serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, haversine distance, initial bearing       |
//! | [`angle`]       | Degree normalization, relative bearing, `Cardinal`    |
//! | [`ids`]         | `PoiId`                                               |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`config`]      | `SimConfig` and its defaults                          |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                              |
//! |---------|---------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on public types; `SimConfig::from_json_*` |

pub mod angle;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use angle::Cardinal;
pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::PoiId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
