//! `arnav-poi`: points of interest and where they come from.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                         |
//! |------------|------------------------------------------------------------------|
//! | [`poi`]    | `PointOfInterest`, `PoiRecord` (wire shape)                      |
//! | [`source`] | `PoiSource` trait; `StaticPoiSource`, `JsonPoiSource`, `CsvPoiSource` |
//! | [`load`]   | `load_or_empty`, one-shot fetch that degrades to an empty list  |
//! | [`sample`] | `sample_points`, seeded ring of points around a centre          |
//! | [`error`]  | `PoiError`, `PoiResult<T>`                                       |
//!
//! # Identity
//!
//! A point's identity is its index in the list returned by the source
//! (`PoiId`).  Sources must therefore preserve record order.
//!
//! # Validation
//!
//! Record validation happens here, at the boundary.  A record with a
//! non-finite or out-of-range coordinate fails the whole fetch; the
//! projection engine downstream never checks coordinates.

pub mod error;
pub mod load;
pub mod poi;
pub mod sample;
pub mod source;

#[cfg(test)]
mod tests;

pub use error::{PoiError, PoiResult};
pub use load::{PoiLoad, PoiStatus, load_or_empty};
pub use poi::{PoiRecord, PointOfInterest};
pub use sample::sample_points;
pub use source::{CsvPoiSource, JsonPoiSource, PoiSource, StaticPoiSource};
