//! One-shot session load that never fails the caller.

use std::fmt;

use crate::{PoiSource, PointOfInterest};

/// Outcome of the startup fetch, shown to the user as a status line.
#[derive(Clone, Debug, PartialEq)]
pub enum PoiStatus {
    /// The source answered with this many points (possibly zero).
    Loaded(usize),
    /// The source failed; the session continues with no points.
    Unavailable(String),
}

impl PoiStatus {
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, PoiStatus::Loaded(_))
    }
}

impl fmt::Display for PoiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiStatus::Loaded(n)      => write!(f, "Loaded {n} navigation points"),
            PoiStatus::Unavailable(e) => write!(f, "Error loading navigation data: {e}"),
        }
    }
}

/// Points plus the status describing how they were obtained.
#[derive(Clone, Debug)]
pub struct PoiLoad {
    pub points: Vec<PointOfInterest>,
    pub status: PoiStatus,
}

/// Fetch once from `source`.  Any error yields an empty list and an
/// `Unavailable` status; there is no retry.
pub fn load_or_empty<S: PoiSource + ?Sized>(source: &mut S) -> PoiLoad {
    match source.fetch() {
        Ok(points) => {
            log::info!("loaded {} points from {}", points.len(), source.describe());
            let status = PoiStatus::Loaded(points.len());
            PoiLoad { points, status }
        }
        Err(e) => {
            log::warn!("point source {} unavailable: {e}", source.describe());
            PoiLoad {
                points: Vec::new(),
                status: PoiStatus::Unavailable(e.to_string()),
            }
        }
    }
}
