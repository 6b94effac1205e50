//! Point-of-interest value type and its wire record.

use serde::{Deserialize, Serialize};

use arnav_core::GeoPoint;

use crate::{PoiError, PoiResult};

/// A named place the observer can navigate towards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    pub coordinate:  GeoPoint,
    pub title:       String,
    pub description: String,
}

impl PointOfInterest {
    pub fn new(coordinate: GeoPoint, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            coordinate,
            title:       title.into(),
            description: description.into(),
        }
    }
}

/// The flat shape a data source delivers: one JSON object or CSV row.
///
/// Unknown fields (e.g. a server-side `id`) are ignored; a missing
/// `description` decodes as empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub title:       String,
    #[serde(default)]
    pub description: String,
    pub latitude:    f64,
    pub longitude:   f64,
}

impl PoiRecord {
    /// Validate the coordinate and convert.  `index` is the record's position
    /// in the source, used only for the error message.
    pub fn into_point(self, index: usize) -> PoiResult<PointOfInterest> {
        let coordinate = GeoPoint::new(self.latitude, self.longitude);
        if !coordinate.is_valid() {
            return Err(PoiError::InvalidRecord {
                index,
                reason: format!(
                    "coordinate ({}, {}) is not a valid latitude/longitude",
                    self.latitude, self.longitude
                ),
            });
        }
        Ok(PointOfInterest {
            coordinate,
            title:       self.title,
            description: self.description,
        })
    }
}

impl From<&PointOfInterest> for PoiRecord {
    fn from(p: &PointOfInterest) -> Self {
        Self {
            title:       p.title.clone(),
            description: p.description.clone(),
            latitude:    p.coordinate.lat,
            longitude:   p.coordinate.lon,
        }
    }
}
