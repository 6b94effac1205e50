//! Top-down map projection.
//!
//! The map is centred on the observer at (50 %, 50 %).  Offsets are a plain
//! affine scaling of the degree deltas, north up.  Output is unclamped:
//! clipping to `[0, 100]` is the renderer's call.

use arnav_core::GeoPoint;
use arnav_nav::NavigationState;

/// Map position in percent of the map's width/height.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapPlacement {
    pub map_x: f64,
    pub map_y: f64,
}

impl MapPlacement {
    /// `true` when the point falls inside the drawn map square.
    #[inline]
    pub fn on_map(&self) -> bool {
        (0.0..=100.0).contains(&self.map_x) && (0.0..=100.0).contains(&self.map_y)
    }
}

pub fn project_to_map(state: &NavigationState, target: GeoPoint, map_scale: f64) -> MapPlacement {
    MapPlacement {
        map_x: 50.0 + (target.lon - state.position.lon) * map_scale,
        map_y: 50.0 - (target.lat - state.position.lat) * map_scale,
    }
}
