//! Observer position and heading.

use arnav_core::angle::normalize_deg;
use arnav_core::{Cardinal, GeoPoint, SimConfig};

/// Where the simulated observer stands and which way it faces.
///
/// `heading_deg` is a compass bearing (0° = north, clockwise) and is kept in
/// `[0, 360)` after every transition.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState {
    pub position:    GeoPoint,
    pub heading_deg: f64,
}

impl NavigationState {
    /// Construct a state, normalizing `heading_deg` into `[0, 360)`.
    pub fn new(position: GeoPoint, heading_deg: f64) -> Self {
        Self {
            position,
            heading_deg: normalize_deg(heading_deg),
        }
    }

    /// The configured starting pose.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.start_position, config.start_heading_deg)
    }

    /// Turn by `delta_deg` (negative = left, positive = right).
    #[inline]
    pub fn rotate(self, delta_deg: f64) -> Self {
        Self {
            position:    self.position,
            heading_deg: normalize_deg(self.heading_deg + delta_deg + 360.0),
        }
    }

    /// Step `step` degree-units along the current heading.
    ///
    /// This is a local planar approximation: latitude moves by
    /// `step·cos(heading)` and longitude by `step·sin(heading)`, with no
    /// correction for meridian convergence.  It is not geodesically exact,
    /// but for ~5 m steps the error is negligible.
    pub fn move_forward(self, step: f64) -> Self {
        let heading = self.heading_deg.to_radians();
        Self {
            position: GeoPoint::new(
                self.position.lat + step * heading.cos(),
                self.position.lon + step * heading.sin(),
            ),
            heading_deg: self.heading_deg,
        }
    }

    #[inline]
    pub fn cardinal(&self) -> Cardinal {
        Cardinal::from_heading(self.heading_deg)
    }
}
