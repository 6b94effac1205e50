//! AR-overlay projection.
//!
//! The overlay is a flat strip: horizontal position is linear in the
//! signed relative bearing, so the cone's `±half_width` lands exactly on the
//! viewport edges.  Vertical position and marker scale are simple depth
//! cues derived from distance, not a perspective projection.

use arnav_core::GeoPoint;
use arnav_core::angle::{relative_bearing, signed_deg};
use arnav_nav::NavigationState;

use crate::{ProjectionConfig, Viewport};

/// Metres of distance per quarter-viewport of downward shift.
const DEPTH_STEP_M: f64 = 100.0;

/// Distance at which the marker scale reaches zero before clamping.
const SCALE_FALLOFF_M: f64 = 500.0;

const MIN_SCALE: f64 = 0.5;
const MAX_SCALE: f64 = 1.5;

/// Where (and whether) to draw one point's marker.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArPlacement {
    pub distance_m:           f64,
    pub bearing_deg:          f64,
    /// `(bearing − heading + 360) mod 360`; 0 is dead ahead.
    pub relative_bearing_deg: f64,
    /// Inside the forward cone.  When `false` the screen fields are still
    /// filled in, but the marker must not be drawn.
    pub visible:              bool,
    pub screen_x:             f64,
    pub screen_y:             f64,
    /// Marker size multiplier in `[0.5, 1.5]`; closer is larger.
    pub scale:                f64,
}

/// `true` when `relative_deg` lies strictly inside the forward cone.
/// With the default half-width this is `relative > 300 || relative < 60`;
/// the boundary angles themselves are outside.
#[inline]
pub fn in_forward_cone(relative_deg: f64, half_width_deg: f64) -> bool {
    relative_deg > 360.0 - half_width_deg || relative_deg < half_width_deg
}

/// Project `target` into overlay coordinates as seen from `state`.
pub fn project_to_ar(
    state:    &NavigationState,
    target:   GeoPoint,
    viewport: Viewport,
    config:   &ProjectionConfig,
) -> ArPlacement {
    let bearing = state.position.bearing_deg(target);
    let distance = state.position.distance_m(target);
    let relative = relative_bearing(bearing, state.heading_deg);

    let half = config.cone_half_width_deg;
    let visible = in_forward_cone(relative, half);

    let screen_x = viewport.center_x() + (signed_deg(relative) / half) * viewport.center_x();
    let screen_y = viewport.center_y() + (distance / DEPTH_STEP_M) * (viewport.height / 4.0);
    let scale = (1.0 - distance / SCALE_FALLOFF_M).clamp(MIN_SCALE, MAX_SCALE);

    ArPlacement {
        distance_m: distance,
        bearing_deg: bearing,
        relative_bearing_deg: relative,
        visible,
        screen_x,
        screen_y,
        scale,
    }
}
