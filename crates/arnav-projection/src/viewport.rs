//! Inputs the presentation layer supplies alongside the navigation state.

use arnav_core::SimConfig;

/// Pixel size of the AR overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}

impl Default for Viewport {
    /// 1280×720, a typical landscape overlay.
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Projection tuning constants.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectionConfig {
    /// Half-width of the forward cone in degrees.  Points strictly inside
    /// `(-half, +half)` of the heading are visible; the boundary is a hard
    /// cutoff with no hysteresis.
    pub cone_half_width_deg: f64,
    /// Map percent per degree of latitude/longitude offset.
    pub map_scale: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            cone_half_width_deg: 60.0,
            map_scale:           100_000.0,
        }
    }
}

impl From<&SimConfig> for ProjectionConfig {
    fn from(config: &SimConfig) -> Self {
        Self {
            cone_half_width_deg: config.forward_cone_half_width_deg,
            map_scale:           config.map_scale,
        }
    }
}
