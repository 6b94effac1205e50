//! Compass-angle helpers shared by navigation and projection.
//!
//! All angles are in degrees, measured clockwise from north.

/// Normalize any finite angle into `[0, 360)`.
#[inline]
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0, and
    // -0.0 passes through unchanged; `+ 0.0` turns it into 0.0.
    if r >= 360.0 { 0.0 } else { r + 0.0 }
}

/// Bearing of a target relative to the observer's heading, in `[0, 360)`.
/// 0 means dead ahead, 180 directly behind.
#[inline]
pub fn relative_bearing(bearing_deg: f64, heading_deg: f64) -> f64 {
    normalize_deg(bearing_deg - heading_deg + 360.0)
}

/// Fold an angle in `[0, 360)` into `(-180, 180]`: left of ahead is negative.
#[inline]
pub fn signed_deg(deg: f64) -> f64 {
    if deg > 180.0 { deg - 360.0 } else { deg }
}

/// Eight-point compass direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinal {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Cardinal {
    const ALL: [Cardinal; 8] = [
        Cardinal::North,
        Cardinal::Northeast,
        Cardinal::East,
        Cardinal::Southeast,
        Cardinal::South,
        Cardinal::Southwest,
        Cardinal::West,
        Cardinal::Northwest,
    ];

    /// Nearest 45° sector to `heading_deg` (any finite value).
    pub fn from_heading(heading_deg: f64) -> Cardinal {
        let sector = (normalize_deg(heading_deg) / 45.0).round() as usize % 8;
        Self::ALL[sector]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cardinal::North     => "North",
            Cardinal::Northeast => "Northeast",
            Cardinal::East      => "East",
            Cardinal::Southeast => "Southeast",
            Cardinal::South     => "South",
            Cardinal::Southwest => "Southwest",
            Cardinal::West      => "West",
            Cardinal::Northwest => "Northwest",
        }
    }
}

impl std::fmt::Display for Cardinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
