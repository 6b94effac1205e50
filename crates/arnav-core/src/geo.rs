//! Geographic coordinate type and spherical-Earth geodesy.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The simulated observer moves
//! in steps of ~5e-5 degrees, which `f32` cannot resolve cleanly at
//! mid-latitude longitudes, so double precision is required here.

use crate::angle::normalize_deg;

/// Mean Earth radius in metres (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Metres per degree of latitude used by the flat-earth offset helper.
pub const METRES_PER_DEG_LAT: f64 = 111_000.0;

/// A geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` when both components are finite and inside the valid
    /// latitude/longitude ranges.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric in its arguments and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Initial compass bearing from `self` towards `other`, in `[0, 360)`.
    ///
    /// 0° is north, angles increase clockwise.  For identical points the
    /// result is `atan2(0, 0)`, which is an arbitrary but stable 0°.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        normalize_deg(y.atan2(x).to_degrees())
    }

    /// Point `distance_m` metres away along compass bearing `bearing_deg`,
    /// using a flat-earth approximation (1° latitude ≈ 111 km, longitude
    /// scaled by `cos(lat)`).  Only meaningful for short distances.
    pub fn offset_m(self, bearing_deg: f64, distance_m: f64) -> GeoPoint {
        let b = bearing_deg.to_radians();
        let d_lat = distance_m * b.cos() / METRES_PER_DEG_LAT;
        let d_lon = distance_m * b.sin() / (METRES_PER_DEG_LAT * self.lat.to_radians().cos());
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
