//! Status-line text for a textual front end.

use arnav_core::{Cardinal, GeoPoint};
use arnav_poi::PointOfInterest;
use arnav_projection::NearbyEntry;

/// Shown in place of the nearby list when the session has no points.
pub const NO_POINTS: &str = "No navigation points found.";

/// `"Heading: 45° (Northeast)"`.  Whole-degree headings print without a
/// fractional part.
pub fn format_heading(heading_deg: f64) -> String {
    let cardinal = Cardinal::from_heading(heading_deg);
    if heading_deg.fract() == 0.0 {
        format!("Heading: {heading_deg:.0}° ({cardinal})")
    } else {
        format!("Heading: {heading_deg:.1}° ({cardinal})")
    }
}

/// `"Position: 37.774900, -122.419400 (simulated)"`.
pub fn format_position(position: GeoPoint) -> String {
    format!("Position: {:.6}, {:.6} (simulated)", position.lat, position.lon)
}

/// One line per entry, `"{title}: {distance}m"`, or a single
/// [`NO_POINTS`] line when `entries` is empty.
pub fn format_nearby(entries: &[NearbyEntry<'_>]) -> Vec<String> {
    if entries.is_empty() {
        return vec![NO_POINTS.to_string()];
    }
    entries
        .iter()
        .map(|e| format!("{}: {:.0}m", e.poi.title, e.distance_m))
        .collect()
}

/// AR marker caption, `"{title} ({distance}m)"`.
pub fn format_marker(poi: &PointOfInterest, distance_m: f64) -> String {
    format!("{} ({:.0}m)", poi.title, distance_m)
}
