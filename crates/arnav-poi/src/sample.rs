//! Seeded sample layout for demos and tests.
//!
//! Points are scattered at a uniform random distance of 50–500 m and a
//! uniform random bearing around `center`, placed with the flat-earth
//! offset from [`GeoPoint::offset_m`].  Titles run `Point A`, `Point B`, …
//! (wrapping to `Point AA` after `Z`).

use arnav_core::{GeoPoint, SimRng};

use crate::PointOfInterest;

const MIN_DISTANCE_M: f64 = 50.0;
const MAX_DISTANCE_M: f64 = 500.0;

/// Generate `count` points around `center`, deterministic in `seed`.
pub fn sample_points(center: GeoPoint, count: usize, seed: u64) -> Vec<PointOfInterest> {
    let mut rng = SimRng::new(seed);
    (0..count)
        .map(|i| {
            let distance = rng.gen_range(MIN_DISTANCE_M..MAX_DISTANCE_M);
            let bearing = rng.gen_range(0.0..360.0);
            PointOfInterest::new(
                center.offset_m(bearing, distance),
                format!("Point {}", letter_label(i)),
                format!("Location {} - {}m from center", i + 1, distance as u32),
            )
        })
        .collect()
}

/// 0 → "A", 25 → "Z", 26 → "AA", 27 → "AB", …
fn letter_label(mut i: usize) -> String {
    let mut out = Vec::new();
    loop {
        out.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
