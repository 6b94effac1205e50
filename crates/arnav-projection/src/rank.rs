//! Nearest-first ordering for the "nearby points" list.

use arnav_core::PoiId;
use arnav_nav::NavigationState;
use arnav_poi::PointOfInterest;

/// One row of the proximity ranking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearbyEntry<'a> {
    pub id:         PoiId,
    pub poi:        &'a PointOfInterest,
    pub distance_m: f64,
}

/// All points sorted by ascending distance from the observer.
///
/// The sort is stable: points at exactly the same distance keep their
/// original list order.  Points past the `PoiId` range are not ranked.
pub fn rank_by_proximity<'a>(
    pois:  &'a [PointOfInterest],
    state: &NavigationState,
) -> Vec<NearbyEntry<'a>> {
    let mut ranked: Vec<NearbyEntry<'a>> = pois
        .iter()
        .enumerate()
        .filter_map(|(i, poi)| {
            Some(NearbyEntry {
                id:         PoiId::try_from(i).ok()?,
                poi,
                distance_m: state.position.distance_m(poi.coordinate),
            })
        })
        .collect();
    ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    ranked
}

/// The `n` closest points (fewer if the list is shorter).
pub fn nearest<'a>(
    pois:  &'a [PointOfInterest],
    state: &NavigationState,
    n:     usize,
) -> Vec<NearbyEntry<'a>> {
    let mut ranked = rank_by_proximity(pois, state);
    ranked.truncate(n);
    ranked
}
