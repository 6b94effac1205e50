//! One refresh worth of projection output.

use arnav_core::{PoiId, Tick};
use arnav_nav::NavigationState;
use arnav_poi::PointOfInterest;
use arnav_projection::{NearbyEntry, ProjectedPoint};

/// A nearby-list row without the borrow on the point list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NearbyItem {
    pub id:         PoiId,
    pub distance_m: f64,
}

/// Everything the presentation layer draws for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick:    Tick,
    pub unix_ms: i64,
    pub state:   NavigationState,
    /// One entry per point of interest, in list order.
    pub points:  Vec<ProjectedPoint>,
    /// The closest points, nearest first, at most `nearby_list_size` long.
    pub nearby:  Vec<NearbyItem>,
}

impl Frame {
    /// Points inside the forward cone, in list order.
    pub fn visible(&self) -> impl Iterator<Item = &ProjectedPoint> {
        self.points.iter().filter(|p| p.visible)
    }

    /// Re-attach the nearby list to the point records it refers to.
    ///
    /// `pois` must be the list the frame was computed from.
    pub fn nearby_entries<'a>(&self, pois: &'a [PointOfInterest]) -> Vec<NearbyEntry<'a>> {
        self.nearby
            .iter()
            .filter_map(|item| {
                pois.get(item.id.index()).map(|poi| NearbyEntry {
                    id:         item.id,
                    poi,
                    distance_m: item.distance_m,
                })
            })
            .collect()
    }
}
