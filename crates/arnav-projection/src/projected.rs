//! Combined per-tick projection of a point of interest.

use arnav_core::PoiId;
use arnav_nav::NavigationState;
use arnav_poi::PointOfInterest;

use crate::{ProjectionConfig, Viewport, project_to_ar, project_to_map};

/// Everything the presentation layer needs to draw one point this tick.
///
/// Recomputed from scratch every tick; never stored across ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedPoint {
    pub poi:                  PoiId,
    pub distance_m:           f64,
    pub bearing_deg:          f64,
    pub relative_bearing_deg: f64,
    pub screen_x:             f64,
    pub screen_y:             f64,
    pub scale:                f64,
    pub visible:              bool,
    pub map_x:                f64,
    pub map_y:                f64,
}

/// Project a single point into both the AR overlay and the map.
pub fn project(
    state:    &NavigationState,
    id:       PoiId,
    poi:      &PointOfInterest,
    viewport: Viewport,
    config:   &ProjectionConfig,
) -> ProjectedPoint {
    let ar = project_to_ar(state, poi.coordinate, viewport, config);
    let map = project_to_map(state, poi.coordinate, config.map_scale);
    ProjectedPoint {
        poi:                  id,
        distance_m:           ar.distance_m,
        bearing_deg:          ar.bearing_deg,
        relative_bearing_deg: ar.relative_bearing_deg,
        screen_x:             ar.screen_x,
        screen_y:             ar.screen_y,
        scale:                ar.scale,
        visible:              ar.visible,
        map_x:                map.map_x,
        map_y:                map.map_y,
    }
}

/// Project every point in `pois`; the result is in input order and
/// `result[i].poi == PoiId(i)`.
///
/// A point whose index does not fit a `PoiId` has no identity and is left
/// out.  `SimBuilder` refuses such lists before they reach a frame.
pub fn project_all(
    state:    &NavigationState,
    pois:     &[PointOfInterest],
    viewport: Viewport,
    config:   &ProjectionConfig,
) -> Vec<ProjectedPoint> {
    #[cfg(not(feature = "parallel"))]
    {
        pois.iter()
            .enumerate()
            .filter_map(|(i, poi)| {
                let id = PoiId::try_from(i).ok()?;
                Some(project(state, id, poi, viewport, config))
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Collecting into a Vec keeps input order.
        pois.par_iter()
            .enumerate()
            .filter_map(|(i, poi)| {
                let id = PoiId::try_from(i).ok()?;
                Some(project(state, id, poi, viewport, config))
            })
            .collect()
    }
}
