//! Plain data row types written by output backends.

use arnav_projection::ProjectedPoint;
use arnav_sim::Frame;

/// One projected point at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRow {
    pub tick:                 u64,
    pub poi_id:               u32,
    pub distance_m:           f64,
    pub bearing_deg:          f64,
    pub relative_bearing_deg: f64,
    pub visible:              bool,
    pub screen_x:             f64,
    pub screen_y:             f64,
    pub scale:                f64,
    pub map_x:                f64,
    pub map_y:                f64,
}

impl PointRow {
    pub fn new(tick: u64, p: &ProjectedPoint) -> Self {
        Self {
            tick,
            poi_id:               p.poi.0,
            distance_m:           p.distance_m,
            bearing_deg:          p.bearing_deg,
            relative_bearing_deg: p.relative_bearing_deg,
            visible:              p.visible,
            screen_x:             p.screen_x,
            screen_y:             p.screen_y,
            scale:                p.scale,
            map_x:                p.map_x,
            map_y:                p.map_y,
        }
    }
}

/// Observer pose and a visibility count for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickRow {
    pub tick:           u64,
    pub unix_ms:        i64,
    pub lat:            f64,
    pub lon:            f64,
    pub heading_deg:    f64,
    pub visible_points: u64,
}

impl From<&Frame> for TickRow {
    fn from(frame: &Frame) -> Self {
        Self {
            tick:           frame.tick.0,
            unix_ms:        frame.unix_ms,
            lat:            frame.state.position.lat,
            lon:            frame.state.position.lon,
            heading_deg:    frame.state.heading_deg,
            visible_points: frame.visible().count() as u64,
        }
    }
}
