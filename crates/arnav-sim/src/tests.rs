//! Integration tests for arnav-sim.

use arnav_core::{GeoPoint, PoiId, SimConfig, Tick};
use arnav_nav::{NavIntent, NavigationState};
use arnav_poi::{JsonPoiSource, PoiStatus, PointOfInterest, StaticPoiSource};
use arnav_projection::Viewport;

use crate::{Frame, NoopObserver, SimBuilder, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

const SF: GeoPoint = GeoPoint { lat: 37.7749, lon: -122.4194 };

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig { total_ticks, ..SimConfig::default() }
}

/// North, east, south, west of the start at ~110 m, plus one far north.
fn compass_points() -> Vec<PointOfInterest> {
    vec![
        PointOfInterest::new(GeoPoint::new(SF.lat + 0.001, SF.lon), "north", ""),
        PointOfInterest::new(GeoPoint::new(SF.lat, SF.lon + 0.00126), "east", ""),
        PointOfInterest::new(GeoPoint::new(SF.lat - 0.001, SF.lon), "south", ""),
        PointOfInterest::new(GeoPoint::new(SF.lat, SF.lon - 0.00126), "west", ""),
        PointOfInterest::new(GeoPoint::new(SF.lat + 0.01, SF.lon), "far north", ""),
    ]
}

/// Records every callback for later inspection.
#[derive(Default)]
struct Recorder {
    starts:  Vec<Tick>,
    intents: Vec<(Tick, NavIntent)>,
    frames:  Vec<Frame>,
    ended:   Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_intent(&mut self, tick: Tick, intent: NavIntent, _state: &NavigationState) {
        self.intents.push((tick, intent));
    }
    fn on_frame(&mut self, frame: &Frame, _pois: &[PointOfInterest]) {
        self.frames.push(frame.clone());
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(10)).build().unwrap();
        assert!(sim.points.is_empty());
        assert_eq!(sim.status, PoiStatus::Loaded(0));
        assert_eq!(sim.state.position, SF);
        assert_eq!(sim.state.heading_deg, 0.0);
        assert_eq!(sim.viewport, Viewport::default());
    }

    #[test]
    fn invalid_config_errors() {
        let cfg = SimConfig { tick_interval_ms: 0, ..SimConfig::default() };
        assert!(SimBuilder::new(cfg).build().is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn point_count_limited_to_id_range() {
        use crate::SimError;
        use crate::builder::check_point_count;

        assert!(check_point_count(0).is_ok());
        assert!(check_point_count(5).is_ok());
        let max = u32::MAX as usize + 1;
        assert!(check_point_count(max).is_ok());
        assert!(matches!(
            check_point_count(max + 1),
            Err(SimError::TooManyPoints(n)) if n == max + 1
        ));
    }

    #[test]
    fn failing_source_starts_empty_with_status() {
        let sim = SimBuilder::new(test_config(10))
            .source(JsonPoiSource::from_bytes("<html>502</html>"))
            .build()
            .unwrap();
        assert!(sim.points.is_empty());
        assert!(!sim.status.is_available());
    }

    #[test]
    fn source_overrides_points() {
        let sim = SimBuilder::new(test_config(10))
            .points(compass_points())
            .source(StaticPoiSource::new(compass_points()[..2].to_vec()))
            .build()
            .unwrap();
        assert_eq!(sim.points.len(), 2);
        assert_eq!(sim.status, PoiStatus::Loaded(2));
    }

    #[test]
    fn initial_state_and_viewport_overrides() {
        let start = NavigationState::new(GeoPoint::new(1.0, 2.0), 90.0);
        let sim = SimBuilder::new(test_config(10))
            .initial_state(start)
            .viewport(Viewport::new(320.0, 240.0))
            .build()
            .unwrap();
        assert_eq!(sim.state, start);
        assert_eq!(sim.viewport.width, 320.0);
    }
}

// ── Running ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;
    use crate::{FixedTicks, Realtime};

    #[test]
    fn runs_to_end_tick() {
        let mut sim = SimBuilder::new(test_config(10)).build().unwrap();
        sim.run(&mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn run_ticks_advances_clock() {
        let mut sim = SimBuilder::new(test_config(100)).build().unwrap();
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(5));
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(8));
    }

    #[test]
    fn observer_called_once_per_tick() {
        let mut sim = SimBuilder::new(test_config(7)).points(compass_points()).build().unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert_eq!(rec.starts.len(), 7);
        assert_eq!(rec.frames.len(), 7);
        assert_eq!(rec.ended, Some(Tick(7)));
        assert_eq!(rec.frames[3].tick, Tick(3));
        assert_eq!(rec.frames[3].unix_ms, 300);
        assert!(rec.frames.iter().all(|f| f.points.len() == 5));
    }

    #[test]
    fn fixed_count_scheduler() {
        let mut sim = SimBuilder::new(test_config(100)).build().unwrap();
        sim.run_ticks(2, &mut NoopObserver);
        let mut sched = FixedTicks::count(&sim.clock, 4);
        sim.run_with(&mut sched, &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(6));
    }

    #[test]
    fn realtime_scheduler_paces_ticks() {
        let cfg = SimConfig { tick_interval_ms: 5, ..test_config(3) };
        let mut sim = SimBuilder::new(cfg).build().unwrap();
        let started = std::time::Instant::now();
        sim.run_with(&mut Realtime::until(Tick(3)), &mut NoopObserver);
        assert_eq!(sim.clock.current_tick, Tick(3));
        // Two waits between three ticks.
        assert!(started.elapsed() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn independent_sims_do_not_interact() {
        let mut a = SimBuilder::new(test_config(10)).build().unwrap();
        let b = SimBuilder::new(test_config(10)).build().unwrap();
        a.apply(NavIntent::RotateRight);
        assert_eq!(a.state.heading_deg, 15.0);
        assert_eq!(b.state.heading_deg, 0.0);
    }
}

// ── Intents ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn apply_refreshes_immediately() {
        let mut sim = SimBuilder::new(test_config(10)).points(compass_points()).build().unwrap();
        let before = sim.frame();
        assert!(before.points[0].visible, "north ahead at start");
        for _ in 0..6 {
            sim.apply(NavIntent::RotateRight);
        }
        let after = sim.apply(NavIntent::RotateRight);
        assert_eq!(after.state.heading_deg, 105.0);
        assert!(!after.points[0].visible);
        assert!(after.points[1].visible, "east ahead after turning right");
        // No tick consumed.
        assert_eq!(after.tick, Tick(0));
    }

    #[test]
    fn queued_intents_apply_fifo_at_next_tick() {
        let mut sim = SimBuilder::new(test_config(10)).build().unwrap();
        sim.push_intent(NavIntent::MoveForward);
        sim.push_intent(NavIntent::RotateRight);
        sim.push_intent(NavIntent::RotateRight);
        sim.push_intent(NavIntent::MoveForward);
        assert_eq!(sim.pending_intents(), 4);

        let mut rec = Recorder::default();
        sim.run_ticks(2, &mut rec);
        assert_eq!(sim.pending_intents(), 0);
        assert_eq!(rec.intents.len(), 4);
        assert!(rec.intents.iter().all(|(t, _)| *t == Tick(0)));
        assert_eq!(rec.intents[1].1, NavIntent::RotateRight);

        // North step, then a step at 30°.
        let step = sim.config.movement_step;
        let expected_lat = SF.lat + step + step * 30f64.to_radians().cos();
        let expected_lon = SF.lon + step * 30f64.to_radians().sin();
        assert!((sim.state.position.lat - expected_lat).abs() < 1e-12);
        assert!((sim.state.position.lon - expected_lon).abs() < 1e-12);
        assert_eq!(rec.frames[0].state, sim.state);
    }

    #[test]
    fn walking_towards_a_point_shrinks_its_distance() {
        let mut sim = SimBuilder::new(test_config(10)).points(compass_points()).build().unwrap();
        let d0 = sim.frame().points[0].distance_m;
        let d1 = sim.apply(NavIntent::MoveForward).points[0].distance_m;
        assert!(d1 < d0);
        assert!((d0 - d1 - 5.56).abs() < 0.1);
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use super::*;

    #[test]
    fn nearby_list_is_sorted_and_capped() {
        let cfg = SimConfig { nearby_list_size: 3, ..test_config(1) };
        let sim = SimBuilder::new(cfg).points(compass_points()).build().unwrap();
        let frame = sim.frame();
        assert_eq!(frame.nearby.len(), 3);
        for w in frame.nearby.windows(2) {
            assert!(w[0].distance_m <= w[1].distance_m);
        }
        assert!(frame.nearby.iter().all(|n| n.id != PoiId(4)));
    }

    #[test]
    fn nearby_entries_resolve_titles() {
        let sim = SimBuilder::new(test_config(1)).points(compass_points()).build().unwrap();
        let frame = sim.frame();
        let entries = frame.nearby_entries(&sim.points);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries.last().unwrap().poi.title, "far north");
    }

    #[test]
    fn visible_filters_forward_cone() {
        let sim = SimBuilder::new(test_config(1)).points(compass_points()).build().unwrap();
        let frame = sim.frame();
        let titles: Vec<&str> = frame
            .visible()
            .map(|p| sim.points[p.poi.index()].title.as_str())
            .collect();
        assert_eq!(titles, vec!["north", "far north"]);
    }

    #[test]
    fn viewport_change_moves_markers() {
        let mut sim = SimBuilder::new(test_config(1)).points(compass_points()).build().unwrap();
        sim.set_viewport(Viewport::new(400.0, 300.0));
        let x = sim.frame().points[0].screen_x;
        assert!((x - 200.0).abs() < 1e-9);
    }

    #[test]
    fn empty_point_list_projects_nothing() {
        let sim = SimBuilder::new(test_config(1)).build().unwrap();
        let frame = sim.frame();
        assert!(frame.points.is_empty());
        assert!(frame.nearby.is_empty());
    }
}
