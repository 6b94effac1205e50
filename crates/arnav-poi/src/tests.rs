//! Unit tests for arnav-poi.

use arnav_core::GeoPoint;

use crate::{
    CsvPoiSource, JsonPoiSource, PoiError, PoiSource, PoiStatus, PointOfInterest,
    StaticPoiSource, load_or_empty, sample_points,
};

const POINTS_JSON: &str = r#"[
  { "id": 1, "title": "Point A", "description": "Location 1 - 120m from center",
    "latitude": 37.7758, "longitude": -122.4189 },
  { "id": 2, "title": "Point B", "description": "Location 2 - 480m from center",
    "latitude": 37.7712, "longitude": -122.4231 },
  { "id": 3, "title": "Point C", "latitude": 37.7749, "longitude": -122.4150 }
]"#;

const POINTS_CSV: &str = "\
title,description,latitude,longitude\n\
Ferry Building,Historic terminal,37.7955,-122.3937\n\
Coit Tower,Art deco tower,37.8024,-122.4058\n\
";

// ── JSON ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod json {
    use super::*;

    #[test]
    fn parses_in_order_and_ignores_extra_fields() {
        let points = JsonPoiSource::from_bytes(POINTS_JSON).fetch().unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].title, "Point A");
        assert_eq!(points[1].coordinate, GeoPoint::new(37.7712, -122.4231));
        assert_eq!(points[2].title, "Point C");
    }

    #[test]
    fn missing_description_is_empty() {
        let points = JsonPoiSource::from_bytes(POINTS_JSON).fetch().unwrap();
        assert_eq!(points[2].description, "");
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(JsonPoiSource::from_bytes("[]").fetch().unwrap().is_empty());
    }

    #[test]
    fn malformed_json_errors() {
        let err = JsonPoiSource::from_bytes("{ nope").fetch().unwrap_err();
        assert!(matches!(err, PoiError::Json(_)), "{err}");
    }

    #[test]
    fn missing_required_field_errors() {
        let err = JsonPoiSource::from_bytes(r#"[{ "title": "x", "latitude": 1.0 }]"#)
            .fetch()
            .unwrap_err();
        assert!(matches!(err, PoiError::Json(_)));
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let body = r#"[
            { "title": "ok", "latitude": 1.0, "longitude": 1.0 },
            { "title": "bad", "latitude": 123.0, "longitude": 1.0 }
        ]"#;
        match JsonPoiSource::from_bytes(body).fetch() {
            Err(PoiError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        std::fs::write(&path, POINTS_JSON).unwrap();
        let mut source = JsonPoiSource::from_path(&path);
        assert_eq!(source.fetch().unwrap().len(), 3);
        assert!(source.describe().contains("points.json"));
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_source {
    use super::*;

    #[test]
    fn parses_rows() {
        let points = CsvPoiSource::from_bytes(POINTS_CSV).fetch().unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].title, "Ferry Building");
        assert_eq!(points[1].description, "Art deco tower");
        assert_eq!(points[1].coordinate, GeoPoint::new(37.8024, -122.4058));
    }

    #[test]
    fn non_numeric_latitude_errors() {
        let body = "title,description,latitude,longitude\nx,y,north,1.0\n";
        let err = CsvPoiSource::from_bytes(body).fetch().unwrap_err();
        assert!(matches!(err, PoiError::Csv(_)));
    }
}

// ── Session load ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod load {
    use super::*;

    #[test]
    fn success_reports_count() {
        let load = load_or_empty(&mut JsonPoiSource::from_bytes(POINTS_JSON));
        assert_eq!(load.points.len(), 3);
        assert_eq!(load.status, PoiStatus::Loaded(3));
        assert!(load.status.is_available());
        assert_eq!(load.status.to_string(), "Loaded 3 navigation points");
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let mut source = JsonPoiSource::from_path("/definitely/not/here/points.json");
        let load = load_or_empty(&mut source);
        assert!(load.points.is_empty());
        assert!(!load.status.is_available());
        assert!(load.status.to_string().starts_with("Error loading navigation data:"));
    }

    #[test]
    fn invalid_data_degrades_to_empty() {
        let load = load_or_empty(&mut JsonPoiSource::from_bytes("not json"));
        assert!(load.points.is_empty());
        assert!(matches!(load.status, PoiStatus::Unavailable(_)));
    }

    #[test]
    fn works_through_trait_object() {
        let pts = vec![PointOfInterest::new(GeoPoint::new(1.0, 2.0), "a", "b")];
        let mut boxed: Box<dyn PoiSource> = Box::new(StaticPoiSource::new(pts.clone()));
        let load = load_or_empty(boxed.as_mut());
        assert_eq!(load.points, pts);
    }
}

// ── Sample layout ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sample {
    use super::*;

    const CENTER: GeoPoint = GeoPoint { lat: 37.7749, lon: -122.4194 };

    #[test]
    fn deterministic_for_seed() {
        assert_eq!(sample_points(CENTER, 10, 7), sample_points(CENTER, 10, 7));
        assert_ne!(sample_points(CENTER, 10, 7), sample_points(CENTER, 10, 8));
    }

    #[test]
    fn within_distance_band() {
        for p in sample_points(CENTER, 50, 1) {
            let d = CENTER.distance_m(p.coordinate);
            assert!((45.0..510.0).contains(&d), "{} at {d} m", p.title);
        }
    }

    #[test]
    fn titles_and_descriptions() {
        let pts = sample_points(CENTER, 3, 3);
        assert_eq!(pts[0].title, "Point A");
        assert_eq!(pts[2].title, "Point C");
        assert!(pts[1].description.starts_with("Location 2 - "));
        assert!(pts[1].description.ends_with("m from center"));
    }

    #[test]
    fn record_round_trip_through_json() {
        let pts = sample_points(CENTER, 64, 9);
        let records: Vec<crate::PoiRecord> = pts.iter().map(Into::into).collect();
        let body = serde_json::to_vec(&records).unwrap();
        let back = JsonPoiSource::from_bytes(body).fetch().unwrap();
        assert_eq!(back, pts);
    }
}
