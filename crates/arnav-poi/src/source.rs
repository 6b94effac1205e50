//! The point-of-interest data-source boundary.
//!
//! # Formats
//!
//! **JSON**: an array of objects, in the shape served by a
//! navigation-points endpoint:
//!
//! ```json
//! [
//!   { "id": 1, "title": "Point A", "description": "Location 1 - 120m from center",
//!     "latitude": 37.7758, "longitude": -122.4189 }
//! ]
//! ```
//!
//! **CSV**: one row per point with a header:
//!
//! ```csv
//! title,description,latitude,longitude
//! Point A,Location 1 - 120m from center,37.7758,-122.4189
//! ```

use std::io::Read;
use std::path::PathBuf;

use crate::{PoiRecord, PoiResult, PointOfInterest};

/// A read-only supplier of points of interest.
///
/// `fetch` is called once per session.  The returned order is the points'
/// identity for the rest of that session.
pub trait PoiSource {
    fn fetch(&mut self) -> PoiResult<Vec<PointOfInterest>>;

    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String {
        "point source".to_string()
    }
}

// ── In-memory ─────────────────────────────────────────────────────────────────

/// A source backed by an already-built list.
#[derive(Clone, Debug, Default)]
pub struct StaticPoiSource {
    points: Vec<PointOfInterest>,
}

impl StaticPoiSource {
    pub fn new(points: Vec<PointOfInterest>) -> Self {
        Self { points }
    }
}

impl PoiSource for StaticPoiSource {
    fn fetch(&mut self) -> PoiResult<Vec<PointOfInterest>> {
        Ok(self.points.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory points", self.points.len())
    }
}

// ── Shared input handling ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
enum Input {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl Input {
    fn open(&self) -> PoiResult<Box<dyn Read + '_>> {
        Ok(match self {
            Input::Path(p)  => Box::new(std::io::BufReader::new(std::fs::File::open(p)?)),
            Input::Bytes(b) => Box::new(b.as_slice()),
        })
    }

    fn describe(&self, kind: &str) -> String {
        match self {
            Input::Path(p)  => format!("{kind} file {}", p.display()),
            Input::Bytes(b) => format!("{kind} buffer ({} bytes)", b.len()),
        }
    }
}

fn into_points(records: Vec<PoiRecord>) -> PoiResult<Vec<PointOfInterest>> {
    records
        .into_iter()
        .enumerate()
        .map(|(i, r)| r.into_point(i))
        .collect()
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Reads a JSON array of [`PoiRecord`]s.
#[derive(Clone, Debug)]
pub struct JsonPoiSource {
    input: Input,
}

impl JsonPoiSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { input: Input::Path(path.into()) }
    }

    /// Useful for testing, or for a body already received over the network.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { input: Input::Bytes(bytes.into()) }
    }
}

impl PoiSource for JsonPoiSource {
    fn fetch(&mut self) -> PoiResult<Vec<PointOfInterest>> {
        let records: Vec<PoiRecord> = serde_json::from_reader(self.input.open()?)?;
        into_points(records)
    }

    fn describe(&self) -> String {
        self.input.describe("JSON")
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Reads `title,description,latitude,longitude` rows.
#[derive(Clone, Debug)]
pub struct CsvPoiSource {
    input: Input,
}

impl CsvPoiSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { input: Input::Path(path.into()) }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { input: Input::Bytes(bytes.into()) }
    }
}

impl PoiSource for CsvPoiSource {
    fn fetch(&mut self) -> PoiResult<Vec<PointOfInterest>> {
        let mut reader = csv::Reader::from_reader(self.input.open()?);
        let records = reader
            .deserialize::<PoiRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        into_points(records)
    }

    fn describe(&self) -> String {
        self.input.describe("CSV")
    }
}
