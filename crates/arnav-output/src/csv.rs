//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `points.csv`: one row per point of interest per tick
//! - `ticks.csv`: one row per tick

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::FrameWriter;
use crate::{OutputResult, PointRow, TickRow};

/// Writes frame output to two CSV files.
pub struct CsvFrameWriter {
    points:   Writer<File>,
    ticks:    Writer<File>,
    finished: bool,
}

impl CsvFrameWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut points = Writer::from_path(dir.join("points.csv"))?;
        points.write_record([
            "tick", "poi_id", "distance_m", "bearing_deg", "relative_bearing_deg",
            "visible", "screen_x", "screen_y", "scale", "map_x", "map_y",
        ])?;

        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record(["tick", "unix_ms", "lat", "lon", "heading_deg", "visible_points"])?;

        Ok(Self {
            points,
            ticks,
            finished: false,
        })
    }
}

impl FrameWriter for CsvFrameWriter {
    fn write_points(&mut self, rows: &[PointRow]) -> OutputResult<()> {
        for row in rows {
            self.points.write_record(&[
                row.tick.to_string(),
                row.poi_id.to_string(),
                format!("{:.2}", row.distance_m),
                format!("{:.3}", row.bearing_deg),
                format!("{:.3}", row.relative_bearing_deg),
                (row.visible as u8).to_string(),
                format!("{:.1}", row.screen_x),
                format!("{:.1}", row.screen_y),
                format!("{:.3}", row.scale),
                format!("{:.3}", row.map_x),
                format!("{:.3}", row.map_y),
            ])?;
        }
        Ok(())
    }

    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.unix_ms.to_string(),
            format!("{:.7}", row.lat),
            format!("{:.7}", row.lon),
            format!("{:.1}", row.heading_deg),
            row.visible_points.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.points.flush()?;
        self.ticks.flush()?;
        Ok(())
    }
}
