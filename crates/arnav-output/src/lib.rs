//! `arnav-output`: the side-effecting edge of the arnav engine.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`format`]   | Status-line text: heading, position, nearby list          |
//! | [`row`]      | `PointRow`, `TickRow` plain data rows                     |
//! | [`writer`]   | `FrameWriter` trait                                       |
//! | [`csv`]      | `CsvFrameWriter` → `points.csv`, `ticks.csv`              |
//! | [`observer`] | `FrameOutputObserver<W>`, bridges `SimObserver` to a writer   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use arnav_output::{CsvFrameWriter, FrameOutputObserver};
//!
//! let writer = CsvFrameWriter::new(Path::new("./output"))?;
//! let mut obs = FrameOutputObserver::new(writer);
//! sim.run(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod format;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvFrameWriter;
pub use error::{OutputError, OutputResult};
pub use format::{NO_POINTS, format_heading, format_marker, format_nearby, format_position};
pub use observer::FrameOutputObserver;
pub use row::{PointRow, TickRow};
pub use writer::FrameWriter;
