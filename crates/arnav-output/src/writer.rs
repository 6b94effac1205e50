//! The `FrameWriter` trait implemented by output backends.

use crate::{OutputResult, PointRow, TickRow};

/// Trait implemented by frame output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`FrameOutputObserver::take_error`][crate::FrameOutputObserver::take_error].
pub trait FrameWriter {
    /// Write one row per projected point of a frame.
    fn write_points(&mut self, rows: &[PointRow]) -> OutputResult<()>;

    /// Write one per-tick summary row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
