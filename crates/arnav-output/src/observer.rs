//! Bridges `SimObserver` to a `FrameWriter`.

use arnav_core::Tick;
use arnav_poi::PointOfInterest;
use arnav_sim::{Frame, SimObserver};

use crate::row::{PointRow, TickRow};
use crate::writer::FrameWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every frame to any [`FrameWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct FrameOutputObserver<W: FrameWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: FrameWriter> FrameOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: FrameWriter> SimObserver for FrameOutputObserver<W> {
    fn on_frame(&mut self, frame: &Frame, _pois: &[PointOfInterest]) {
        let result = self.writer.write_tick(&TickRow::from(frame));
        self.store_err(result);

        let rows: Vec<PointRow> = frame
            .points
            .iter()
            .map(|p| PointRow::new(frame.tick.0, p))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_points(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
