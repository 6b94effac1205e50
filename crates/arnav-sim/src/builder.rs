//! Fluent builder for constructing a [`Sim`].

use arnav_core::{PoiId, SimConfig};
use arnav_nav::NavigationState;
use arnav_poi::{PoiSource, PoiStatus, PointOfInterest, load_or_empty};
use arnav_projection::Viewport;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                      |
/// |-----------------------|----------------------------------------------|
/// | `.points(v)`          | empty list                                   |
/// | `.source(s)`          | none; overrides `.points` when set           |
/// | `.viewport(v)`        | `Viewport::default()` (1280×720)             |
/// | `.initial_state(s)`   | `config.start_position` / `start_heading_deg`|
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .source(CsvPoiSource::from_path("points.csv"))
///     .viewport(Viewport::new(800.0, 600.0))
///     .build()?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    points:   Option<Vec<PointOfInterest>>,
    source:   Option<Box<dyn PoiSource>>,
    viewport: Option<Viewport>,
    state:    Option<NavigationState>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            points:   None,
            source:   None,
            viewport: None,
            state:    None,
        }
    }

    /// Supply an already-loaded point list.
    pub fn points(mut self, points: Vec<PointOfInterest>) -> Self {
        self.points = Some(points);
        self
    }

    /// Supply a data source, fetched once during [`build`][Self::build].
    ///
    /// A failing source does not fail the build: the simulation starts with
    /// no points and `Sim::status` records the error.
    pub fn source(mut self, source: impl PoiSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Override the starting pose from the config.
    pub fn initial_state(mut self, state: NavigationState) -> Self {
        self.state = Some(state);
        self
    }

    /// Validate the config, load points, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let (points, status) = match (self.source, self.points) {
            (Some(mut source), _) => {
                let load = load_or_empty(source.as_mut());
                (load.points, load.status)
            }
            (None, Some(points)) => {
                let n = points.len();
                (points, PoiStatus::Loaded(n))
            }
            (None, None) => (Vec::new(), PoiStatus::Loaded(0)),
        };

        check_point_count(points.len())?;

        let state = self
            .state
            .unwrap_or_else(|| NavigationState::from_config(&self.config));
        let viewport = self.viewport.unwrap_or_default();

        log::info!(
            "simulation ready: {} points, start {} heading {:.1}, tick {} ms",
            points.len(),
            state.position,
            state.heading_deg,
            self.config.tick_interval_ms,
        );

        Ok(Sim::new(self.config, state, points, status, viewport))
    }
}

/// Every point needs a `PoiId`, so a list may hold at most `u32::MAX + 1`
/// entries.
pub(crate) fn check_point_count(n: usize) -> SimResult<()> {
    match n.checked_sub(1) {
        Some(last) if PoiId::try_from(last).is_err() => Err(SimError::TooManyPoints(n)),
        _ => Ok(()),
    }
}
