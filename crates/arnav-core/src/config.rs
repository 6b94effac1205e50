//! Top-level simulation configuration.
//!
//! Every recognized option has a default, so applications usually start
//! from `SimConfig::default()` and override a handful of fields.  With the
//! `serde` feature a config can also be read from a JSON object in which
//! any field may be omitted.

use crate::{CoreError, CoreResult, GeoPoint, SimClock, Tick};

/// Simulation and projection settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Unix timestamp (ms) for tick 0.
    pub start_unix_ms: i64,

    /// Milliseconds between projection refreshes.  Default: 100.
    pub tick_interval_ms: u32,

    /// Ticks to simulate when driven by `Sim::run`.
    pub total_ticks: u64,

    /// Seed for sample point generation.  Same seed, same points.
    pub seed: u64,

    /// Observer position at tick 0.
    pub start_position: GeoPoint,

    /// Observer heading at tick 0, degrees clockwise from north.
    pub start_heading_deg: f64,

    /// Degrees turned per rotate-left/rotate-right.  Default: 15.
    pub rotation_step_deg: f64,

    /// Degrees of latitude/longitude moved per move-forward (~5 m).
    pub movement_step: f64,

    /// Map percent per degree of offset.  Default: 100 000.
    pub map_scale: f64,

    /// Half-width of the visible forward cone.  Default: 60.
    pub forward_cone_half_width_deg: f64,

    /// Length of the "nearby points" list.  Default: 5.
    pub nearby_list_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            start_unix_ms:               0,
            tick_interval_ms:            100,
            total_ticks:                 100,
            seed:                        42,
            start_position:              GeoPoint::new(37.7749, -122.4194),
            start_heading_deg:           0.0,
            rotation_step_deg:           15.0,
            movement_step:               0.000_05,
            map_scale:                   100_000.0,
            forward_cone_half_width_deg: 60.0,
            nearby_list_size:            5,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.start_unix_ms, self.tick_interval_ms)
    }

    /// Reject settings that would make the projection or clock meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        let cone = self.forward_cone_half_width_deg;
        if !(cone > 0.0 && cone <= 180.0) {
            return Err(CoreError::Config(format!(
                "forward_cone_half_width_deg {cone} outside (0, 180]"
            )));
        }
        if !(self.map_scale.is_finite() && self.map_scale > 0.0) {
            return Err(CoreError::Config(format!(
                "map_scale {} must be finite and positive",
                self.map_scale
            )));
        }
        if !self.rotation_step_deg.is_finite() || !self.movement_step.is_finite() {
            return Err(CoreError::Config("step sizes must be finite".into()));
        }
        if !self.start_position.is_valid() || !self.start_heading_deg.is_finite() {
            return Err(CoreError::Config(format!(
                "invalid start pose {} heading {}",
                self.start_position, self.start_heading_deg
            )));
        }
        Ok(())
    }

    /// Parse a JSON object and validate it.  Missing fields take defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> CoreResult<Self> {
        let cfg: SimConfig =
            serde_json::from_reader(reader).map_err(|e| CoreError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Like [`from_json_reader`][Self::from_json_reader] but opens `path`.
    #[cfg(feature = "serde")]
    pub fn from_json_path(path: &std::path::Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}
