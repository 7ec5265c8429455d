//! Run configuration: trajectory parameters and map settings.

use crate::error::BasinError;
use crate::integrator::IntegratorChoice;
use crate::params::Overrides;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default time step.
pub const DEFAULT_DT: f64 = 0.01;
/// Default step budget per trajectory.
pub const DEFAULT_N_STEPS: usize = 5000;
/// Default capture radius around each pole.
pub const DEFAULT_R_STOP: f64 = 0.05;
/// Default number of samples per axis.
pub const DEFAULT_GRID_SIZE: usize = 400;

/// Per-trajectory integration settings shared by every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryParams {
    /// Fixed time step.
    pub dt: f64,
    /// Step budget before a trajectory is classified as timed out.
    pub n_steps: usize,
    /// Capture radius around each pole.
    pub r_stop: f64,
    /// Starting velocity of every particle.
    pub initial_velocity: DVec2,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            n_steps: DEFAULT_N_STEPS,
            r_stop: DEFAULT_R_STOP,
            initial_velocity: DVec2::ZERO,
        }
    }
}

impl TrajectoryParams {
    /// Layers the keys present in `params` over `self`.
    pub fn with_json(self, params: &Value) -> Self {
        let o = Overrides::new(params);
        Self {
            dt: o.real("dt", self.dt),
            n_steps: o.count("n_steps", self.n_steps),
            r_stop: o.real("r_stop", self.r_stop),
            initial_velocity: o.vec2("initial_velocity", self.initial_velocity),
        }
    }

    /// Checks that `dt` and `r_stop` are finite and positive, `n_steps` is
    /// non-zero and the initial velocity is finite.
    pub fn validate(&self) -> Result<(), BasinError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(BasinError::invalid_parameter(
                "dt",
                format!("must be finite and positive, got {}", self.dt),
            ));
        }
        if self.n_steps == 0 {
            return Err(BasinError::invalid_parameter("n_steps", "must be non-zero"));
        }
        if !(self.r_stop.is_finite() && self.r_stop > 0.0) {
            return Err(BasinError::invalid_parameter(
                "r_stop",
                format!("must be finite and positive, got {}", self.r_stop),
            ));
        }
        if !self.initial_velocity.is_finite() {
            return Err(BasinError::invalid_parameter(
                "initial_velocity",
                "components must be finite",
            ));
        }
        Ok(())
    }
}

/// Settings for one basin map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub integrator: IntegratorChoice,
    /// Samples per axis; the map is `grid_size x grid_size` pixels.
    pub grid_size: usize,
    #[serde(flatten)]
    pub trajectory: TrajectoryParams,
    /// When false, progress observers are not notified.
    pub show_progress: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorChoice::default(),
            grid_size: DEFAULT_GRID_SIZE,
            trajectory: TrajectoryParams::default(),
            show_progress: true,
        }
    }
}

impl MapConfig {
    /// Builds a config from a JSON override object on top of the defaults.
    ///
    /// Numeric keys fall back to defaults when missing or mistyped. An
    /// unrecognized `integrator` name is an error.
    pub fn from_json(params: &Value) -> Result<Self, BasinError> {
        Self::default().with_json(params)
    }

    /// Layers the keys present in `params` over `self`.
    pub fn with_json(self, params: &Value) -> Result<Self, BasinError> {
        let o = Overrides::new(params);
        let integrator = match o.text("integrator") {
            Some(name) => name.parse()?,
            None => self.integrator,
        };
        Ok(Self {
            integrator,
            grid_size: o.count("grid_size", self.grid_size),
            trajectory: self.trajectory.with_json(params),
            show_progress: o.flag("show_progress", self.show_progress),
        })
    }

    /// Total number of pixels, or `InvalidGridSize` if it would be zero or overflow.
    pub fn pixel_count(&self) -> Result<usize, BasinError> {
        if self.grid_size == 0 {
            return Err(BasinError::InvalidGridSize);
        }
        self.grid_size
            .checked_mul(self.grid_size)
            .ok_or(BasinError::InvalidGridSize)
    }

    pub fn validate(&self) -> Result<(), BasinError> {
        self.pixel_count()?;
        self.trajectory.validate()
    }
}
