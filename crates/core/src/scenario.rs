//! Reproducible description of a basin-map run.
//!
//! A [`Scenario`] bundles the poles and the [`MapConfig`]. Two identical
//! scenarios always produce bit-identical grids.

use crate::attractor::{validate_attractors, Attractor};
use crate::color::Srgb;
use crate::config::{MapConfig, TrajectoryParams};
use crate::error::BasinError;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Names accepted by [`Scenario::from_preset`].
pub const PRESET_NAMES: &[&str] = &["three-poles", "random"];

/// Smallest and largest pole count drawn by [`Scenario::random`].
const RANDOM_POLES_MIN: usize = 2;
const RANDOM_POLES_MAX: usize = 10;

/// 8-bit channel bounds for random colors: 52/255 >= 0.2 and 254/255 < 1.
/// Colors on the 8-bit lattice survive the `#rrggbb` serde form unchanged.
const RANDOM_CHANNEL_MIN: u8 = 52;
const RANDOM_CHANNEL_MAX: u8 = 254;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub attractors: Vec<Attractor>,
    #[serde(default)]
    pub config: MapConfig,
}

impl Scenario {
    pub fn new(attractors: Vec<Attractor>, config: MapConfig) -> Self {
        Self { attractors, config }
    }

    /// Three unit poles at (-0.5, 0), (0.5, 0) and (0, 0.8), colored red,
    /// green and blue, on a 450-pixel grid with `dt = 0.005` and 4000 steps.
    pub fn three_poles() -> Self {
        let attractors = vec![
            Attractor::from_valid_parts(1.0, DVec2::new(-0.5, 0.0), Srgb::RED),
            Attractor::from_valid_parts(1.0, DVec2::new(0.5, 0.0), Srgb::GREEN),
            Attractor::from_valid_parts(1.0, DVec2::new(0.0, 0.8), Srgb::BLUE),
        ];
        let config = MapConfig {
            grid_size: 450,
            trajectory: TrajectoryParams {
                dt: 0.005,
                n_steps: 4000,
                ..TrajectoryParams::default()
            },
            ..MapConfig::default()
        };
        Self { attractors, config }
    }

    /// Between 2 and 10 poles with strength in [0.5, 2), position in
    /// [-1, 1)^2 and 8-bit color channels in [0.2, 1), drawn from `seed`.
    ///
    /// Uses a 500-pixel grid, `dt = 0.004`, 5000 steps and `r_stop = 0.03`.
    pub fn random(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = rng.random_range(RANDOM_POLES_MIN..=RANDOM_POLES_MAX);
        let mut attractors: Vec<Attractor> = Vec::with_capacity(count);
        while attractors.len() < count {
            let strength = rng.random_range(0.5..2.0);
            let position = DVec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
            let mut channel =
                || f64::from(rng.random_range(RANDOM_CHANNEL_MIN..=RANDOM_CHANNEL_MAX)) / 255.0;
            let color = Srgb {
                r: channel(),
                g: channel(),
                b: channel(),
            };
            if attractors.iter().any(|a| a.position() == position) {
                continue;
            }
            attractors.push(Attractor::from_valid_parts(strength, position, color));
        }
        let config = MapConfig {
            grid_size: 500,
            trajectory: TrajectoryParams {
                dt: 0.004,
                n_steps: 5000,
                r_stop: 0.03,
                ..TrajectoryParams::default()
            },
            ..MapConfig::default()
        };
        Self { attractors, config }
    }

    /// Looks up a preset by name; `seed` only affects `"random"`.
    pub fn from_preset(name: &str, seed: u64) -> Result<Self, BasinError> {
        match name {
            "three-poles" => Ok(Self::three_poles()),
            "random" => Ok(Self::random(seed)),
            other => Err(BasinError::invalid_parameter(
                "preset",
                format!("unknown preset '{other}', expected one of {PRESET_NAMES:?}"),
            )),
        }
    }

    /// Validates the map configuration and the attractor set.
    pub fn validate(&self) -> Result<(), BasinError> {
        self.config.validate()?;
        validate_attractors(&self.attractors)
    }
}
