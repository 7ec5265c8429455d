//! The `Integrator` trait shared by every trajectory stepper.
//!
//! An integrator only knows how to advance a [`ParticleState`] by one step.
//! The provided [`Integrator::integrate`] method owns the termination loop,
//! so capture, escape and timeout are decided the same way for every scheme.

use crate::attractor::Attractor;
use crate::classification::{Classification, Outcome};
use crate::config::TrajectoryParams;
use crate::error::BasinError;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A particle further than this from the origin has escaped.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Position and velocity of a unit-mass particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl ParticleState {
    pub fn new(position: DVec2, velocity: DVec2) -> Self {
        Self { position, velocity }
    }
}

/// Fate of a particle at `position`, or `None` if it is still in flight.
///
/// Poles are checked in order and the first one within `r_stop` wins; the
/// capture check comes before the escape check.
pub fn terminal_classification(
    position: DVec2,
    attractors: &[Attractor],
    r_stop: f64,
) -> Option<Classification> {
    if let Some(index) = attractors
        .iter()
        .position(|att| position.distance(att.position()) < r_stop)
    {
        return Some(Classification::Captured(index));
    }
    if position.length() > ESCAPE_RADIUS {
        return Some(Classification::Escaped);
    }
    None
}

/// A fixed-step scheme that advances a particle under the poles' force field.
///
/// This trait is object-safe.
pub trait Integrator {
    /// Short identifier, matching the name accepted by [`IntegratorChoice`].
    fn name(&self) -> &'static str;

    /// Advances `state` by one step of size `dt`.
    fn advance(&self, state: &mut ParticleState, attractors: &[Attractor], dt: f64);

    /// Runs up to `params.n_steps` steps from `start` and classifies the result.
    ///
    /// Termination is checked after every full step, so the reported step count
    /// is the first step at which the particle was captured or escaped.
    fn integrate(
        &self,
        start: ParticleState,
        attractors: &[Attractor],
        params: &TrajectoryParams,
    ) -> Outcome {
        let mut state = start;
        for step in 1..=params.n_steps {
            self.advance(&mut state, attractors, params.dt);
            if let Some(classification) =
                terminal_classification(state.position, attractors, params.r_stop)
            {
                return Outcome {
                    classification,
                    steps: step,
                };
            }
        }
        Outcome {
            classification: Classification::TimedOut,
            steps: params.n_steps,
        }
    }
}

/// The recognized integrator names.
///
/// Parsed once at configuration time; an unknown name is rejected with
/// [`BasinError::UnknownIntegrator`] before any trajectory runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegratorChoice {
    /// Classic fourth-order Runge-Kutta.
    #[default]
    Rk4,
    /// Kick-drift-kick leapfrog.
    Symplectic,
}

impl IntegratorChoice {
    pub const ALL: [IntegratorChoice; 2] = [IntegratorChoice::Rk4, IntegratorChoice::Symplectic];

    pub fn as_str(self) -> &'static str {
        match self {
            IntegratorChoice::Rk4 => "rk4",
            IntegratorChoice::Symplectic => "symplectic",
        }
    }
}

impl FromStr for IntegratorChoice {
    type Err = BasinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rk4" => Ok(IntegratorChoice::Rk4),
            "symplectic" => Ok(IntegratorChoice::Symplectic),
            other => Err(BasinError::UnknownIntegrator(other.to_string())),
        }
    }
}

impl fmt::Display for IntegratorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
