#![deny(unsafe_code)]
//! Integrator registry: maps integrator names to implementations.
//!
//! This crate sits between `basins-core` (which defines the `Integrator`
//! trait) and the individual scheme crates (`basins-rk4`,
//! `basins-symplectic`). The map generator and the CLI both resolve
//! integrators here so name handling lives in one place.

use basins_core::attractor::Attractor;
use basins_core::classification::Outcome;
use basins_core::config::TrajectoryParams;
use basins_core::error::BasinError;
use basins_core::integrator::{Integrator, IntegratorChoice, ParticleState};
use basins_rk4::Rk4;
use basins_symplectic::Symplectic;

/// All available integrators, statically dispatched.
///
/// Use [`IntegratorKind::from_name`] for string-based construction (CLI,
/// JSON) or [`IntegratorKind::from_choice`] once a config has been parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Fourth-order Runge-Kutta.
    Rk4(Rk4),
    /// Kick-drift-kick leapfrog.
    Symplectic(Symplectic),
}

impl IntegratorKind {
    pub fn from_choice(choice: IntegratorChoice) -> Self {
        match choice {
            IntegratorChoice::Rk4 => IntegratorKind::Rk4(Rk4),
            IntegratorChoice::Symplectic => IntegratorKind::Symplectic(Symplectic),
        }
    }

    /// Constructs an integrator by name.
    ///
    /// Returns `BasinError::UnknownIntegrator` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, BasinError> {
        name.parse().map(Self::from_choice)
    }

    pub fn choice(&self) -> IntegratorChoice {
        match self {
            IntegratorKind::Rk4(_) => IntegratorChoice::Rk4,
            IntegratorKind::Symplectic(_) => IntegratorChoice::Symplectic,
        }
    }

    /// Names of every recognized integrator.
    pub fn list_integrators() -> Vec<&'static str> {
        IntegratorChoice::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl Integrator for IntegratorKind {
    fn name(&self) -> &'static str {
        match self {
            IntegratorKind::Rk4(i) => i.name(),
            IntegratorKind::Symplectic(i) => i.name(),
        }
    }

    fn advance(&self, state: &mut ParticleState, attractors: &[Attractor], dt: f64) {
        match self {
            IntegratorKind::Rk4(i) => i.advance(state, attractors, dt),
            IntegratorKind::Symplectic(i) => i.advance(state, attractors, dt),
        }
    }

    // Forwarded so the inner loop monomorphizes per scheme instead of
    // matching on every step.
    fn integrate(
        &self,
        start: ParticleState,
        attractors: &[Attractor],
        params: &TrajectoryParams,
    ) -> Outcome {
        match self {
            IntegratorKind::Rk4(i) => i.integrate(start, attractors, params),
            IntegratorKind::Symplectic(i) => i.integrate(start, attractors, params),
        }
    }
}
