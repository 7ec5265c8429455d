#![deny(unsafe_code)]
//! Kick-drift-kick symplectic integrator.
//!
//! Each step applies half a velocity kick from the force at the current
//! position, drifts the position a full step with the kicked velocity, then
//! applies the second half kick from the force at the new position. Two force
//! evaluations per step. The map preserves phase-space volume, so bound orbits
//! keep a bounded energy error instead of drifting.

use basins_core::attractor::Attractor;
use basins_core::classification::Outcome;
use basins_core::config::TrajectoryParams;
use basins_core::force::force;
use basins_core::integrator::{Integrator, ParticleState};
use glam::DVec2;

/// Leapfrog (kick-drift-kick) stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symplectic;

impl Integrator for Symplectic {
    fn name(&self) -> &'static str {
        "symplectic"
    }

    fn advance(&self, state: &mut ParticleState, attractors: &[Attractor], dt: f64) {
        let half_dt = 0.5 * dt;
        // kick
        state.velocity += force(state.position, attractors) * half_dt;
        // drift
        state.position += state.velocity * dt;
        // kick
        state.velocity += force(state.position, attractors) * half_dt;
    }
}

/// Integrates one trajectory from `pos0` with velocity `vel0` using the
/// kick-drift-kick scheme.
pub fn integrate_symplectic(
    pos0: DVec2,
    vel0: DVec2,
    attractors: &[Attractor],
    params: &TrajectoryParams,
) -> Outcome {
    Symplectic.integrate(ParticleState::new(pos0, vel0), attractors, params)
}
