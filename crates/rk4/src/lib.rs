#![deny(unsafe_code)]
//! Classic fourth-order Runge-Kutta integrator.
//!
//! Treats the particle as the first-order system `p' = v`, `v' = F(p)` and
//! advances both with the 1-2-2-1 tableau. Four force evaluations per step;
//! local error O(dt^5), so it tracks fast infall near a pole more closely than
//! the symplectic scheme at the same step size.

use basins_core::attractor::Attractor;
use basins_core::classification::Outcome;
use basins_core::config::TrajectoryParams;
use basins_core::force::force;
use basins_core::integrator::{Integrator, ParticleState};
use glam::DVec2;

/// Fourth-order Runge-Kutta stepper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

impl Integrator for Rk4 {
    fn name(&self) -> &'static str {
        "rk4"
    }

    fn advance(&self, state: &mut ParticleState, attractors: &[Attractor], dt: f64) {
        let acc = |p: DVec2| force(p, attractors);
        let pos = state.position;
        let vel = state.velocity;

        let k1v = acc(pos) * dt;
        let k1p = vel * dt;

        let k2v = acc(pos + 0.5 * k1p) * dt;
        let k2p = (vel + 0.5 * k1v) * dt;

        let k3v = acc(pos + 0.5 * k2p) * dt;
        let k3p = (vel + 0.5 * k2v) * dt;

        let k4v = acc(pos + k3p) * dt;
        let k4p = (vel + k3v) * dt;

        state.velocity += (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
        state.position += (k1p + 2.0 * k2p + 2.0 * k3p + k4p) / 6.0;
    }
}

/// Integrates one trajectory from `pos0` with velocity `vel0` using RK4.
pub fn integrate_rk4(
    pos0: DVec2,
    vel0: DVec2,
    attractors: &[Attractor],
    params: &TrajectoryParams,
) -> Outcome {
    Rk4.integrate(ParticleState::new(pos0, vel0), attractors, params)
}
