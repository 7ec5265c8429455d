//! Net inverse-square force exerted by a set of poles.

use crate::attractor::Attractor;
use glam::DVec2;

/// Distance below which a pole's contribution is skipped.
///
/// A particle this close to a pole is treated as unaffected by it; the
/// integrator's capture check ends the trajectory instead.
pub const SINGULARITY_EPS: f64 = 1e-9;

/// Total force on a unit-mass particle at `position`.
///
/// Sums `-k * r_vec / |r_vec|^3` over the attractors in order, where
/// `r_vec = position - pole`. This is the gradient of `V = -k / r`, so
/// each term points toward its pole with inverse-square magnitude.
pub fn force(position: DVec2, attractors: &[Attractor]) -> DVec2 {
    attractors.iter().fold(DVec2::ZERO, |total, att| {
        let r_vec = position - att.position();
        let r = r_vec.length();
        if r < SINGULARITY_EPS {
            return total;
        }
        total - att.strength() * r_vec / (r * r * r)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Srgb;

    fn pole(k: f64, x: f64, y: f64) -> Attractor {
        Attractor::new(k, DVec2::new(x, y), Srgb::RED).unwrap()
    }

    #[test]
    fn no_attractors_gives_zero_force() {
        assert_eq!(force(DVec2::new(0.3, -0.7), &[]), DVec2::ZERO);
    }

    #[test]
    fn single_pole_points_toward_pole() {
        let f = force(DVec2::new(2.0, 0.0), &[pole(1.0, 0.0, 0.0)]);
        assert!((f.x + 0.25).abs() < 1e-15, "expected -1/r^2, got {f}");
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn magnitude_scales_with_strength_and_inverse_square() {
        let weak = force(DVec2::new(0.0, 1.0), &[pole(1.0, 0.0, 0.0)]);
        let strong = force(DVec2::new(0.0, 1.0), &[pole(3.0, 0.0, 0.0)]);
        let far = force(DVec2::new(0.0, 2.0), &[pole(1.0, 0.0, 0.0)]);
        assert!((strong.length() - 3.0 * weak.length()).abs() < 1e-12);
        assert!((far.length() - weak.length() / 4.0).abs() < 1e-12);
    }

    #[test]
    fn particle_at_pole_skips_that_pole() {
        let poles = [pole(1.0, 0.0, 0.0), pole(1.0, 1.0, 0.0)];
        let f = force(DVec2::ZERO, &poles);
        assert!(f.is_finite());
        // Only the pole at (1, 0) contributes: unit pull along +x.
        assert!((f.x - 1.0).abs() < 1e-15, "got {f}");
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn guard_fires_just_below_eps() {
        let p = DVec2::new(SINGULARITY_EPS * 0.5, 0.0);
        assert_eq!(force(p, &[pole(1.0, 0.0, 0.0)]), DVec2::ZERO);
    }

    #[test]
    fn symmetric_poles_cancel_at_midpoint() {
        let poles = [pole(1.0, -0.5, 0.0), pole(1.0, 0.5, 0.0)];
        assert_eq!(force(DVec2::ZERO, &poles), DVec2::ZERO);
    }

    #[test]
    fn mirrored_position_gives_mirrored_force() {
        let poles = [pole(1.0, -0.5, 0.0), pole(1.0, 0.5, 0.0)];
        let f = force(DVec2::new(0.3, 0.2), &poles);
        let g = force(DVec2::new(-0.3, 0.2), &poles);
        assert_eq!(f.x.to_bits(), (-g.x).to_bits());
        assert_eq!(f.y.to_bits(), g.y.to_bits());
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn coord() -> impl Strategy<Value = f64> {
            -1.0_f64..=1.0
        }

        proptest! {
            #[test]
            fn force_at_any_pole_is_finite(
                poles in prop::collection::vec((0.1_f64..5.0, coord(), coord()), 1..6),
                pick in any::<prop::sample::Index>(),
            ) {
                let attractors: Vec<Attractor> =
                    poles.iter().map(|&(k, x, y)| pole(k, x, y)).collect();
                let at = attractors[pick.index(attractors.len())].position();
                let f = force(at, &attractors);
                prop_assert!(!f.x.is_nan() && !f.y.is_nan(), "NaN force at pole: {f}");
            }

            #[test]
            fn single_pole_force_is_attractive(
                k in 0.1_f64..5.0,
                x in coord(),
                y in coord(),
            ) {
                let p = DVec2::new(x, y);
                prop_assume!(p.length() > 1e-3);
                let f = force(p, &[pole(k, 0.0, 0.0)]);
                prop_assert!(f.dot(p) < 0.0, "force {f} does not point toward origin from {p}");
            }
        }
    }
}
