//! End-to-end properties of generated basin maps.

use basins_core::{
    Attractor, BasinError, Classification, ClassGrid, IntegratorChoice, MapConfig, Scenario, Srgb,
    TrajectoryParams,
};
use basins_map::{classify_grid, generate_map, NoProgress};
use glam::DVec2;

fn pole(x: f64, y: f64, color: Srgb) -> Attractor {
    Attractor::new(1.0, DVec2::new(x, y), color).unwrap()
}

fn config(integrator: IntegratorChoice, grid_size: usize, dt: f64, n_steps: usize) -> MapConfig {
    MapConfig {
        integrator,
        grid_size,
        trajectory: TrajectoryParams {
            dt,
            n_steps,
            r_stop: 0.05,
            initial_velocity: DVec2::ZERO,
        },
        show_progress: false,
    }
}

fn three_poles() -> Vec<Attractor> {
    Scenario::three_poles().attractors
}

fn swap_poles(c: Classification) -> Classification {
    match c {
        Classification::Captured(0) => Classification::Captured(1),
        Classification::Captured(1) => Classification::Captured(0),
        other => other,
    }
}

fn assert_mirror_symmetric(grid: &ClassGrid) {
    let n = grid.size();
    for i in 0..n {
        for j in 0..n {
            let left = grid.get(i, j).unwrap();
            let right = grid.get(i, n - 1 - j).unwrap();
            assert_eq!(right, swap_poles(left), "row {i}, columns {j} and {}", n - 1 - j);
        }
    }
}

#[test]
fn three_pole_map_has_three_basins() {
    let attractors = three_poles();
    for integrator in IntegratorChoice::ALL {
        let grid = classify_grid(&attractors, &config(integrator, 50, 0.01, 2000), &NoProgress).unwrap();
        let tally = grid.tally(attractors.len());
        assert_eq!(tally.total(), 2500);
        for (index, &count) in tally.captured.iter().enumerate() {
            assert!(count > 0, "{integrator}: pole {index} captured nothing");
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let attractors = three_poles();
    let cfg = config(IntegratorChoice::Rk4, 30, 0.01, 800);
    let first = classify_grid(&attractors, &cfg, &NoProgress).unwrap();
    let second = classify_grid(&attractors, &cfg, &NoProgress).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mirrored_poles_give_mirrored_maps() {
    let attractors = [pole(-0.5, 0.0, Srgb::RED), pole(0.5, 0.0, Srgb::GREEN)];
    for integrator in IntegratorChoice::ALL {
        for n in [24, 25] {
            let grid = classify_grid(&attractors, &config(integrator, n, 0.01, 600), &NoProgress).unwrap();
            assert_mirror_symmetric(&grid);
        }
    }
}

#[test]
fn no_poles_means_no_captures() {
    for integrator in IntegratorChoice::ALL {
        let mut cfg = config(integrator, 12, 0.01, 100);
        cfg.trajectory.initial_velocity = DVec2::new(3.0, -1.0);
        let grid = classify_grid(&[], &cfg, &NoProgress).unwrap();
        assert!(grid.cells().iter().all(|c| !c.is_captured()));
    }
}

#[test]
fn single_pole_captures_whole_grid() {
    let attractors = [pole(0.0, 0.0, Srgb::BLUE)];
    for integrator in IntegratorChoice::ALL {
        for n in [15, 16] {
            let grid = classify_grid(&attractors, &config(integrator, n, 0.001, 3000), &NoProgress).unwrap();
            assert!(
                grid.cells().iter().all(|&c| c == Classification::Captured(0)),
                "{integrator} on a {n}x{n} grid"
            );
        }
    }
}

#[test]
fn image_colors_follow_classification() {
    let attractors = three_poles();
    let cfg = config(IntegratorChoice::Symplectic, 20, 0.01, 600);
    let grid = classify_grid(&attractors, &cfg, &NoProgress).unwrap();
    let image = generate_map(&attractors, &cfg, &NoProgress).unwrap();
    assert_eq!(image.size(), 20);
    for i in 0..20 {
        for j in 0..20 {
            let expected = match grid.get(i, j).unwrap() {
                Classification::Captured(k) => attractors[k].color(),
                Classification::Escaped | Classification::TimedOut => Srgb::WHITE,
            };
            assert_eq!(image.pixel(i, j).unwrap(), expected);
        }
    }
}

#[test]
fn preset_config_runs_at_reduced_size() {
    let mut scenario = Scenario::from_preset("three-poles", 0).unwrap();
    scenario.config.grid_size = 8;
    scenario.config.show_progress = false;
    let image = generate_map(&scenario.attractors, &scenario.config, &NoProgress).unwrap();
    assert_eq!(image.to_rgb8().len(), 8 * 8 * 3);
}

#[test]
fn unknown_integrator_name_is_rejected_by_json_config() {
    let err = MapConfig::from_json(&serde_json::json!({ "integrator": "euler_symplectic" })).unwrap_err();
    assert!(matches!(err, BasinError::UnknownIntegrator(_)));
}

#[test]
fn saved_random_scenario_reproduces_map() {
    let mut scenario = Scenario::random(42);
    scenario.config.grid_size = 10;
    scenario.config.trajectory.n_steps = 300;
    scenario.config.show_progress = false;
    let json = serde_json::to_string(&scenario).unwrap();
    let loaded: Scenario = serde_json::from_str(&json).unwrap();

    let original = classify_grid(&scenario.attractors, &scenario.config, &NoProgress).unwrap();
    let reloaded = classify_grid(&loaded.attractors, &loaded.config, &NoProgress).unwrap();
    assert_eq!(original, reloaded);

    let image = generate_map(&loaded.attractors, &loaded.config, &NoProgress).unwrap();
    assert!(image.data().iter().all(|c| (0.0..=1.0).contains(c)));
}
