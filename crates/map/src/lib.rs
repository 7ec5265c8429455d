#![deny(unsafe_code)]
//! Basin-of-attraction map generator.
//!
//! Sweeps a `grid_size x grid_size` lattice of starting positions over
//! [-1, 1]^2, integrates one trajectory per pixel, and paints each pixel with
//! the color of the pole that captured it (white for escaped or timed-out
//! trajectories).
//!
//! Pixels are independent, so the sweep runs on the rayon thread pool. Each
//! task writes only its own cell of a pre-sized buffer; the color pass starts
//! after the parallel iterator has joined.

pub mod progress;

use basins_core::attractor::{validate_attractors, Attractor};
use basins_core::classification::Classification;
use basins_core::color::Srgb;
use basins_core::config::MapConfig;
use basins_core::error::BasinError;
use basins_core::force::SINGULARITY_EPS;
use basins_core::grid::ClassGrid;
use basins_core::image::RgbImage;
use basins_core::integrator::{Integrator, ParticleState};
use basins_integrators::IntegratorKind;
use glam::DVec2;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

pub use progress::{NoProgress, ProgressObserver};

/// `n` evenly spaced samples over [-1, 1], endpoints included.
///
/// Sample `j` is `(2j - (n - 1)) / (n - 1)`, which makes the axis exactly
/// antisymmetric (`axis[n - 1 - j] == -axis[j]` exactly). A single sample
/// sits at -1.
pub fn axis(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![-1.0; n];
    }
    let span = (n - 1) as f64;
    (0..n)
        .map(|j| (2.0 * j as f64 - span) / span)
        .collect()
}

/// Classifies every pixel of the map.
///
/// Validates `config` and `attractors` before any trajectory runs. Pixel
/// `(i, j)` starts at `(axis[j], axis[i])` with the configured initial
/// velocity. When `config.show_progress` is false the observer is not called.
pub fn classify_grid(
    attractors: &[Attractor],
    config: &MapConfig,
    observer: &dyn ProgressObserver,
) -> Result<ClassGrid, BasinError> {
    config.validate()?;
    validate_attractors(attractors)?;
    let total = config.pixel_count()?;
    let n = config.grid_size;
    let params = config.trajectory;
    let integrator = IntegratorKind::from_choice(config.integrator);

    if params.r_stop <= SINGULARITY_EPS {
        warn!(
            "capture radius {} is not larger than the singularity guard {SINGULARITY_EPS}; \
             trajectories reaching a pole may not terminate",
            params.r_stop
        );
    }
    debug!(
        "classifying {n}x{n} grid with {} over {} poles (dt={}, n_steps={}, r_stop={})",
        integrator.name(),
        attractors.len(),
        params.dt,
        params.n_steps,
        params.r_stop
    );

    let observer: &dyn ProgressObserver = if config.show_progress {
        observer
    } else {
        &NoProgress
    };
    let coords = axis(n);
    let completed = AtomicUsize::new(0);
    let started = Instant::now();

    let mut cells = vec![Classification::TimedOut; total];
    cells.par_iter_mut().enumerate().for_each(|(p, cell)| {
        let (i, j) = (p / n, p % n);
        let start = ParticleState::new(DVec2::new(coords[j], coords[i]), params.initial_velocity);
        *cell = integrator
            .integrate(start, attractors, &params)
            .classification;
        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        observer.on_progress(done, total);
    });

    let grid = ClassGrid::from_cells(n, cells)?;
    let tally = grid.tally(attractors.len());
    info!(
        "classified {total} pixels in {:.2?}: captured {:?}, escaped {}, timed out {}",
        started.elapsed(),
        tally.captured,
        tally.escaped,
        tally.timed_out
    );
    Ok(grid)
}

/// Paints a classified grid.
///
/// `Captured(i)` takes the color of `attractors[i]`; escaped and timed-out
/// cells are white. Returns `PoleOutOfRange` if a cell names a pole that is
/// not in `attractors`.
pub fn colorize(grid: &ClassGrid, attractors: &[Attractor]) -> Result<RgbImage, BasinError> {
    let pixels = grid
        .cells()
        .iter()
        .map(|c| match c.pole() {
            Some(index) => attractors
                .get(index)
                .map(Attractor::color)
                .ok_or(BasinError::PoleOutOfRange {
                    index,
                    count: attractors.len(),
                }),
            None => Ok(Srgb::WHITE),
        })
        .collect::<Result<Vec<_>, _>>()?;
    RgbImage::from_pixels(grid.size(), &pixels)
}

/// Classifies and paints a full basin map.
pub fn generate_map(
    attractors: &[Attractor],
    config: &MapConfig,
    observer: &dyn ProgressObserver,
) -> Result<RgbImage, BasinError> {
    let grid = classify_grid(attractors, config, observer)?;
    colorize(&grid, attractors)
}
