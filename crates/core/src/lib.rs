#![deny(unsafe_code)]
//! Core types and traits for basin-of-attraction maps.
//!
//! Provides the `Attractor` pole type, the inverse-square `force` field, the
//! `Integrator` trait with its shared capture/escape/timeout loop,
//! `Classification` outcomes, the `ClassGrid` and `RgbImage` containers,
//! run configuration (`MapConfig`, `TrajectoryParams`, `Scenario`) and the
//! `BasinError` type.

pub mod attractor;
pub mod classification;
pub mod color;
pub mod config;
pub mod error;
pub mod force;
pub mod grid;
pub mod image;
pub mod integrator;
pub mod params;
pub mod scenario;

pub use attractor::{validate_attractors, Attractor};
pub use classification::{Classification, Outcome};
pub use color::Srgb;
pub use config::{MapConfig, TrajectoryParams};
pub use error::BasinError;
pub use force::{force, SINGULARITY_EPS};
pub use grid::{ClassGrid, Tally};
pub use image::RgbImage;
pub use integrator::{Integrator, IntegratorChoice, ParticleState, ESCAPE_RADIUS};
pub use scenario::Scenario;
