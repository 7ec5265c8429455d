//! Error types for the basins core.

use thiserror::Error;

/// Errors produced while configuring or running a basin map.
///
/// Every variant is a configuration-time rejection. Numerical trouble during
/// integration (singularities, non-convergence) is never an error.
#[derive(Debug, Error)]
pub enum BasinError {
    /// Grid size was zero, or `size * size` overflowed `usize`.
    #[error("invalid grid size: must be non-zero and size * size must fit in memory")]
    InvalidGridSize,

    /// The integrator name is not one of the recognized options.
    #[error("unknown integrator: {0} (expected \"rk4\" or \"symplectic\")")]
    UnknownIntegrator(String),

    /// A numeric parameter was out of its valid range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An attractor failed validation (strength, position or color).
    #[error("invalid attractor: {0}")]
    InvalidAttractor(String),

    /// Two attractors share the same position.
    #[error("attractors {first} and {second} share the same position")]
    DuplicateAttractor { first: usize, second: usize },

    /// A color string or component could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A grid cell references a pole that does not exist in the attractor set.
    #[error("pole index {index} out of range for {count} attractors")]
    PoleOutOfRange { index: usize, count: usize },

    /// A (row, col) pair was outside a grid or image.
    #[error("cell ({row}, {col}) out of bounds for grid of size {size}")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A flat buffer did not match the expected `size * size` length.
    #[error("dimension mismatch: expected {expected} cells, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl BasinError {
    /// Shorthand for [`BasinError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        BasinError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
