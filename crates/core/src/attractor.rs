//! Fixed inverse-square poles.

use crate::color::Srgb;
use crate::error::BasinError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A fixed pole with potential `V = -k / r`.
///
/// Immutable once built. Construction validates the strength, the position
/// and every color channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAttractor", into = "RawAttractor")]
pub struct Attractor {
    strength: f64,
    position: DVec2,
    color: Srgb,
}

/// Unvalidated wire form of an [`Attractor`].
#[derive(Serialize, Deserialize)]
struct RawAttractor {
    strength: f64,
    position: DVec2,
    color: Srgb,
}

impl Attractor {
    /// Creates a pole of strength `strength` at `position`.
    ///
    /// Returns `BasinError::InvalidAttractor` if the strength is not a finite
    /// positive number, the position has a non-finite coordinate, or a color
    /// channel is NaN or outside [0, 1].
    pub fn new(strength: f64, position: DVec2, color: Srgb) -> Result<Self, BasinError> {
        if !(strength.is_finite() && strength > 0.0) {
            return Err(BasinError::InvalidAttractor(format!(
                "strength must be finite and positive, got {strength}"
            )));
        }
        if !position.is_finite() {
            return Err(BasinError::InvalidAttractor(format!(
                "position must be finite, got ({}, {})",
                position.x, position.y
            )));
        }
        // Srgb fields are public, so a struct literal may bypass Srgb::new.
        let [r, g, b] = color.to_array();
        let color = Srgb::new(r, g, b).map_err(|e| BasinError::InvalidAttractor(e.to_string()))?;
        Ok(Self {
            strength,
            position,
            color,
        })
    }

    /// Builds a pole from values already known to be valid.
    pub(crate) fn from_valid_parts(strength: f64, position: DVec2, color: Srgb) -> Self {
        debug_assert!(strength.is_finite() && strength > 0.0 && position.is_finite());
        Self {
            strength,
            position,
            color,
        }
    }

    /// Strength `k` of the potential.
    pub fn strength(&self) -> f64 {
        self.strength
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Color painted over this pole's basin.
    pub fn color(&self) -> Srgb {
        self.color
    }
}

impl TryFrom<RawAttractor> for Attractor {
    type Error = BasinError;

    fn try_from(raw: RawAttractor) -> Result<Self, Self::Error> {
        Attractor::new(raw.strength, raw.position, raw.color)
    }
}

impl From<Attractor> for RawAttractor {
    fn from(a: Attractor) -> Self {
        RawAttractor {
            strength: a.strength,
            position: a.position,
            color: a.color,
        }
    }
}

/// Checks that no two attractors share a position.
///
/// Coincident poles would make the capture index ambiguous, so they are
/// rejected before any trajectory runs.
pub fn validate_attractors(attractors: &[Attractor]) -> Result<(), BasinError> {
    for (first, a) in attractors.iter().enumerate() {
        if let Some(offset) = attractors[first + 1..]
            .iter()
            .position(|b| b.position == a.position)
        {
            return Err(BasinError::DuplicateAttractor {
                first,
                second: first + 1 + offset,
            });
        }
    }
    Ok(())
}
