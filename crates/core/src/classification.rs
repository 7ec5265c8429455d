//! Terminal fate of a single trajectory.

use serde::{Deserialize, Serialize};

/// How a trajectory ended.
///
/// `Escaped` and `TimedOut` render identically but stay distinct here so
/// callers can tell a particle that left the domain from one that simply ran
/// out of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Came within the capture radius of the pole at this index.
    Captured(usize),
    /// Left the disc of radius [`ESCAPE_RADIUS`](crate::integrator::ESCAPE_RADIUS).
    Escaped,
    /// Exhausted the step budget without capture or escape.
    TimedOut,
}

impl Classification {
    /// Index of the capturing pole, if any.
    pub fn pole(self) -> Option<usize> {
        match self {
            Classification::Captured(i) => Some(i),
            Classification::Escaped | Classification::TimedOut => None,
        }
    }

    pub fn is_captured(self) -> bool {
        matches!(self, Classification::Captured(_))
    }
}

/// A classification together with the number of steps it took.
///
/// For `TimedOut`, `steps` equals the step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub classification: Classification,
    pub steps: usize,
}
