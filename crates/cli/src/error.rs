//! CLI errors and their process exit codes.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | argument error, reported by clap before `run` starts |
//! | 10   | library rejection (unknown integrator, bad config or poles) |
//! | 11   | a scenario file could not be read |
//! | 12   | a scenario file or `--params` string is not valid JSON |
//! | 13   | the summary could not be serialized |

use basins_core::BasinError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CliError {
    Basin(BasinError),
    ReadScenario { path: PathBuf, source: io::Error },
    /// `what` names the offending input, e.g. `--params` or a file path.
    BadJson { what: String, source: serde_json::Error },
    Output(serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Basin(_) => 10,
            CliError::ReadScenario { .. } => 11,
            CliError::BadJson { .. } => 12,
            CliError::Output(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Basin(e) => write!(f, "{e}"),
            CliError::ReadScenario { path, source } => {
                write!(f, "cannot read scenario {}: {source}", path.display())
            }
            CliError::BadJson { what, source } => write!(f, "invalid JSON in {what}: {source}"),
            CliError::Output(e) => write!(f, "cannot serialize summary: {e}"),
        }
    }
}

impl From<BasinError> for CliError {
    fn from(e: BasinError) -> Self {
        CliError::Basin(e)
    }
}

/// Bare `?` on a serde error is only used when writing output.
impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
