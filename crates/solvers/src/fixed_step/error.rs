use std::error::Error as StdError;

use fixstep_core::{GridError, Shape};

/// Errors that can occur during fixed-step integration.
///
/// `step` identifies the history index the solver was computing when the
/// error occurred, so a failure while advancing from `t[k]` reports `k + 1`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid time grid: {0}")]
    InvalidGrid(#[from] GridError),

    #[error("shape mismatch at step {step}: expected {expected}, found {found}")]
    ShapeMismatch {
        step: usize,
        expected: Shape,
        found: Shape,
    },

    #[error("problem error at step {step}: {source}")]
    Problem {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    /// Returns the step at which integration failed, if any step was attempted.
    #[must_use]
    pub fn step(&self) -> Option<usize> {
        match self {
            Error::InvalidGrid(_) => None,
            Error::ShapeMismatch { step, .. } | Error::Problem { step, .. } => Some(*step),
        }
    }
}
