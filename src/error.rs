//! Error types for set covering heuristics.

use thiserror::Error;

/// Errors raised by the covering heuristics and the multi-start runner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoverError {
    /// A requirement is still uncovered and no item can cover it.
    ///
    /// Only happens when some requirement has an empty covering-item set.
    #[error("requirement {requirement} cannot be covered by any item")]
    Infeasible {
        /// Lowest-index requirement left uncovered.
        requirement: usize,
    },

    /// Heuristic or runner parameters are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A produced solution failed coverage or cost verification.
    #[error("solution check failed after {stage}")]
    CheckFailed {
        /// Pipeline stage that produced the bad solution.
        stage: &'static str,
    },
}

/// Result alias for covering operations.
pub type Result<T> = std::result::Result<T, CoverError>;
