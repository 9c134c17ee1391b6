//! Parameters for the multi-start GRASP runner.

use serde::{Deserialize, Serialize};

use crate::constructive::check_parameters;
use crate::error::{CoverError, Result};
use crate::local_search::MoveSet;

/// Configuration for [`GraspRunner`](crate::runner::GraspRunner).
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_covering::config::GraspConfig;
/// use u_covering::local_search::MoveSet;
///
/// let config = GraspConfig::default()
///     .with_alpha(0.8)
///     .with_trials(25)
///     .with_seed(7)
///     .with_moves(MoveSet::DROP | MoveSet::SWAP_ONE_FOR_ONE);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.trials, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraspConfig {
    /// RCL threshold mix in `[0, 1]`; 1 is greedy, 0 is uniform.
    pub alpha: f64,
    /// Score tolerance for near-ties, and for solution cost checks.
    pub epsilon: f64,
    /// Number of construction + local search trials.
    pub trials: usize,
    /// Seed for the trial generator; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Neighborhoods enabled in local search.
    pub moves: MoveSet,
    /// Re-run local search on its own output until the cost stops falling.
    pub repeat_local_search: bool,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.9,
            epsilon: 1e-9,
            trials: 100,
            seed: None,
            moves: MoveSet::ALL,
            repeat_local_search: false,
        }
    }
}

impl GraspConfig {
    /// Sets the RCL threshold mix.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the score tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the enabled local search neighborhoods.
    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    /// Enables or disables repeating local search to convergence.
    pub fn with_repeat_local_search(mut self, repeat: bool) -> Self {
        self.repeat_local_search = repeat;
        self
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::InvalidConfig`] if `alpha` is outside `[0, 1]`,
    /// `epsilon` is not a positive finite number, or `trials` is zero.
    pub fn validate(&self) -> Result<()> {
        check_parameters(self.alpha, self.epsilon)?;
        if self.trials == 0 {
            return Err(CoverError::InvalidConfig(
                "at least one trial is required".to_string(),
            ));
        }
        Ok(())
    }
}
