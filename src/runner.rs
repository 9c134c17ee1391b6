//! Multi-start GRASP: repeated construction followed by local search.
//!
//! Each trial builds a cover with [`grasp_construct`], verifies it, refines
//! it with [`improve`], verifies again, and records both costs. The cheapest
//! refined cover across all trials is kept.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::GraspConfig;
use crate::constructive::grasp_construct;
use crate::error::{CoverError, Result};
use crate::local_search::improve;
use crate::models::{Incidence, Solution};

/// Costs observed in one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    /// Cost right after construction.
    pub construction_cost: f64,
    /// Cost after local search.
    pub improved_cost: f64,
}

/// Relative gaps `(z - z*) / z*` of the refined trial costs against a
/// reference optimum `z*`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapSummary {
    /// Smallest gap.
    pub min: f64,
    /// Mean gap.
    pub avg: f64,
    /// Largest gap.
    pub max: f64,
}

/// Outcome of a multi-start run.
#[derive(Debug, Clone)]
pub struct GraspResult {
    /// Cheapest refined cover found.
    pub best: Solution,
    /// Per-trial costs, in trial order.
    pub trials: Vec<TrialRecord>,
}

impl GraspResult {
    /// Cost of the best cover.
    pub fn best_cost(&self) -> f64 {
        self.best.cost()
    }

    /// Gap statistics against a known optimum.
    ///
    /// Returns `None` when there are no trials or `optimum` is zero.
    pub fn gaps(&self, optimum: f64) -> Option<GapSummary> {
        if self.trials.is_empty() || optimum == 0.0 {
            return None;
        }
        let gaps: Vec<f64> = self
            .trials
            .iter()
            .map(|t| (t.improved_cost - optimum) / optimum)
            .collect();
        let min = gaps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = gaps.iter().sum::<f64>() / gaps.len() as f64;
        Some(GapSummary { min, avg, max })
    }
}

/// Runs GRASP trials over an instance.
///
/// # Examples
///
/// ```
/// use u_covering::config::GraspConfig;
/// use u_covering::models::Incidence;
/// use u_covering::runner::GraspRunner;
///
/// let model = Incidence::from_requirements(
///     vec![1.0, 1.0, 3.0],
///     vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
/// );
/// let config = GraspConfig::default().with_trials(10).with_seed(42);
///
/// let result = GraspRunner::run(&model, &config).unwrap();
/// assert_eq!(result.trials.len(), 10);
/// assert!((result.best_cost() - 2.0).abs() < 1e-10);
/// ```
pub struct GraspRunner;

impl GraspRunner {
    /// Runs `config.trials` trials with a generator seeded from
    /// `config.seed`, or from OS entropy when no seed is set.
    ///
    /// # Errors
    ///
    /// - [`CoverError::InvalidConfig`] for out-of-range parameters
    /// - [`CoverError::Infeasible`] if the instance cannot be covered
    /// - [`CoverError::CheckFailed`] if a produced cover fails verification
    pub fn run(model: &Incidence, config: &GraspConfig) -> Result<GraspResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(model, config, &mut rng)
    }

    /// Runs the trials drawing from a caller-supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        model: &Incidence,
        config: &GraspConfig,
        rng: &mut R,
    ) -> Result<GraspResult> {
        config.validate()?;

        info!(
            event = "run_start",
            items = model.num_items(),
            requirements = model.num_requirements(),
            alpha = config.alpha,
            trials = config.trials,
        );

        let mut best: Option<Solution> = None;
        let mut trials = Vec::with_capacity(config.trials);

        for k in 0..config.trials {
            let built = grasp_construct(model, config.alpha, config.epsilon, rng)?;
            if !model.verify(&built, config.epsilon) {
                return Err(CoverError::CheckFailed {
                    stage: "construction",
                });
            }

            let refined = Self::descend(model, &built, config);
            if !model.verify(&refined, config.epsilon) {
                return Err(CoverError::CheckFailed {
                    stage: "local search",
                });
            }

            info!(
                event = "trial_end",
                trial = k + 1,
                construction_cost = built.cost(),
                improved_cost = refined.cost(),
            );
            trials.push(TrialRecord {
                construction_cost: built.cost(),
                improved_cost: refined.cost(),
            });

            if best.as_ref().is_none_or(|b| refined.cost() < b.cost()) {
                best = Some(refined);
            }
        }

        // trials >= 1 after validation
        let best = best.ok_or_else(|| CoverError::InvalidConfig("no trials ran".to_string()))?;
        info!(event = "run_end", best_cost = best.cost(), best_items = best.len());
        Ok(GraspResult { best, trials })
    }

    fn descend(model: &Incidence, built: &Solution, config: &GraspConfig) -> Solution {
        let mut current = improve(model, built, config.moves);
        if config.repeat_local_search {
            loop {
                let next = improve(model, &current, config.moves);
                if next.cost() + config.epsilon < current.cost() {
                    current = next;
                } else {
                    break;
                }
            }
        }
        current
    }
}
