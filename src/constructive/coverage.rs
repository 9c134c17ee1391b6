//! Incremental coverage bookkeeping and the restricted candidate list shared
//! by construction and repair.

use rand::Rng;

use crate::error::{CoverError, Result};
use crate::models::{Incidence, Solution};

/// Coverage counters maintained while items are added one by one.
///
/// - `counts[j]` — selected items covering requirement `j`
/// - `residual[i]` — uncovered requirements item `i` would still cover
#[derive(Debug, Clone)]
pub(crate) struct Coverage {
    residual: Vec<usize>,
    counts: Vec<usize>,
    uncovered: usize,
}

impl Coverage {
    /// Fresh counters: nothing selected, every requirement uncovered.
    pub(crate) fn new(model: &Incidence) -> Self {
        let residual = (0..model.num_items())
            .map(|i| model.item_requirements(i).len())
            .collect();
        Self {
            residual,
            counts: vec![0; model.num_requirements()],
            uncovered: model.num_requirements(),
        }
    }

    /// Accounts for selecting `item`. Returns how many requirements became
    /// covered.
    pub(crate) fn apply(&mut self, model: &Incidence, item: usize) -> usize {
        let mut newly = 0;
        for &j in model.item_requirements(item) {
            if self.counts[j] == 0 {
                newly += 1;
                for &other in model.covering_items(j) {
                    self.residual[other] -= 1;
                }
            }
            self.counts[j] += 1;
        }
        self.uncovered -= newly;
        newly
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.uncovered == 0
    }

    pub(crate) fn residual(&self, item: usize) -> usize {
        self.residual[item]
    }

    pub(crate) fn first_uncovered(&self) -> Option<usize> {
        self.counts.iter().position(|&c| c == 0)
    }
}

/// Builds the restricted candidate list for the current coverage state.
///
/// Every item with positive residual benefit is scored
/// `u[i] / (1 + cost[i] - min_cost)`; the list keeps the items whose score
/// is within `epsilon` of `e_min + alpha * (e_max - e_min)` or above.
pub(crate) fn restricted_candidates(
    model: &Incidence,
    coverage: &Coverage,
    alpha: f64,
    epsilon: f64,
) -> Vec<usize> {
    let shift = 1.0 - model.min_cost();
    let scored: Vec<(usize, f64)> = (0..model.num_items())
        .filter(|&i| coverage.residual(i) > 0)
        .map(|i| (i, coverage.residual(i) as f64 / (model.cost(i) + shift)))
        .collect();

    if scored.is_empty() {
        return Vec::new();
    }

    let (e_min, e_max) = scored
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, e)| {
            (lo.min(e), hi.max(e))
        });
    let e_limit = e_min + alpha * (e_max - e_min);

    scored
        .into_iter()
        .filter(|&(_, e)| e + epsilon >= e_limit)
        .map(|(i, _)| i)
        .collect()
}

/// Rejects an `alpha` outside `[0, 1]` and a non-positive or non-finite
/// `epsilon`.
pub(crate) fn check_parameters(alpha: f64, epsilon: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(CoverError::InvalidConfig(format!(
            "alpha must be in [0, 1], got {alpha}"
        )));
    }
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(CoverError::InvalidConfig(format!(
            "epsilon must be positive, got {epsilon}"
        )));
    }
    Ok(())
}

/// Adds randomly drawn RCL members until every requirement is covered.
pub(crate) fn complete<R: Rng>(
    model: &Incidence,
    solution: &mut Solution,
    coverage: &mut Coverage,
    alpha: f64,
    epsilon: f64,
    rng: &mut R,
) -> Result<()> {
    check_parameters(alpha, epsilon)?;
    while !coverage.is_complete() {
        let rcl = restricted_candidates(model, coverage, alpha, epsilon);
        if rcl.is_empty() {
            let requirement = coverage.first_uncovered().unwrap_or_default();
            return Err(CoverError::Infeasible { requirement });
        }

        let chosen = rcl[rng.random_range(0..rcl.len())];
        solution.insert(chosen, model.cost(chosen));
        coverage.apply(model, chosen);
    }
    Ok(())
}
