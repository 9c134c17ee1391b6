//! Greedy repair of partial selections.
//!
//! Commits every seed item first, then completes the cover with the same
//! randomized threshold rule as [`grasp_construct`](super::grasp_construct),
//! restricted to the requirements the seed left uncovered. An empty seed
//! makes repair draw-for-draw identical to construction.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::models::{Incidence, Solution};

use super::coverage::{complete, Coverage};

/// Extends `seed` to a feasible cover at low extra cost.
///
/// Seed items are always kept. Duplicate seed entries are ignored. The
/// returned cost includes the seed items' costs.
///
/// # Errors
///
/// - [`CoverError::InvalidConfig`](crate::error::CoverError::InvalidConfig)
///   if `alpha` is outside `[0, 1]` or `epsilon` is not a positive finite number
/// - [`CoverError::Infeasible`](crate::error::CoverError::Infeasible) if a
///   requirement left uncovered by the seed has no covering item
///
/// # Panics
///
/// Panics if a seed index is `>= model.num_items()`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_covering::models::Incidence;
/// use u_covering::constructive::greedy_repair;
///
/// let model = Incidence::from_requirements(
///     vec![1.0, 1.0, 3.0],
///     vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
/// );
/// let mut rng = StdRng::seed_from_u64(42);
/// let sol = greedy_repair(&model, &[2], 1.0, 1e-9, &mut rng).unwrap();
/// assert_eq!(sol.items(), &[2]);
/// assert!((sol.cost() - 3.0).abs() < 1e-10);
/// ```
pub fn greedy_repair<R: Rng>(
    model: &Incidence,
    seed: &[usize],
    alpha: f64,
    epsilon: f64,
    rng: &mut R,
) -> Result<Solution> {
    let mut solution = Solution::empty(model.num_items());
    let mut coverage = Coverage::new(model);

    for &item in seed {
        if solution.contains(item) {
            continue;
        }
        solution.insert(item, model.cost(item));
        coverage.apply(model, item);
    }
    let seeded = solution.len();

    complete(model, &mut solution, &mut coverage, alpha, epsilon, rng)?;

    debug!(
        event = "repair_end",
        seed_items = seeded,
        added_items = solution.len() - seeded,
        cost = solution.cost(),
    );
    Ok(solution)
}
