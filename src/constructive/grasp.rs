//! Semi-greedy randomized construction (GRASP).
//!
//! # Algorithm
//!
//! While some requirement is uncovered, score every item that still covers
//! at least one uncovered requirement:
//!
//! ```text
//! e[i]    = u[i] / (1 + cost[i] - cost_min)
//! e_limit = e_min + alpha * (e_max - e_min)
//! RCL     = { i : u[i] > 0, e[i] + epsilon >= e_limit }
//! ```
//!
//! and select one RCL member uniformly at random. `alpha = 1` is greedy up to
//! ties, `alpha = 0` is a uniform choice among all useful items.
//!
//! # Complexity
//!
//! O(k · m) scoring work for a cover of k items over m items, plus the
//! residual updates bounded by the instance's total incidence size.
//!
//! # Reference
//!
//! Feo, T.A. & Resende, M.G.C. (1995). "Greedy Randomized Adaptive Search
//! Procedures", *Journal of Global Optimization* 6, 109-133.

use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::models::{Incidence, Solution};

use super::coverage::{complete, Coverage};

/// Builds a feasible cover from scratch by randomized greedy selection.
///
/// # Arguments
///
/// * `model` — Instance to cover
/// * `alpha` — RCL threshold mix in `[0, 1]`
/// * `epsilon` — Score tolerance for near-ties
/// * `rng` — Random source used for every RCL draw
///
/// # Errors
///
/// - [`CoverError::InvalidConfig`](crate::error::CoverError::InvalidConfig)
///   if `alpha` is outside `[0, 1]` or `epsilon` is not a positive finite number
/// - [`CoverError::Infeasible`](crate::error::CoverError::Infeasible) if some
///   requirement has no covering item
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_covering::models::Incidence;
/// use u_covering::constructive::grasp_construct;
///
/// let model = Incidence::from_requirements(
///     vec![1.0, 1.0, 3.0],
///     vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
/// );
/// let mut rng = StdRng::seed_from_u64(42);
/// let sol = grasp_construct(&model, 1.0, 1e-9, &mut rng).unwrap();
/// assert_eq!(sol.items(), &[0, 1]);
/// assert!((sol.cost() - 2.0).abs() < 1e-10);
/// ```
pub fn grasp_construct<R: Rng>(
    model: &Incidence,
    alpha: f64,
    epsilon: f64,
    rng: &mut R,
) -> Result<Solution> {
    let mut solution = Solution::empty(model.num_items());
    let mut coverage = Coverage::new(model);

    complete(model, &mut solution, &mut coverage, alpha, epsilon, rng)?;

    debug!(
        event = "construction_end",
        items = solution.len(),
        cost = solution.cost(),
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn three_items() -> Incidence {
        Incidence::from_requirements(
            vec![1.0, 1.0, 3.0],
            vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
        )
    }

    #[test]
    fn test_greedy_prefers_cheap_pair() {
        let model = three_items();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = grasp_construct(&model, 1.0, 1e-9, &mut rng).expect("feasible");
            assert_eq!(sol.items(), &[0, 1]);
            assert!((sol.cost() - 2.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_random_construction_is_a_cover() {
        let model = three_items();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sol = grasp_construct(&model, 0.0, 1e-9, &mut rng).expect("feasible");
            assert!(model.verify(&sol, 1e-9));
        }
    }

    #[test]
    fn test_alpha_zero_can_pick_expensive_item() {
        let model = three_items();
        let picked_two = (0..200).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            grasp_construct(&model, 0.0, 1e-9, &mut rng)
                .expect("feasible")
                .contains(2)
        });
        assert!(picked_two);
    }

    #[test]
    fn test_same_seed_same_solution() {
        let model = three_items();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let sa = grasp_construct(&model, 0.3, 1e-9, &mut a).expect("feasible");
        let sb = grasp_construct(&model, 0.3, 1e-9, &mut b).expect("feasible");
        assert_eq!(sa, sb);
    }

    #[test]
    fn test_empty_requirement_is_infeasible() {
        let model = Incidence::from_requirements(vec![1.0, 2.0], vec![vec![0], vec![], vec![1]]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = grasp_construct(&model, 0.5, 1e-9, &mut rng).unwrap_err();
        assert_eq!(err, CoverError::Infeasible { requirement: 1 });
    }

    #[test]
    fn test_out_of_range_alpha_is_rejected() {
        let model = three_items();
        let mut rng = StdRng::seed_from_u64(0);
        for alpha in [2.0, -0.5, f64::NAN] {
            let err = grasp_construct(&model, alpha, 1e-9, &mut rng).unwrap_err();
            assert!(matches!(err, CoverError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_bad_epsilon_is_rejected() {
        let model = three_items();
        let mut rng = StdRng::seed_from_u64(0);
        let err = grasp_construct(&model, 0.5, f64::NAN, &mut rng).unwrap_err();
        assert!(matches!(err, CoverError::InvalidConfig(_)));
    }

    #[test]
    fn test_no_requirements() {
        let model = Incidence::from_requirements(vec![1.0, 2.0], vec![]);
        let mut rng = StdRng::seed_from_u64(1);
        let sol = grasp_construct(&model, 0.5, 1e-9, &mut rng).expect("trivially feasible");
        assert!(sol.is_empty());
        assert_eq!(sol.cost(), 0.0);
    }

    #[test]
    fn test_zero_and_negative_costs() {
        let model = Incidence::from_requirements(
            vec![0.0, -2.0, 4.0],
            vec![vec![0, 2], vec![1, 2], vec![0, 1]],
        );
        let mut rng = StdRng::seed_from_u64(3);
        let sol = grasp_construct(&model, 0.9, 1e-9, &mut rng).expect("feasible");
        assert!(model.verify(&sol, 1e-9));
        assert!(sol.cost().is_finite());
    }
}
