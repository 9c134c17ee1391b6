//! Local search for improving feasible covers.
//!
//! Three exchange neighborhoods, applied in this fixed order:
//!
//! 1. Drop (1-for-0) — one ascending sweep removing redundant items
//! 2. Swap one-for-one — replace a selected item by a cheaper one, to a fixpoint
//! 3. Swap two-for-one — replace a selected pair by a cheaper item, to a fixpoint
//!
//! Each neighborhood runs once; earlier neighborhoods are not revisited after
//! a later one improves. Callers wanting full variable-neighborhood descent
//! loop [`improve`] until the cost stops decreasing.

mod descent;
mod drop;
mod moves;
mod swap_one;
mod swap_two;

pub use moves::{MoveSet, MoveStats};

use tracing::debug;

use crate::models::{Incidence, Solution};

use descent::Descent;

/// Improves a feasible cover with the enabled neighborhoods.
///
/// Coverage counts and cost are recomputed from `solution`'s items, so a
/// stale stored cost is harmless. Every move preserves coverage, and the
/// returned cost never exceeds the input cost.
///
/// # Examples
///
/// ```
/// use u_covering::models::{Incidence, Solution};
/// use u_covering::local_search::{improve, MoveSet};
///
/// // items: 0 {0,1} cost 3, 1 {0,1,2} cost 1, 2 {0,2} cost 1
/// let model = Incidence::from_requirements(
///     vec![3.0, 1.0, 1.0],
///     vec![vec![0, 1, 2], vec![0, 1], vec![1, 2]],
/// );
/// let initial = Solution::from_items(&model, [0, 1, 2]);
/// let improved = improve(&model, &initial, MoveSet::ALL);
/// assert!(model.is_cover(&improved));
/// assert!(improved.cost() <= initial.cost());
/// ```
pub fn improve(model: &Incidence, solution: &Solution, moves: MoveSet) -> Solution {
    improve_with_stats(model, solution, moves).0
}

/// Like [`improve`], also reporting how many moves each neighborhood applied.
pub fn improve_with_stats(
    model: &Incidence,
    solution: &Solution,
    moves: MoveSet,
) -> (Solution, MoveStats) {
    let mut descent = Descent::new(model, solution);
    let mut stats = MoveStats::default();
    let initial_cost = descent.solution.cost();

    if moves.contains(MoveSet::DROP) {
        stats.dropped = descent.drop_redundant();
        debug!(
            event = "neighborhood_end",
            neighborhood = "drop",
            moves = stats.dropped,
            cost = descent.solution.cost(),
        );
    }
    if moves.contains(MoveSet::SWAP_ONE_FOR_ONE) {
        stats.one_for_one = descent.swap_one_for_one();
        debug!(
            event = "neighborhood_end",
            neighborhood = "swap_one_for_one",
            moves = stats.one_for_one,
            cost = descent.solution.cost(),
        );
    }
    if moves.contains(MoveSet::SWAP_TWO_FOR_ONE) {
        stats.two_for_one = descent.swap_two_for_one();
        debug!(
            event = "neighborhood_end",
            neighborhood = "swap_two_for_one",
            moves = stats.two_for_one,
            cost = descent.solution.cost(),
        );
    }

    debug!(
        event = "local_search_end",
        initial_cost,
        cost = descent.solution.cost(),
        moves = stats.total(),
    );
    (descent.into_solution(), stats)
}
