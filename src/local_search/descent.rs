//! Working state shared by the exchange neighborhoods.

use crate::models::{Incidence, Solution};

/// A feasible solution under refinement together with its per-requirement
/// coverage counts.
pub(super) struct Descent<'a> {
    pub(super) model: &'a Incidence,
    pub(super) solution: Solution,
    pub(super) counts: Vec<usize>,
}

impl<'a> Descent<'a> {
    /// Recomputes counts and cost from the given selection.
    pub(super) fn new(model: &'a Incidence, initial: &Solution) -> Self {
        let solution = Solution::from_items(model, initial.items().iter().copied());
        let mut counts = vec![0; model.num_requirements()];
        for &i in solution.items() {
            for &j in model.item_requirements(i) {
                counts[j] += 1;
            }
        }
        Self {
            model,
            solution,
            counts,
        }
    }

    pub(super) fn into_solution(self) -> Solution {
        self.solution
    }

    /// First unselected item, by ascending index, cheaper than `budget` whose
    /// requirements include all of `critical`.
    pub(super) fn replacement(&self, budget: f64, critical: &[usize]) -> Option<usize> {
        (0..self.model.num_items()).find(|&i| {
            self.model.cost(i) < budget
                && !self.solution.contains(i)
                && includes(self.model.item_requirements(i), critical)
        })
    }

    /// Removes `outgoing` and selects `incoming`, keeping counts and cost
    /// in sync.
    pub(super) fn exchange(&mut self, outgoing: &[usize], incoming: usize) {
        for &out in outgoing {
            for &j in self.model.item_requirements(out) {
                self.counts[j] -= 1;
            }
            self.solution.remove(out, self.model.cost(out));
        }
        for &j in self.model.item_requirements(incoming) {
            self.counts[j] += 1;
        }
        self.solution.insert(incoming, self.model.cost(incoming));
    }
}

/// Returns `true` if sorted `sup` contains every element of sorted `sub`.
pub(super) fn includes(sup: &[usize], sub: &[usize]) -> bool {
    let mut rest = sup.iter();
    sub.iter().all(|x| rest.by_ref().any(|y| y == x))
}
