//! Drop (1-for-0) neighborhood.
//!
//! # Algorithm
//!
//! One sweep over the selected items in ascending index order. An item is
//! removed when every requirement it covers is also covered by another
//! selected item (`v[j] >= 2`). Counts only ever decrease during the sweep,
//! so an item kept early cannot become removable later; one sweep is
//! therefore already a fixpoint of this neighborhood.
//!
//! Items with negative cost are never removed, since dropping one raises
//! the total.
//!
//! # Complexity
//!
//! O(Σ |item_requirements(s)|) over the selected items.

use super::descent::Descent;

impl Descent<'_> {
    /// Runs one drop sweep. Returns the number of items removed.
    pub(super) fn drop_redundant(&mut self) -> usize {
        let mut dropped = 0;
        let mut pos = 0;

        while pos < self.solution.len() {
            let item = self.solution.items()[pos];
            let cost = self.model.cost(item);
            let reqs = self.model.item_requirements(item);

            if cost >= 0.0 && reqs.iter().all(|&j| self.counts[j] >= 2) {
                for &j in reqs {
                    self.counts[j] -= 1;
                }
                // the next item shifts into `pos`
                self.solution.remove(item, cost);
                dropped += 1;
            } else {
                pos += 1;
            }
        }

        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Incidence, Solution};

    fn three_items() -> Incidence {
        // item 0: {0,1} cost 1, item 1: {1,2} cost 1, item 2: {0,1,2} cost 3
        Incidence::from_requirements(
            vec![1.0, 1.0, 3.0],
            vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
        )
    }

    #[test]
    fn test_drop_sweeps_in_index_order() {
        let model = three_items();
        let initial = Solution::from_items(&model, [0, 1, 2]);
        let mut descent = Descent::new(&model, &initial);
        // item 0 is redundant first, then item 1; item 2 becomes critical
        assert_eq!(descent.drop_redundant(), 2);
        assert_eq!(descent.solution.items(), &[2]);
        assert_eq!(descent.counts, vec![1, 1, 1]);
        assert!((descent.solution.cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_drop_removes_expensive_item_when_listed_first() {
        // same sets, expensive item at index 0
        let model = Incidence::from_requirements(
            vec![3.0, 1.0, 1.0],
            vec![vec![0, 1], vec![0, 1, 2], vec![0, 2]],
        );
        let initial = Solution::from_items(&model, [0, 1, 2]);
        let mut descent = Descent::new(&model, &initial);
        assert_eq!(descent.drop_redundant(), 1);
        assert_eq!(descent.solution.items(), &[1, 2]);
        assert!((descent.solution.cost() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_drop_nothing_when_all_critical() {
        let model = three_items();
        let initial = Solution::from_items(&model, [0, 1]);
        let mut descent = Descent::new(&model, &initial);
        assert_eq!(descent.drop_redundant(), 0);
        assert_eq!(descent.solution.items(), &[0, 1]);
    }

    #[test]
    fn test_drop_chain_is_single_sweep_fixpoint() {
        // A={0,1}, B={1,2}, C={2}, D={0}. B starts out redundant, but once A
        // is dropped B alone holds requirement 1.
        let model = Incidence::from_items(
            vec![1.0, 1.0, 1.0, 1.0],
            vec![vec![0, 1], vec![1, 2], vec![2], vec![0]],
            3,
        );
        let initial = Solution::from_items(&model, [0, 1, 2, 3]);
        let mut descent = Descent::new(&model, &initial);
        // A goes, B is kept, C goes (B still holds requirement 2), D is kept
        assert_eq!(descent.drop_redundant(), 2);
        assert_eq!(descent.solution.items(), &[1, 3]);
        assert_eq!(descent.counts, vec![1, 1, 1]);

        // a second sweep finds nothing new
        assert_eq!(descent.drop_redundant(), 0);
        assert_eq!(descent.solution.items(), &[1, 3]);
    }

    #[test]
    fn test_drop_keeps_negative_cost_items() {
        let model = Incidence::from_requirements(vec![-1.0, 2.0], vec![vec![0, 1]]);
        let initial = Solution::from_items(&model, [0, 1]);
        let mut descent = Descent::new(&model, &initial);
        assert_eq!(descent.drop_redundant(), 1);
        assert_eq!(descent.solution.items(), &[0]);
        assert!((descent.solution.cost() + 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_drop_item_covering_nothing() {
        let model = Incidence::from_items(vec![1.0, 0.0], vec![vec![0], vec![]], 1);
        let initial = Solution::from_items(&model, [0, 1]);
        let mut descent = Descent::new(&model, &initial);
        assert_eq!(descent.drop_redundant(), 1);
        assert_eq!(descent.solution.items(), &[0]);
    }
}
