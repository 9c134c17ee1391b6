//! One-for-one swap neighborhood.
//!
//! # Algorithm
//!
//! For each selected item `s` (ascending), collect its critical
//! requirements, those with `v[j] <= 1`. Any unselected item cheaper than
//! `s` that covers all of them can replace `s` without losing coverage.
//! The first such swap found is applied and the scan restarts from the
//! first selected item; the neighborhood stops after a full scan without a
//! swap (first improvement).
//!
//! # Complexity
//!
//! O(|x| · m · d) per scan, where d bounds the requirement list length.

use tracing::trace;

use super::descent::Descent;

impl Descent<'_> {
    /// Applies one-for-one swaps until none improves. Returns the swap count.
    pub(super) fn swap_one_for_one(&mut self) -> usize {
        let mut swaps = 0;
        while let Some((outgoing, incoming)) = self.find_one_for_one() {
            trace!(event = "swap_one_for_one", outgoing, incoming);
            self.exchange(&[outgoing], incoming);
            swaps += 1;
        }
        swaps
    }

    fn find_one_for_one(&self) -> Option<(usize, usize)> {
        for &s in self.solution.items() {
            let critical: Vec<usize> = self
                .model
                .item_requirements(s)
                .iter()
                .copied()
                .filter(|&j| self.counts[j] <= 1)
                .collect();

            if let Some(i) = self.replacement(self.model.cost(s), &critical) {
                return Some((s, i));
            }
        }
        None
    }
}
