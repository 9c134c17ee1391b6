//! Two-for-one swap neighborhood.
//!
//! # Algorithm
//!
//! For every unordered pair `(a, b)` of selected items, the requirements
//! that would become uncovered if both were removed are those with
//! `v[j] - [j ∈ S(a)] - [j ∈ S(b)] <= 0`. An unselected item cheaper than
//! `cost[a] + cost[b]` covering all of them replaces the pair. Scans restart
//! after every swap and stop after a full scan without one.
//!
//! # Complexity
//!
//! O(|x|² · m · d) per scan.

use tracing::trace;

use super::descent::Descent;

impl Descent<'_> {
    /// Applies two-for-one swaps until none improves. Returns the swap count.
    pub(super) fn swap_two_for_one(&mut self) -> usize {
        let mut swaps = 0;
        while let Some((first, second, incoming)) = self.find_two_for_one() {
            trace!(event = "swap_two_for_one", first, second, incoming);
            self.exchange(&[first, second], incoming);
            swaps += 1;
        }
        swaps
    }

    fn find_two_for_one(&self) -> Option<(usize, usize, usize)> {
        let items = self.solution.items();
        for (pos, &a) in items.iter().enumerate() {
            for &b in &items[pos + 1..] {
                let critical = self.pair_critical(a, b);
                let budget = self.model.cost(a) + self.model.cost(b);
                if let Some(i) = self.replacement(budget, &critical) {
                    return Some((a, b, i));
                }
            }
        }
        None
    }

    /// Requirements left uncovered if both `a` and `b` were removed,
    /// ascending.
    fn pair_critical(&self, a: usize, b: usize) -> Vec<usize> {
        let ra = self.model.item_requirements(a);
        let rb = self.model.item_requirements(b);
        let mut critical = Vec::new();
        let (mut x, mut y) = (0, 0);

        while x < ra.len() || y < rb.len() {
            let (j, held) = match (ra.get(x), rb.get(y)) {
                (Some(&ja), Some(&jb)) if ja == jb => {
                    x += 1;
                    y += 1;
                    (ja, 2)
                }
                (Some(&ja), Some(&jb)) if ja < jb => {
                    x += 1;
                    (ja, 1)
                }
                (Some(_), Some(&jb)) => {
                    y += 1;
                    (jb, 1)
                }
                (Some(&ja), None) => {
                    x += 1;
                    (ja, 1)
                }
                (None, Some(&jb)) => {
                    y += 1;
                    (jb, 1)
                }
                (None, None) => break,
            };
            if self.counts[j] <= held {
                critical.push(j);
            }
        }

        critical
    }
}
