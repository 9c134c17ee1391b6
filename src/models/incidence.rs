//! Bipartite item/requirement incidence model.

use super::Solution;

/// A weighted set covering instance.
///
/// Stores item costs and the membership relation in both directions:
/// `covering_items(j)` lists the items able to satisfy requirement `j`, and
/// `item_requirements(i)` lists the requirements item `i` helps satisfy.
/// Both adjacency lists are sorted ascending and free of duplicates, and
/// `j ∈ item_requirements(i) ⇔ i ∈ covering_items(j)` always holds.
///
/// The model is read-only once built and can be shared across independent
/// trials.
///
/// # Examples
///
/// ```
/// use u_covering::models::Incidence;
///
/// // item 0 covers {0, 1}, item 1 covers {1, 2}, item 2 covers {0, 1, 2}
/// let model = Incidence::from_requirements(
///     vec![1.0, 1.0, 3.0],
///     vec![vec![0, 2], vec![0, 1, 2], vec![1, 2]],
/// );
/// assert_eq!(model.num_items(), 3);
/// assert_eq!(model.num_requirements(), 3);
/// assert_eq!(model.item_requirements(2), &[0, 1, 2]);
/// assert!(model.is_coverable());
/// ```
#[derive(Debug, Clone)]
pub struct Incidence {
    costs: Vec<f64>,
    covering: Vec<Vec<usize>>,
    satisfies: Vec<Vec<usize>>,
    min_cost: f64,
}

impl Incidence {
    /// Builds a model from per-requirement covering-item lists.
    ///
    /// `covering_items[j]` holds the items that satisfy requirement `j`.
    /// The item count is `costs.len()`.
    ///
    /// # Panics
    ///
    /// Panics if any listed item index is `>= costs.len()`.
    pub fn from_requirements(costs: Vec<f64>, covering_items: Vec<Vec<usize>>) -> Self {
        let m = costs.len();
        let mut covering = covering_items;
        for (j, items) in covering.iter_mut().enumerate() {
            items.sort_unstable();
            items.dedup();
            if let Some(&last) = items.last() {
                assert!(last < m, "requirement {j} lists item {last}, but only {m} items exist");
            }
        }

        let mut satisfies = vec![Vec::new(); m];
        for (j, items) in covering.iter().enumerate() {
            for &i in items {
                satisfies[i].push(j);
            }
        }

        Self::assemble(costs, covering, satisfies)
    }

    /// Builds a model from per-item requirement lists.
    ///
    /// `item_requirements[i]` holds the requirements satisfied by item `i`.
    ///
    /// # Panics
    ///
    /// Panics if `item_requirements.len() != costs.len()` or if any listed
    /// requirement index is `>= num_requirements`.
    pub fn from_items(
        costs: Vec<f64>,
        item_requirements: Vec<Vec<usize>>,
        num_requirements: usize,
    ) -> Self {
        assert_eq!(
            costs.len(),
            item_requirements.len(),
            "one requirement list per item is needed"
        );
        let mut satisfies = item_requirements;
        for (i, reqs) in satisfies.iter_mut().enumerate() {
            reqs.sort_unstable();
            reqs.dedup();
            if let Some(&last) = reqs.last() {
                assert!(
                    last < num_requirements,
                    "item {i} lists requirement {last}, but only {num_requirements} requirements exist"
                );
            }
        }

        let mut covering = vec![Vec::new(); num_requirements];
        for (i, reqs) in satisfies.iter().enumerate() {
            for &j in reqs {
                covering[j].push(i);
            }
        }

        Self::assemble(costs, covering, satisfies)
    }

    fn assemble(costs: Vec<f64>, covering: Vec<Vec<usize>>, satisfies: Vec<Vec<usize>>) -> Self {
        let min_cost = costs.iter().copied().fold(f64::INFINITY, f64::min);
        Self {
            costs,
            covering,
            satisfies,
            min_cost,
        }
    }

    /// Number of items (`m`).
    pub fn num_items(&self) -> usize {
        self.costs.len()
    }

    /// Number of requirements (`n`).
    pub fn num_requirements(&self) -> usize {
        self.covering.len()
    }

    /// Cost of item `i`.
    pub fn cost(&self, item: usize) -> f64 {
        self.costs[item]
    }

    /// All item costs, indexed by item.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Smallest item cost, or `+∞` when there are no items.
    pub fn min_cost(&self) -> f64 {
        self.min_cost
    }

    /// Items able to satisfy requirement `j`, ascending.
    pub fn covering_items(&self, requirement: usize) -> &[usize] {
        &self.covering[requirement]
    }

    /// Requirements satisfied by item `i`, ascending.
    pub fn item_requirements(&self, item: usize) -> &[usize] {
        &self.satisfies[item]
    }

    /// Returns `true` if every requirement has at least one covering item.
    pub fn is_coverable(&self) -> bool {
        self.covering.iter().all(|items| !items.is_empty())
    }

    /// Requirements with an empty covering-item set.
    pub fn uncoverable_requirements(&self) -> Vec<usize> {
        self.covering
            .iter()
            .enumerate()
            .filter(|(_, items)| items.is_empty())
            .map(|(j, _)| j)
            .collect()
    }

    /// Total cost of the given items.
    pub fn cost_of(&self, items: &[usize]) -> f64 {
        items.iter().map(|&i| self.costs[i]).sum()
    }

    /// Returns `true` if the solution covers every requirement.
    ///
    /// Reads the same item list as [`cost_of`](Self::cost_of) and the
    /// local search.
    ///
    /// # Panics
    ///
    /// Panics if a selected item is `>= self.num_items()`.
    pub fn is_cover(&self, solution: &Solution) -> bool {
        let mut covered = vec![false; self.num_requirements()];
        for &i in solution.items() {
            for &j in &self.satisfies[i] {
                covered[j] = true;
            }
        }
        covered.into_iter().all(|c| c)
    }

    /// Checks coverage and that the stored cost matches the items' costs
    /// within `epsilon`.
    pub fn verify(&self, solution: &Solution, epsilon: f64) -> bool {
        let diff = self.cost_of(solution.items()) - solution.cost();
        diff.abs() <= epsilon && self.is_cover(solution)
    }
}
