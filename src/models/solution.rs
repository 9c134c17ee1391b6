//! Selection of items with a running cost.

use serde::{Deserialize, Serialize};

use super::Incidence;

/// A set of selected items and their total cost.
///
/// Membership is an O(1) flag lookup; the selected items are also kept as
/// an ascending index list so that neighborhoods can sweep them in order
/// while inserting and removing.
///
/// # Examples
///
/// ```
/// use u_covering::models::{Incidence, Solution};
///
/// let model = Incidence::from_requirements(vec![1.0, 2.0, 4.0], vec![vec![0, 1, 2]]);
/// let sol = Solution::from_items(&model, [2, 0, 2]);
/// assert_eq!(sol.items(), &[0, 2]);
/// assert!(sol.contains(2));
/// assert!((sol.cost() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SolutionRecord", into = "SolutionRecord")]
pub struct Solution {
    selected: Vec<bool>,
    items: Vec<usize>,
    cost: f64,
}

/// Serialized form: the item range, the selected items and the stored cost.
/// Membership flags are rebuilt from `items` on load.
#[derive(Serialize, Deserialize)]
struct SolutionRecord {
    num_items: usize,
    items: Vec<usize>,
    cost: f64,
}

impl From<Solution> for SolutionRecord {
    fn from(sol: Solution) -> Self {
        Self {
            num_items: sol.selected.len(),
            items: sol.items,
            cost: sol.cost,
        }
    }
}

impl TryFrom<SolutionRecord> for Solution {
    type Error = String;

    fn try_from(record: SolutionRecord) -> Result<Self, Self::Error> {
        let mut selected = vec![false; record.num_items];
        for &i in &record.items {
            match selected.get_mut(i) {
                Some(flag) => *flag = true,
                None => {
                    return Err(format!(
                        "item {i} out of range for {} items",
                        record.num_items
                    ))
                }
            }
        }
        let items = selected
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(|(i, _)| i)
            .collect();
        Ok(Self {
            selected,
            items,
            cost: record.cost,
        })
    }
}

impl Solution {
    /// Creates an empty selection over `num_items` items.
    pub fn empty(num_items: usize) -> Self {
        Self {
            selected: vec![false; num_items],
            items: Vec::new(),
            cost: 0.0,
        }
    }

    /// Creates a selection from item indices; duplicates are ignored.
    ///
    /// # Panics
    ///
    /// Panics if an index is `>= model.num_items()`.
    pub fn from_items<I>(model: &Incidence, items: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut sol = Self::empty(model.num_items());
        for i in items {
            if !sol.contains(i) {
                sol.insert(i, model.cost(i));
            }
        }
        sol
    }

    /// Returns `true` if item `i` is selected.
    pub fn contains(&self, item: usize) -> bool {
        self.selected.get(item).copied().unwrap_or(false)
    }

    /// Selected items in ascending order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Total cost of the selected items.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items this selection ranges over.
    pub fn num_items(&self) -> usize {
        self.selected.len()
    }

    /// Selects `item`, adding `cost` to the total. No-op if already selected.
    pub(crate) fn insert(&mut self, item: usize, cost: f64) {
        if self.selected[item] {
            return;
        }
        self.selected[item] = true;
        let pos = self.items.partition_point(|&x| x < item);
        self.items.insert(pos, item);
        self.cost += cost;
    }

    /// Deselects `item`, subtracting `cost`. No-op if not selected.
    pub(crate) fn remove(&mut self, item: usize, cost: f64) {
        if !self.selected[item] {
            return;
        }
        self.selected[item] = false;
        if let Ok(pos) = self.items.binary_search(&item) {
            self.items.remove(pos);
        }
        self.cost -= cost;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let sol = Solution::empty(4);
        assert!(sol.is_empty());
        assert_eq!(sol.len(), 0);
        assert_eq!(sol.num_items(), 4);
        assert_eq!(sol.cost(), 0.0);
        assert!(!sol.contains(0));
        assert!(!sol.contains(10));
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut sol = Solution::empty(6);
        sol.insert(4, 1.0);
        sol.insert(1, 2.0);
        sol.insert(5, 0.5);
        sol.insert(1, 2.0);
        assert_eq!(sol.items(), &[1, 4, 5]);
        assert!((sol.cost() - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_remove() {
        let mut sol = Solution::empty(3);
        sol.insert(0, 1.0);
        sol.insert(2, 3.0);
        sol.remove(0, 1.0);
        sol.remove(1, 7.0);
        assert_eq!(sol.items(), &[2]);
        assert!(!sol.contains(0));
        assert!((sol.cost() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_serialize_shape() {
        let model = Incidence::from_requirements(vec![1.0, 2.0], vec![vec![0, 1]]);
        let sol = Solution::from_items(&model, [1]);
        let json = serde_json::to_value(&sol).expect("serializable");
        assert_eq!(json["items"], serde_json::json!([1]));
        assert_eq!(json["cost"], serde_json::json!(2.0));
        assert_eq!(json["num_items"], serde_json::json!(2));
        assert!(json.get("selected").is_none());
    }

    #[test]
    fn test_deserialize_rebuilds_flags() {
        let sol: Solution =
            serde_json::from_str(r#"{"num_items":4,"items":[3,1,3],"cost":2.5}"#)
                .expect("valid record");
        assert_eq!(sol.items(), &[1, 3]);
        assert!(sol.contains(1));
        assert!(sol.contains(3));
        assert!(!sol.contains(0));
        assert_eq!(sol.num_items(), 4);
        assert!((sol.cost() - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_deserialize_ignores_stray_flags() {
        // only item 0 covers requirement 0
        let model = Incidence::from_requirements(vec![1.0, 1.0], vec![vec![0]]);
        let sol: Solution = serde_json::from_str(
            r#"{"num_items":2,"selected":[true,false],"items":[1],"cost":1.0}"#,
        )
        .expect("valid record");
        assert!(!sol.contains(0));
        assert!(!model.is_cover(&sol));
        assert!(!model.verify(&sol, 1e-9));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_item() {
        let res: Result<Solution, _> =
            serde_json::from_str(r#"{"num_items":2,"items":[0,5],"cost":1.0}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_json_reload_equals_original() {
        let model = Incidence::from_requirements(vec![1.0, 2.0, 4.0], vec![vec![0, 2]]);
        let sol = Solution::from_items(&model, [2, 0]);
        let json = serde_json::to_string(&sol).expect("serializable");
        let back: Solution = serde_json::from_str(&json).expect("valid record");
        assert_eq!(back, sol);
    }
}
