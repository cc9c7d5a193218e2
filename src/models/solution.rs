//! Solution and evaluation types.

use crate::evaluation;

use super::Instance;

/// Metrics of an evaluated (tour, picking plan) pair.
///
/// Produced by [`evaluation::evaluate`]. For an over-capacity picking plan the
/// `time` and `objective` fields hold the infeasibility sentinels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Total profit of the picked items.
    pub profit: u64,
    /// Total weight of the picked items.
    pub weight: u64,
    /// Travel time around the tour.
    pub time: f64,
    /// `profit - time * renting_ratio`.
    pub objective: f64,
}

/// A TTP solution: a tour over all cities plus a picking plan over all items.
///
/// The cached [`Evaluation`] is only valid right after [`Solution::evaluate`];
/// every mutating accessor drops it, and [`Solution::objective`] reports
/// `-inf` for a stale solution so it never wins a comparison.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item, Solution};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let instance = Instance::from_cities(cities, vec![Item::new(20, 5, 2)], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let mut sol = Solution::new(vec![0, 1, 2], vec![true]);
/// assert!(!sol.is_evaluated());
/// sol.evaluate(&instance);
/// assert!((sol.objective() - 4.727272).abs() < 1e-4);
/// assert!(sol.is_valid(&instance));
///
/// sol.toggle_item(0);
/// assert!(!sol.is_evaluated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    tour: Vec<usize>,
    picking: Vec<bool>,
    evaluation: Option<Evaluation>,
}

impl Solution {
    /// Creates an unevaluated solution.
    pub fn new(tour: Vec<usize>, picking: Vec<bool>) -> Self {
        Self {
            tour,
            picking,
            evaluation: None,
        }
    }

    /// The visiting order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// The picking plan, one flag per item.
    pub fn picking(&self) -> &[bool] {
        &self.picking
    }

    /// Mutable tour access. Invalidates the cached evaluation.
    pub fn tour_mut(&mut self) -> &mut Vec<usize> {
        self.evaluation = None;
        &mut self.tour
    }

    /// Mutable picking access. Invalidates the cached evaluation.
    pub fn picking_mut(&mut self) -> &mut Vec<bool> {
        self.evaluation = None;
        &mut self.picking
    }

    /// Replaces the tour. Invalidates the cached evaluation.
    pub fn set_tour(&mut self, tour: Vec<usize>) {
        self.evaluation = None;
        self.tour = tour;
    }

    /// Replaces the picking plan. Invalidates the cached evaluation.
    pub fn set_picking(&mut self, picking: Vec<bool>) {
        self.evaluation = None;
        self.picking = picking;
    }

    /// Flips the inclusion of one item. Invalidates the cached evaluation.
    pub fn toggle_item(&mut self, item: usize) {
        self.evaluation = None;
        self.picking[item] = !self.picking[item];
    }

    /// Recomputes and caches the metrics of this solution.
    pub fn evaluate(&mut self, instance: &Instance) -> Evaluation {
        let eval = evaluation::evaluate(instance, &self.tour, &self.picking);
        self.evaluation = Some(eval);
        eval
    }

    /// Evaluates only if the cache is stale.
    pub fn ensure_evaluated(&mut self, instance: &Instance) -> Evaluation {
        match self.evaluation {
            Some(eval) => eval,
            None => self.evaluate(instance),
        }
    }

    /// The cached metrics, if the solution has not changed since evaluation.
    pub fn evaluation(&self) -> Option<Evaluation> {
        self.evaluation
    }

    /// Returns `true` if the cached metrics are current.
    pub fn is_evaluated(&self) -> bool {
        self.evaluation.is_some()
    }

    /// Cached objective, or `-inf` when the solution is not evaluated.
    pub fn objective(&self) -> f64 {
        self.evaluation.map_or(f64::NEG_INFINITY, |e| e.objective)
    }

    /// Restores a previously cached evaluation after undoing a move.
    ///
    /// The caller must have restored `tour` and `picking` to exactly the
    /// state `evaluation` was computed for.
    pub(crate) fn restore_evaluation(&mut self, evaluation: Option<Evaluation>) {
        self.evaluation = evaluation;
    }

    /// Installs a tour whose metrics were already computed for the current
    /// picking plan.
    pub(crate) fn replace_tour(&mut self, tour: Vec<usize>, evaluation: Evaluation) {
        self.tour = tour;
        self.evaluation = Some(evaluation);
    }

    /// Total weight of the picked items.
    pub fn picked_weight(&self, instance: &Instance) -> u64 {
        match self.evaluation {
            Some(eval) => eval.weight,
            None => evaluation::picked_totals(instance, &self.picking).1,
        }
    }

    /// Returns `true` if the picking plan fits the knapsack and the tour
    /// visits every city exactly once.
    pub fn is_valid(&self, instance: &Instance) -> bool {
        self.picking.len() == instance.num_items()
            && self.picked_weight(instance) <= instance.capacity()
            && is_permutation(&self.tour, instance.dimension())
    }
}

/// Returns `true` if `tour` contains each of `0..n` exactly once.
///
/// # Examples
///
/// ```
/// use u_ttp::models::is_permutation;
///
/// assert!(is_permutation(&[0, 2, 1], 3));
/// assert!(!is_permutation(&[0, 1, 1], 3));
/// assert!(!is_permutation(&[0, 1], 3));
/// ```
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Item};

    fn tiny() -> Instance {
        let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
        Instance::from_cities(cities, vec![Item::new(20, 5, 2), Item::new(1, 8, 1)], 10, 0.1, 1.0, 1.0)
            .expect("valid")
    }

    #[test]
    fn test_solution_default() {
        let sol = Solution::default();
        assert!(sol.tour().is_empty());
        assert!(!sol.is_evaluated());
        assert_eq!(sol.objective(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let inst = tiny();
        let mut sol = Solution::new(vec![0, 1, 2], vec![true, false]);
        sol.evaluate(&inst);
        assert!(sol.is_evaluated());

        sol.tour_mut().swap(1, 2);
        assert!(!sol.is_evaluated());

        sol.evaluate(&inst);
        sol.picking_mut()[1] = true;
        assert!(!sol.is_evaluated());

        sol.evaluate(&inst);
        sol.set_tour(vec![0, 1, 2]);
        assert!(!sol.is_evaluated());
    }

    #[test]
    fn test_ensure_evaluated_reuses_cache() {
        let inst = tiny();
        let mut sol = Solution::new(vec![0, 1, 2], vec![true, false]);
        let first = sol.ensure_evaluated(&inst);
        let second = sol.ensure_evaluated(&inst);
        assert_eq!(first, second);
    }

    #[test]
    fn test_is_valid_capacity() {
        let inst = tiny();
        let sol = Solution::new(vec![0, 1, 2], vec![true, true]);
        // 5 + 8 > 10
        assert!(!sol.is_valid(&inst));
        let sol = Solution::new(vec![0, 1, 2], vec![true, false]);
        assert!(sol.is_valid(&inst));
    }

    #[test]
    fn test_is_valid_rejects_duplicate_city() {
        let inst = tiny();
        let sol = Solution::new(vec![0, 1, 1], vec![false, false]);
        assert!(!sol.is_valid(&inst));
        let sol = Solution::new(vec![0, 1], vec![false, false]);
        assert!(!sol.is_valid(&inst));
    }

    #[test]
    fn test_is_valid_picking_length() {
        let inst = tiny();
        let sol = Solution::new(vec![0, 1, 2], vec![false]);
        assert!(!sol.is_valid(&inst));
    }

    #[test]
    fn test_is_permutation_out_of_range() {
        assert!(!is_permutation(&[0, 3, 1], 3));
        assert!(is_permutation(&[], 0));
    }
}
