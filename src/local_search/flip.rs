//! Picking plan bit-flip neighborhoods.
//!
//! - [`flip_sweep`] toggles every item once in index order, keeping each
//!   toggle that keeps the solution valid and improves the objective.
//! - [`best_flip_improve`] scans all toggles, commits only the single best
//!   one, and repeats. Used inside joint tour/picking improvement, where the
//!   order dependence of a first-improvement sweep biases the result.
//!
//! Flipping never touches the tour, so the tour's permutation check is done
//! once up front and each candidate only needs the knapsack check.

use tracing::trace;

use crate::models::{is_permutation, Instance, Solution};

/// Default round cap for [`hill_climb_picking`].
pub const DEFAULT_HILL_CLIMB_ROUNDS: usize = 100;

/// One first-improvement sweep over all items.
///
/// Returns `true` if at least one flip was accepted.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item, Solution};
/// use u_ttp::local_search::flip_sweep;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let items = vec![Item::new(20, 5, 2), Item::new(1, 10, 1)];
/// let instance = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).unwrap();
///
/// let mut sol = Solution::new(vec![0, 1, 2], vec![false, false]);
/// assert!(flip_sweep(&instance, &mut sol));
/// assert_eq!(sol.picking(), &[true, false]);
/// ```
pub fn flip_sweep(instance: &Instance, solution: &mut Solution) -> bool {
    if !is_flippable(instance, solution) {
        return false;
    }

    let capacity = instance.capacity();
    let mut improved = false;

    for item in 0..solution.picking().len() {
        let before = solution.ensure_evaluated(instance);
        solution.toggle_item(item);
        let after = solution.evaluate(instance);

        if after.weight <= capacity && after.objective > before.objective {
            trace!(event = "flip_accept", item, objective = after.objective);
            improved = true;
        } else {
            solution.toggle_item(item);
            solution.restore_evaluation(Some(before));
        }
    }

    improved
}

/// Repeats [`flip_sweep`] until a sweep accepts nothing or `max_rounds`
/// sweeps have run.
///
/// Returns the number of sweeps that improved the solution.
pub fn hill_climb_picking(instance: &Instance, solution: &mut Solution, max_rounds: usize) -> usize {
    let mut rounds = 0;
    while rounds < max_rounds && flip_sweep(instance, solution) {
        rounds += 1;
    }
    rounds
}

/// Best-of-round flipping: commit the single most improving flip per round,
/// for at most `max_flips` rounds.
///
/// Returns `true` if at least one flip was committed. A solution that is not
/// valid on entry is re-evaluated and left unchanged.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item, Solution};
/// use u_ttp::local_search::best_flip_improve;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(0.0, 3.0), City::new(4.0, 0.0)];
/// let items = vec![Item::new(5, 5, 2), Item::new(20, 5, 2)];
/// let instance = Instance::from_cities(cities, items, 5, 0.1, 1.0, 0.1).unwrap();
///
/// // Only one item fits; the more profitable one is chosen regardless of order.
/// let mut sol = Solution::new(vec![0, 1, 2], vec![false, false]);
/// assert!(best_flip_improve(&instance, &mut sol, 10));
/// assert_eq!(sol.picking(), &[false, true]);
/// ```
pub fn best_flip_improve(instance: &Instance, solution: &mut Solution, max_flips: usize) -> bool {
    let mut current = solution.ensure_evaluated(instance);
    if !solution.is_valid(instance) {
        return false;
    }

    let capacity = instance.capacity();
    let mut improved = false;

    for _ in 0..max_flips {
        let mut best: Option<(usize, f64)> = None;

        for item in 0..solution.picking().len() {
            solution.toggle_item(item);
            let candidate = solution.evaluate(instance);
            if candidate.weight <= capacity && candidate.objective > current.objective {
                let gain = candidate.objective - current.objective;
                if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                    best = Some((item, gain));
                }
            }
            solution.toggle_item(item);
            solution.restore_evaluation(Some(current));
        }

        match best {
            Some((item, gain)) => {
                solution.toggle_item(item);
                current = solution.evaluate(instance);
                trace!(event = "best_flip_accept", item, gain, objective = current.objective);
                improved = true;
            }
            None => break,
        }
    }

    improved
}

fn is_flippable(instance: &Instance, solution: &Solution) -> bool {
    solution.picking().len() == instance.num_items()
        && is_permutation(solution.tour(), instance.dimension())
}
