//! 2-opt improvement on the TTP objective.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < j`, reverse the segment `tour[i..=j]`
//! and re-evaluate the full TTP objective. Unlike the pure TSP move, the
//! change cannot be computed from four edges: reversing a segment changes
//! where items are collected and therefore the speed on every later edge.
//!
//! Improving reversals are kept immediately and the scan continues from the
//! same `(i, j)` position (first improvement, no restart). Position 0 is never
//! touched so the tour keeps starting at city 0.
//!
//! # Complexity
//!
//! O(n²) candidate moves per pass (O(n·w) with a window of `w`), each costing
//! one O(n + m) evaluation.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::trace;

use crate::models::{Instance, Solution};

/// Reverses `tour[i..=j]` in place.
///
/// Applying the same reversal twice restores the original tour.
///
/// # Examples
///
/// ```
/// use u_ttp::local_search::reverse_segment;
///
/// let mut tour = vec![0, 1, 2, 3, 4];
/// reverse_segment(&mut tour, 1, 3);
/// assert_eq!(tour, vec![0, 3, 2, 1, 4]);
/// reverse_segment(&mut tour, 1, 3);
/// assert_eq!(tour, vec![0, 1, 2, 3, 4]);
/// ```
pub fn reverse_segment(tour: &mut [usize], i: usize, j: usize) {
    tour[i..=j].reverse();
}

/// One full 2-opt pass over all position pairs.
///
/// Returns `true` if at least one reversal was accepted.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Solution};
/// use u_ttp::local_search::two_opt_improve;
///
/// // Four corners of a square, visited in a crossing order.
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 10.0),
///     City::new(10.0, 0.0),
///     City::new(0.0, 10.0),
/// ];
/// let instance = Instance::from_cities(cities, vec![], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let mut sol = Solution::new(vec![0, 1, 2, 3], vec![]);
/// assert!(two_opt_improve(&instance, &mut sol));
/// assert_eq!(sol.objective(), -40.0);
/// ```
pub fn two_opt_improve(instance: &Instance, solution: &mut Solution) -> bool {
    two_opt_pass(instance, solution, None)
}

/// One 2-opt pass restricted to `j <= i + window`.
///
/// Returns `true` if at least one reversal was accepted.
pub fn two_opt_windowed(instance: &Instance, solution: &mut Solution, window: usize) -> bool {
    two_opt_pass(instance, solution, Some(window))
}

fn two_opt_pass(instance: &Instance, solution: &mut Solution, window: Option<usize>) -> bool {
    let n = solution.tour().len();
    if n < 3 {
        return false;
    }

    let mut current = solution.ensure_evaluated(instance);
    let mut improved = false;

    for i in 1..n - 1 {
        let j_max = window.map_or(n - 1, |w| (i + w).min(n - 1));
        for j in i + 1..=j_max {
            reverse_segment(solution.tour_mut(), i, j);
            let candidate = solution.evaluate(instance);

            if candidate.objective > current.objective {
                trace!(
                    event = "two_opt_accept",
                    i,
                    j,
                    objective = candidate.objective,
                );
                current = candidate;
                improved = true;
            } else {
                reverse_segment(solution.tour_mut(), i, j);
                solution.restore_evaluation(Some(current));
            }
        }
    }

    improved
}
