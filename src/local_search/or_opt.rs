//! Or-opt improvement on the TTP objective.
//!
//! # Algorithm
//!
//! For each segment length `k` in `1..=max_segment` and each segment start
//! `i >= 1`, remove `tour[i..i+k]` and try reinserting it at every other
//! non-overlapping position `j`. The first improving relocation for a start
//! is applied and the search moves on to the next start; the remaining
//! insertion points of that start are not tried. This early exit changes
//! which local optimum is reached, so it is part of the operator's contract.
//!
//! Segment starts and insertion points range over `1..n-k`; position 0 is
//! never moved.
//!
//! # Complexity
//!
//! O(k·n²) candidate moves per pass, each costing one O(n + m) evaluation.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use tracing::trace;

use crate::evaluation::evaluate;
use crate::models::{Instance, Solution};

/// Returns a copy of `tour` with the segment `[start, start+len)` moved.
///
/// `target` is a position in the original tour; when it lies after the
/// segment, the insertion index is shifted left by `len` to account for the
/// removal.
///
/// # Examples
///
/// ```
/// use u_ttp::local_search::relocate_segment;
///
/// let tour = vec![0, 1, 2, 3, 4, 5];
/// assert_eq!(relocate_segment(&tour, 1, 2, 4), vec![0, 3, 1, 2, 4, 5]);
/// assert_eq!(relocate_segment(&tour, 3, 2, 1), vec![0, 3, 4, 1, 2, 5]);
/// ```
pub fn relocate_segment(tour: &[usize], start: usize, len: usize, target: usize) -> Vec<usize> {
    let mut relocated = tour.to_vec();
    let segment: Vec<usize> = relocated.drain(start..start + len).collect();
    let insert_at = if target > start { target - len } else { target };
    relocated.splice(insert_at..insert_at, segment);
    relocated
}

/// One Or-opt pass with segments of length `1..=max_segment`.
///
/// Returns `true` if at least one relocation was accepted.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Solution};
/// use u_ttp::local_search::or_opt_improve;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
/// ];
/// let instance = Instance::from_cities(cities, vec![], 10, 0.1, 1.0, 1.0).unwrap();
///
/// let mut sol = Solution::new(vec![0, 1, 2, 3], vec![]);
/// assert!(or_opt_improve(&instance, &mut sol, 2));
/// assert_eq!(sol.objective(), -6.0);
/// ```
pub fn or_opt_improve(instance: &Instance, solution: &mut Solution, max_segment: usize) -> bool {
    let mut improved = false;

    for seg_len in 1..=max_segment {
        let n = solution.tour().len();
        if n < seg_len + 2 {
            break;
        }

        for start in 1..n - seg_len {
            let current = solution.ensure_evaluated(instance);

            for target in 1..n - seg_len {
                if target >= start && target < start + seg_len {
                    continue;
                }

                let candidate = relocate_segment(solution.tour(), start, seg_len, target);
                let eval = evaluate(instance, &candidate, solution.picking());
                if eval.objective > current.objective {
                    trace!(
                        event = "or_opt_accept",
                        start,
                        seg_len,
                        target,
                        objective = eval.objective,
                    );
                    solution.replace_tour(candidate, eval);
                    improved = true;
                    break;
                }
            }
        }
    }

    improved
}
