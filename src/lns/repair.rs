//! Repair operator for LNS.
//!
//! Cheapest insertion on tour distance only: the TTP objective is recovered
//! afterwards by rebuilding the picking plan and running local search.

use crate::distance::DistanceMatrix;

/// Distance added by placing `city` between `prev` and `next`.
pub fn insertion_cost(distances: &DistanceMatrix, prev: usize, city: usize, next: usize) -> f64 {
    distances.get(prev, city) + distances.get(city, next) - distances.get(prev, next)
}

/// Reinserts `removed` cities one by one, in order, each at the position
/// that adds the least distance to the current partial tour.
///
/// Insertion points are every gap after position 0, including the closing
/// edge back to the first city; the first city stays in front. This is a
/// greedy heuristic: earlier insertions are never revisited.
///
/// # Examples
///
/// ```
/// use u_ttp::models::City;
/// use u_ttp::distance::DistanceMatrix;
/// use u_ttp::lns::cheapest_insertion;
///
/// let cities: Vec<City> = (0..5).map(|i| City::new(i as f64, 0.0)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = cheapest_insertion(vec![0, 1, 4], &[3, 2], &dm);
/// assert_eq!(tour, vec![0, 1, 2, 3, 4]);
/// ```
pub fn cheapest_insertion(
    mut partial: Vec<usize>,
    removed: &[usize],
    distances: &DistanceMatrix,
) -> Vec<usize> {
    for &city in removed {
        if partial.is_empty() {
            partial.push(city);
            continue;
        }

        let len = partial.len();
        let mut best_pos = 1;
        let mut best_cost = f64::INFINITY;

        for pos in 1..=len {
            let prev = partial[pos - 1];
            let next = partial[pos % len];
            let cost = insertion_cost(distances, prev, city, next);
            if cost < best_cost {
                best_cost = cost;
                best_pos = pos;
            }
        }

        partial.insert(best_pos, city);
    }

    partial
}
