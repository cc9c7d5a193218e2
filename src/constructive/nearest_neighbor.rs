//! Nearest-neighbor tour construction.
//!
//! Builds the tour greedily: starting from city 0, always move to the nearest
//! unvisited city.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP; tours are typically
//! 15-25% above optimal, but it gives every TTP driver a fast baseline.

use crate::distance::DistanceMatrix;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties are broken by the lowest city index.
///
/// # Examples
///
/// ```
/// use u_ttp::models::City;
/// use u_ttp::distance::DistanceMatrix;
/// use u_ttp::constructive::nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(10.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(nearest_neighbor_tour(&dm), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut unvisited: Vec<usize> = (1..n).collect();
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    tour.push(current);

    // Candidates stay in ascending order, so ties go to the lowest index.
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&city| city != next);
        tour.push(next);
        current = next;
    }

    tour
}
