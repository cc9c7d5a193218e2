//! Probabilistic nearest-neighbor tour construction.
//!
//! # Algorithm
//!
//! At each step, every unvisited city `c` gets the weight
//!
//! ```text
//! w(c) = exp(-d(current, c) / T)
//! ```
//!
//! and the next city is drawn from the normalized distribution by inverse-CDF
//! sampling. Low temperatures `T` approach the greedy nearest neighbor; high
//! temperatures approach a uniformly random tour.
//!
//! Distances are shifted by the nearest candidate's distance before
//! exponentiation. The shift cancels in the normalization and keeps large
//! distances from underflowing every weight to zero.

use rand::Rng;

use crate::distance::DistanceMatrix;

/// Constructs a tour by softmax-sampling the next city.
///
/// `temperature` must be positive.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::models::City;
/// use u_ttp::distance::DistanceMatrix;
/// use u_ttp::constructive::probabilistic_nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(200.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let mut rng = StdRng::seed_from_u64(3);
///
/// // At a very low temperature the nearest city always wins.
/// let tour = probabilistic_nearest_neighbor_tour(&dm, 0.01, &mut rng);
/// assert_eq!(tour, vec![0, 1, 2]);
/// ```
pub fn probabilistic_nearest_neighbor_tour<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    temperature: f64,
    rng: &mut R,
) -> Vec<usize> {
    let n = distances.size();
    if n == 0 {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    let mut current = 0;
    visited[current] = true;
    tour.push(current);

    let mut candidates = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for _ in 1..n {
        candidates.clear();
        candidates.extend((0..n).filter(|&c| !visited[c]));

        let nearest = candidates
            .iter()
            .map(|&c| distances.get(current, c))
            .fold(f64::INFINITY, f64::min);

        weights.clear();
        weights.extend(
            candidates
                .iter()
                .map(|&c| (-(distances.get(current, c) - nearest) / temperature).exp()),
        );
        let total: f64 = weights.iter().sum();

        let target = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut selected = None;
        for (k, &w) in weights.iter().enumerate() {
            cumulative += w;
            if target < cumulative {
                selected = Some(k);
                break;
            }
        }
        // Rounding can leave the target just past the final sum.
        let selected = selected
            .or_else(|| weights.iter().rposition(|&w| w > 0.0))
            .unwrap_or(0);

        let next = candidates[selected];
        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}
