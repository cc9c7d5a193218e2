//! Sequential and random tours.

use rand::seq::SliceRandom;
use rand::Rng;

/// Returns the identity tour `0, 1, …, n-1`.
///
/// # Examples
///
/// ```
/// use u_ttp::constructive::sequential_tour;
///
/// assert_eq!(sequential_tour(4), vec![0, 1, 2, 3]);
/// assert!(sequential_tour(0).is_empty());
/// ```
pub fn sequential_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Returns a tour starting at city 0 with the remaining cities uniformly shuffled.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::constructive::random_tour;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let tour = random_tour(6, &mut rng);
/// assert_eq!(tour[0], 0);
/// assert_eq!(tour.len(), 6);
/// ```
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = sequential_tour(n);
    if n > 2 {
        tour[1..].shuffle(rng);
    }
    tour
}
