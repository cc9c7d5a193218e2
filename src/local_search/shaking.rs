//! Shaking: random perturbation for Variable Neighborhood Search.

use rand::Rng;

use crate::models::Solution;

/// Applies `k` random pairwise swaps to tour positions `1..n`.
///
/// Swaps are always applied (the two positions may coincide) and the cached
/// evaluation is dropped; improving the result is left to local search.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::models::{is_permutation, Solution};
/// use u_ttp::local_search::shake;
///
/// let mut sol = Solution::new((0..8).collect(), vec![]);
/// shake(&mut sol, 3, &mut StdRng::seed_from_u64(1));
/// assert_eq!(sol.tour()[0], 0);
/// assert!(is_permutation(sol.tour(), 8));
/// ```
pub fn shake<R: Rng + ?Sized>(solution: &mut Solution, k: usize, rng: &mut R) {
    let n = solution.tour().len();
    if n < 2 {
        return;
    }
    let tour = solution.tour_mut();
    for _ in 0..k {
        let a = rng.random_range(1..n);
        let b = rng.random_range(1..n);
        tour.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shake_keeps_permutation() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut sol = Solution::new((0..12).collect(), vec![]);
        for k in 1..8 {
            shake(&mut sol, k, &mut rng);
            assert_eq!(sol.tour()[0], 0);
            assert!(is_permutation(sol.tour(), 12));
        }
    }

    #[test]
    fn test_shake_changes_tour() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sol = Solution::new((0..30).collect(), vec![]);
        shake(&mut sol, 10, &mut rng);
        assert_ne!(sol.tour(), (0..30).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_shake_tiny() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sol = Solution::new(vec![0], vec![]);
        shake(&mut sol, 5, &mut rng);
        assert_eq!(sol.tour(), &[0]);
        let mut sol = Solution::new(vec![0, 1], vec![]);
        shake(&mut sol, 5, &mut rng);
        assert_eq!(sol.tour(), &[0, 1]);
    }

    #[test]
    fn test_shake_invalidates_cache() {
        use crate::models::{City, Instance};
        let cities = vec![City::new(0.0, 0.0), City::new(1.0, 0.0), City::new(2.0, 0.0)];
        let inst = Instance::from_cities(cities, vec![], 10, 0.1, 1.0, 1.0).expect("valid");
        let mut sol = Solution::new(vec![0, 1, 2], vec![]);
        sol.evaluate(&inst);
        shake(&mut sol, 1, &mut StdRng::seed_from_u64(0));
        assert!(!sol.is_evaluated());
    }
}
