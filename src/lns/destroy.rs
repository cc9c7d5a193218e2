//! Destroy operator for LNS.

use rand::Rng;

/// A tour with some cities taken out.
///
/// `removed` keeps the order in which cities were removed; repair reinserts
/// them in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialTour {
    /// Remaining cities, still starting at the original first city.
    pub partial: Vec<usize>,
    /// Removed cities in removal order.
    pub removed: Vec<usize>,
}

/// Removes up to `k` uniformly random cities, never the one at position 0.
///
/// Simple but effective baseline operator that ensures diversity in the
/// search process. Stops early once only the starting city is left.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::lns::random_removal;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let destroyed = random_removal(&[0, 1, 2, 3, 4], 2, &mut rng);
/// assert_eq!(destroyed.removed.len(), 2);
/// assert_eq!(destroyed.partial.len(), 3);
/// assert_eq!(destroyed.partial[0], 0);
/// ```
pub fn random_removal<R: Rng + ?Sized>(tour: &[usize], k: usize, rng: &mut R) -> PartialTour {
    let mut partial = tour.to_vec();
    let mut removed = Vec::with_capacity(k.min(tour.len()));

    for _ in 0..k {
        if partial.len() <= 1 {
            break;
        }
        let idx = rng.random_range(1..partial.len());
        removed.push(partial.remove(idx));
    }

    PartialTour { partial, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_removal_preserves_all_cities() {
        let tour: Vec<usize> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let destroyed = random_removal(&tour, 4, &mut rng);
        assert_eq!(destroyed.removed.len(), 4);
        let mut all: Vec<usize> = destroyed
            .partial
            .iter()
            .chain(destroyed.removed.iter())
            .copied()
            .collect();
        all.sort_unstable();
        assert_eq!(all, tour);
        assert_eq!(destroyed.partial[0], 0);
        assert!(!destroyed.removed.contains(&0));
    }

    #[test]
    fn test_random_removal_keeps_relative_order() {
        let tour = vec![0, 5, 3, 8, 1, 7];
        let mut rng = StdRng::seed_from_u64(9);
        let destroyed = random_removal(&tour, 2, &mut rng);
        let positions: Vec<usize> = destroyed
            .partial
            .iter()
            .map(|c| tour.iter().position(|t| t == c).expect("present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_removal_larger_than_tour() {
        let mut rng = StdRng::seed_from_u64(1);
        let destroyed = random_removal(&[0, 1, 2], 10, &mut rng);
        assert_eq!(destroyed.partial, vec![0]);
        assert_eq!(destroyed.removed.len(), 2);
    }

    #[test]
    fn test_removal_empty_tour() {
        let mut rng = StdRng::seed_from_u64(1);
        let destroyed = random_removal(&[], 3, &mut rng);
        assert!(destroyed.partial.is_empty());
        assert!(destroyed.removed.is_empty());
    }
}
