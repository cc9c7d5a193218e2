//! Configurable tour construction.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Instance;

use super::{nearest_neighbor_tour, probabilistic_nearest_neighbor_tour, random_tour, sequential_tour};

/// Selects the tour builder used by a strategy.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_ttp::models::{City, Instance};
/// use u_ttp::constructive::TourConstruction;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(5.0, 0.0), City::new(1.0, 0.0)];
/// let instance = Instance::from_cities(cities, vec![], 10, 0.1, 1.0, 1.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let tour = TourConstruction::NearestNeighbor.build(&instance, &mut rng);
/// assert_eq!(tour, vec![0, 2, 1]);
/// assert_eq!(TourConstruction::Sequential.build(&instance, &mut rng), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TourConstruction {
    /// Identity order.
    Sequential,
    /// City 0 followed by a uniform shuffle of the rest.
    Random,
    /// Greedy nearest unvisited city.
    #[default]
    NearestNeighbor,
    /// Softmax-sampled nearest neighbor.
    ProbabilisticNearestNeighbor {
        /// Sampling temperature, must be positive.
        temperature: f64,
    },
}

impl TourConstruction {
    /// Builds a tour for the given instance.
    pub fn build<R: Rng + ?Sized>(&self, instance: &Instance, rng: &mut R) -> Vec<usize> {
        match self {
            Self::Sequential => sequential_tour(instance.dimension()),
            Self::Random => random_tour(instance.dimension(), rng),
            Self::NearestNeighbor => nearest_neighbor_tour(instance.distances()),
            Self::ProbabilisticNearestNeighbor { temperature } => {
                probabilistic_nearest_neighbor_tour(instance.distances(), *temperature, rng)
            }
        }
    }
}

impl fmt::Display for TourConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => write!(f, "Sequential Tour"),
            Self::Random => write!(f, "Random Tour"),
            Self::NearestNeighbor => write!(f, "Nearest Neighbor"),
            Self::ProbabilisticNearestNeighbor { temperature } => {
                write!(f, "Probabilistic NN (T={temperature})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_permutation, City};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn instance() -> Instance {
        let cities = (0..8)
            .map(|i| City::new((i * 7 % 5) as f64 * 10.0, (i * 3 % 4) as f64 * 10.0))
            .collect();
        Instance::from_cities(cities, vec![], 10, 0.1, 1.0, 1.0).expect("valid")
    }

    #[test]
    fn test_every_builder_yields_permutation() {
        let inst = instance();
        let mut rng = StdRng::seed_from_u64(4);
        for builder in [
            TourConstruction::Sequential,
            TourConstruction::Random,
            TourConstruction::NearestNeighbor,
            TourConstruction::ProbabilisticNearestNeighbor { temperature: 0.5 },
        ] {
            let tour = builder.build(&inst, &mut rng);
            assert_eq!(tour[0], 0, "{builder}");
            assert!(is_permutation(&tour, inst.dimension()), "{builder}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(TourConstruction::NearestNeighbor.to_string(), "Nearest Neighbor");
        assert_eq!(
            TourConstruction::ProbabilisticNearestNeighbor { temperature: 0.5 }.to_string(),
            "Probabilistic NN (T=0.5)"
        );
    }
}
