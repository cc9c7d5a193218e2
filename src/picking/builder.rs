//! Configurable picking construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Instance;

use super::{adaptive_fill_picking, greedy_picking, profit_picking, TourFactorLadder};

/// Selects the picking builder used by a strategy.
///
/// Builders receive the current tour so that tour-aware variants
/// ([`PickingConstruction::AdaptiveFill`]) can adapt to it.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item};
/// use u_ttp::picking::PickingConstruction;
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let items = vec![Item::new(9, 3, 1), Item::new(8, 3, 1), Item::new(7, 3, 1)];
/// let instance = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).unwrap();
///
/// assert_eq!(PickingConstruction::Greedy.build(&instance, &[0, 1]), vec![true, true, true]);
/// assert_eq!(PickingConstruction::adaptive(0.7).build(&instance, &[0, 1]), vec![true, true, false]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PickingConstruction {
    /// Pick nothing.
    Empty,
    /// Profit/weight ratio greedy up to full capacity.
    #[default]
    Greedy,
    /// Highest profit first up to full capacity.
    ByProfit,
    /// Ratio greedy up to a tour-length-dependent fraction of capacity.
    AdaptiveFill {
        /// Fraction of capacity to fill, in `(0, 1]`.
        fill_ratio: f64,
        /// Tour-length thresholds scaling the target further.
        #[serde(default)]
        ladder: TourFactorLadder,
    },
}

impl PickingConstruction {
    /// Adaptive fill with the default ladder.
    pub fn adaptive(fill_ratio: f64) -> Self {
        Self::AdaptiveFill {
            fill_ratio,
            ladder: TourFactorLadder::default(),
        }
    }

    /// Builds a picking plan for the given tour.
    pub fn build(&self, instance: &Instance, tour: &[usize]) -> Vec<bool> {
        match self {
            Self::Empty => vec![false; instance.num_items()],
            Self::Greedy => greedy_picking(instance),
            Self::ByProfit => profit_picking(instance),
            Self::AdaptiveFill { fill_ratio, ladder } => {
                adaptive_fill_picking(instance, tour, *fill_ratio, ladder)
            }
        }
    }
}

impl fmt::Display for PickingConstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No Items"),
            Self::Greedy => write!(f, "Greedy Picking"),
            Self::ByProfit => write!(f, "High Profit Picking"),
            Self::AdaptiveFill { fill_ratio, .. } => {
                write!(f, "Adaptive Picking {:.0}%", fill_ratio * 100.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Item};

    #[test]
    fn test_empty() {
        let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
        let inst = Instance::from_cities(cities, vec![Item::new(1, 1, 1); 3], 10, 0.1, 1.0, 1.0)
            .expect("valid");
        assert_eq!(PickingConstruction::Empty.build(&inst, &[0, 1]), vec![false; 3]);
    }

    #[test]
    fn test_display() {
        assert_eq!(PickingConstruction::adaptive(0.7).to_string(), "Adaptive Picking 70%");
        assert_eq!(PickingConstruction::Greedy.to_string(), "Greedy Picking");
    }

    #[test]
    fn test_deserialize_default_ladder() {
        let p: PickingConstruction =
            toml::from_str("type = \"adaptive_fill\"\nfill_ratio = 0.75").expect("valid toml");
        assert_eq!(p, PickingConstruction::adaptive(0.75));
    }
}
