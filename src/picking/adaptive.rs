//! Adaptive-fill picking.
//!
//! Long tours make every carried unit of weight expensive, so the knapsack is
//! deliberately under-filled: the ratio greedy runs against a reduced target
//!
//! ```text
//! target = min(W, floor(W * fill_ratio * tour_factor(L)))
//! ```
//!
//! where `L` is the closed tour length and `tour_factor` comes from a
//! threshold ladder. The default ladder is tuned for the scale of the common
//! TTP benchmark instances.

use serde::{Deserialize, Serialize};

use crate::models::Instance;

use super::bounded_greedy_picking;

/// One rung of a [`TourFactorLadder`]: tours longer than `min_length` use `factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TourFactorStep {
    /// Exclusive lower bound on the tour length.
    pub min_length: f64,
    /// Capacity multiplier applied above `min_length`.
    pub factor: f64,
}

/// Maps a tour length to a capacity multiplier.
///
/// The step with the highest `min_length` below the tour length wins, in
/// whatever order the steps are listed; if none matches the factor is `1.0`.
///
/// # Examples
///
/// ```
/// use u_ttp::picking::TourFactorLadder;
///
/// let ladder = TourFactorLadder::default();
/// assert_eq!(ladder.factor(60_000.0), 0.6);
/// assert_eq!(ladder.factor(47_000.0), 0.7);
/// assert_eq!(ladder.factor(40_001.0), 0.8);
/// assert_eq!(ladder.factor(40_000.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourFactorLadder {
    /// Rungs, in any order.
    pub steps: Vec<TourFactorStep>,
}

impl TourFactorLadder {
    /// Creates a ladder from explicit steps.
    pub fn new(steps: Vec<TourFactorStep>) -> Self {
        Self { steps }
    }

    /// A ladder that never reduces the target.
    pub fn flat() -> Self {
        Self { steps: Vec::new() }
    }

    /// Capacity multiplier for a tour of the given length.
    pub fn factor(&self, tour_length: f64) -> f64 {
        self.steps
            .iter()
            .filter(|step| tour_length > step.min_length)
            .max_by(|a, b| a.min_length.total_cmp(&b.min_length))
            .map_or(1.0, |step| step.factor)
    }
}

impl Default for TourFactorLadder {
    fn default() -> Self {
        Self::new(vec![
            TourFactorStep {
                min_length: 50_000.0,
                factor: 0.6,
            },
            TourFactorStep {
                min_length: 45_000.0,
                factor: 0.7,
            },
            TourFactorStep {
                min_length: 40_000.0,
                factor: 0.8,
            },
        ])
    }
}

/// Builds a picking plan filled up to a tour-dependent fraction of capacity.
///
/// `fill_ratio` is expected in `(0, 1]`.
///
/// # Examples
///
/// ```
/// use u_ttp::models::{City, Instance, Item};
/// use u_ttp::picking::{adaptive_fill_picking, TourFactorLadder};
///
/// let cities = vec![City::new(0.0, 0.0), City::new(3.0, 4.0)];
/// let items = vec![Item::new(9, 3, 1), Item::new(8, 3, 1), Item::new(7, 3, 1)];
/// let instance = Instance::from_cities(cities, items, 10, 0.1, 1.0, 1.0).unwrap();
///
/// // target = floor(10 * 0.7) = 7: two items of weight 3
/// let picking = adaptive_fill_picking(&instance, &[0, 1], 0.7, &TourFactorLadder::default());
/// assert_eq!(picking, vec![true, true, false]);
/// ```
pub fn adaptive_fill_picking(
    instance: &Instance,
    tour: &[usize],
    fill_ratio: f64,
    ladder: &TourFactorLadder,
) -> Vec<bool> {
    let length = instance.distances().tour_length(tour);
    let capacity = instance.capacity();
    let scaled = (capacity as f64 * fill_ratio * ladder.factor(length)).floor();
    let target = if scaled.is_finite() && scaled >= 0.0 {
        (scaled as u64).min(capacity)
    } else {
        capacity
    };
    bounded_greedy_picking(instance, target)
}
