//! Error types for instance construction.
//!
//! Search code never fails: infeasible solutions are signalled through the
//! evaluator's sentinel objective. Errors only arise at the boundary where an
//! [`Instance`](crate::models::Instance) is assembled from external data.

use thiserror::Error;

/// Rejected instance data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// An item refers to a city outside `0..dimension`.
    #[error("item {item} is located at city {city}, but the instance has {dimension} cities")]
    ItemCityOutOfRange {
        /// Item index.
        item: usize,
        /// Offending city index.
        city: usize,
        /// Number of cities.
        dimension: usize,
    },

    /// `min_speed` is greater than `max_speed`.
    #[error("min speed {min} exceeds max speed {max}")]
    SpeedBounds {
        /// Minimum speed.
        min: f64,
        /// Maximum speed.
        max: f64,
    },

    /// A speed bound is negative or not finite.
    #[error("speed bound {0} must be finite and non-negative")]
    InvalidSpeed(f64),

    /// The renting ratio is negative or not finite.
    #[error("renting ratio {0} must be finite and non-negative")]
    InvalidRentingRatio(f64),
}
