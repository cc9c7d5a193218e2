//! Tour construction heuristics.
//!
//! Every builder fixes city 0 as the first city of the tour.
//!
//! - [`sequential_tour`] — Identity order, O(n)
//! - [`random_tour`] — Uniform shuffle of cities 1..n, O(n)
//! - [`nearest_neighbor_tour`] — Greedy nearest unvisited city, O(n²)
//! - [`probabilistic_nearest_neighbor_tour`] — Softmax-sampled neighbor, O(n²)
//! - [`TourConstruction`] — Configurable choice among the above

mod builder;
mod nearest_neighbor;
mod probabilistic;
mod sequential;

pub use builder::TourConstruction;
pub use nearest_neighbor::nearest_neighbor_tour;
pub use probabilistic::probabilistic_nearest_neighbor_tour;
pub use sequential::{random_tour, sequential_tour};
