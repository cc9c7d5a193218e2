//! Metaheuristic drivers for TTP.
//!
//! - [`joint`] — Round-based joint tour and picking improvement
//! - [`large_neighborhood`] — Large Neighborhood Search (destroy, repair, accept)
//! - [`variable_neighborhood`] — Variable Neighborhood Search (shake, improve)
//! - [`driver`] — Serializable selector over all improvement drivers
//!
//! All drivers are deterministic for a fixed instance and random generator
//! state. LNS and VNS never return a solution worse than their start.

pub mod driver;
pub mod joint;
pub mod large_neighborhood;
pub mod variable_neighborhood;

pub use driver::Driver;
pub use joint::{JointImprovement, PickingRefresh};
pub use large_neighborhood::{large_neighborhood_search, LnsParams};
pub use variable_neighborhood::{variable_neighborhood_search, VnsParams};
