//! Large Neighborhood Search primitives for TTP tours.
//!
//! - [`destroy`] — Removes random cities from a tour
//! - [`repair`] — Reinserts removed cities by cheapest insertion
//!
//! # Reference
//!
//! Shaw, P. (1998). "Using Constraint Programming and Local Search Methods
//! to Solve Vehicle Routing Problems", *CP-98*, LNCS 1520, 417-431.

pub mod destroy;
pub mod repair;

pub use destroy::{random_removal, PartialTour};
pub use repair::{cheapest_insertion, insertion_cost};
