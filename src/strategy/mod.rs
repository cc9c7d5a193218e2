//! Named, seedable TTP strategies.
//!
//! A strategy composes a [`TourConstruction`](crate::constructive::TourConstruction),
//! a [`PickingConstruction`](crate::picking::PickingConstruction) and a
//! [`Driver`](crate::metaheuristics::Driver), and owns its random generator.
//!
//! - [`Heuristic`] — Object-safe `name` / `solve` interface
//! - [`Strategy`] — Composed strategy bound to an instance
//! - [`presets`] — The standard experiment line-up

pub mod composed;
pub mod presets;

pub use composed::{Heuristic, Strategy};
