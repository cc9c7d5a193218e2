//! Domain model types for the Traveling Thief Problem.
//!
//! Provides the core abstractions: cities with coordinates, items with profit
//! and weight placed at cities, the immutable problem instance, and a mutable
//! solution pairing a tour with a picking plan.

mod city;
mod instance;
mod item;
mod solution;

pub use city::City;
pub use instance::Instance;
pub use item::Item;
pub use solution::{is_permutation, Evaluation, Solution};
