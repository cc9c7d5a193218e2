//! Picking plan construction.
//!
//! - [`greedy_picking`] — Profit/weight ratio greedy knapsack fill
//! - [`bounded_greedy_picking`] — Ratio greedy under a reduced weight target
//! - [`profit_picking`] — Highest absolute profit first
//! - [`adaptive_fill_picking`] — Ratio greedy with a tour-length-dependent target
//! - [`PickingConstruction`] — Configurable choice among the above

mod adaptive;
mod builder;
mod greedy;

pub use adaptive::{adaptive_fill_picking, TourFactorLadder, TourFactorStep};
pub use builder::PickingConstruction;
pub use greedy::{bounded_greedy_picking, greedy_picking, profit_picking, ratio_order};
