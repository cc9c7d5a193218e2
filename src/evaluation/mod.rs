//! Objective evaluation for TTP solutions.
//!
//! - [`evaluate`] — Profit, weight, travel time and objective of a solution
//! - [`picked_totals`] — Profit and weight of a picking plan alone

mod evaluator;

pub use evaluator::{evaluate, picked_totals, INFEASIBLE_OBJECTIVE, INFEASIBLE_TIME};
