//! Local search operators for improving TTP solutions.
//!
//! Every operator works on a [`Solution`](crate::models::Solution) in place,
//! accepts only strictly improving moves, and leaves the tour, picking plan
//! and cached evaluation exactly as they were when a move is rejected.
//!
//! - [`flip`] — Picking plan bit flips (first-improvement sweep and best-of-round)
//! - [`two_opt`] — Tour segment reversal (full and windowed)
//! - [`or_opt`] — Tour segment relocation
//! - [`shaking`] — Random pairwise swaps for diversification

pub mod flip;
pub mod or_opt;
pub mod shaking;
pub mod two_opt;

pub use flip::{best_flip_improve, flip_sweep, hill_climb_picking, DEFAULT_HILL_CLIMB_ROUNDS};
pub use or_opt::{or_opt_improve, relocate_segment};
pub use shaking::shake;
pub use two_opt::{reverse_segment, two_opt_improve, two_opt_windowed};
