//! # u-ttp
//!
//! Traveling Thief Problem (TTP) optimization library: a deterministic
//! objective evaluator, tour and picking construction heuristics, local
//! search operators, and LNS/VNS metaheuristic drivers composed into
//! named, seedable strategies.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Item, Instance, Solution)
//! - [`distance`] — Ceil-rounded Euclidean distance matrix
//! - [`evaluation`] — TTP objective evaluation (profit, weight, time)
//! - [`constructive`] — Tour construction (sequential, random, nearest neighbor)
//! - [`picking`] — Picking plan construction (greedy ratio, adaptive fill)
//! - [`local_search`] — Neighborhood operators (flip, 2-opt, Or-opt, shaking)
//! - [`lns`] — Destroy and cheapest-insertion repair primitives
//! - [`metaheuristics`] — Drivers (hill climbing, joint improvement, LNS, VNS)
//! - [`strategy`] — Heuristic trait and composed strategies
//! - [`io`] — TTP instance file loader
//! - [`config`] — TOML experiment configuration
//! - [`experiment`] — Repeated-run statistics and ranking

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod io;
pub mod lns;
pub mod local_search;
pub mod metaheuristics;
pub mod models;
pub mod picking;
pub mod strategy;
