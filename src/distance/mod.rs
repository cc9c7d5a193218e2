//! Distance matrix between cities.
//!
//! Provides a dense, ceil-rounded Euclidean distance matrix for TTP instances.

mod matrix;

pub use matrix::DistanceMatrix;
