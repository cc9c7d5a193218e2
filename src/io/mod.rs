//! Instance loading.
//!
//! - [`ttp`] — Reader for the standard TTP benchmark text format

pub mod ttp;

pub use ttp::{load_ttp, parse_ttp, ParseError};
