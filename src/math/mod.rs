//! Mathematical utilities: basic sample statistics.

pub mod stats;

pub use stats::*;
