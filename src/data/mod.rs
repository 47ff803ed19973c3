//! Input data handling: validated datasets and synthetic sample generation.

pub mod dataset;
pub mod sample;

pub use dataset::*;
pub use sample::*;
