//! The sinusoid model and its analytic derivatives.

pub mod model;

pub use model::*;
