//! Curve fitting pipeline.
//!
//! Responsibilities:
//!
//! - estimate a heuristic starting parameter vector from data statistics
//! - search a bounded parameter box globally (differential evolution)
//! - refine locally (damped Gauss-Newton, diagonal step)
//! - compute goodness-of-fit metrics and parameter error estimates
//! - orchestrate the stages into one `fit` entry point

pub mod cost;
pub mod estimate;
pub mod fitter;
pub mod global;
pub mod metrics;
pub mod refine;

pub use cost::*;
pub use estimate::*;
pub use fitter::*;
pub use global::*;
pub use metrics::*;
pub use refine::*;
