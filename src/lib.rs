//! `sine-fit` library crate.
//!
//! Estimates the four parameters of a sinusoid (amplitude, frequency, phase,
//! offset) from noisy sampled data using a two-stage pipeline:
//!
//! - a stochastic global search (differential evolution, fixed seed)
//! - a deterministic local refinement (damped Gauss-Newton)
//!
//! The engine is a pure library: callers hand it two equal-length numeric
//! sequences and consume a structured [`domain::FitResult`]. Presentation
//! (plots, GUIs, scripting bridges) lives outside this crate.

pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;
pub mod report;
