//! The shared fit objective: sum of squared residuals.

use crate::data::Dataset;
use crate::domain::SineParams;
use crate::models::predict;

/// Sentinel cost substituted when the objective is not finite.
///
/// A large finite penalty keeps the optimizers' comparisons well-defined on
/// numerically degenerate candidates instead of propagating NaN/Inf.
pub const OBJECTIVE_PENALTY: f64 = 1e10;

/// Sum of squared residuals of the model over the dataset.
///
/// Non-finite outcomes (overflowed parameters, NaN inputs) are mapped to
/// [`OBJECTIVE_PENALTY`] so that candidate selection never has to compare
/// against NaN.
pub fn objective(dataset: &Dataset, params: &SineParams) -> f64 {
    let mut sse = 0.0;
    for (&xi, &yi) in dataset.x().iter().zip(dataset.y()) {
        let r = yi - predict(xi, params);
        sse += r * r;
    }
    if sse.is_finite() { sse } else { OBJECTIVE_PENALTY }
}
