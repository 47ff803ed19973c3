//! Goodness-of-fit metrics and parameter error estimates.

use crate::data::Dataset;
use crate::domain::{FitQuality, PARAM_COUNT, ParamErrors, SineParams};
use crate::math::mean;
use crate::models::{jacobian, predict_series};

/// Compute fit quality and per-parameter standard errors at the final
/// parameters.
///
/// - `R² = 1 − SSres/SStot`, defined as 0 when `SStot` is 0 (constant data)
/// - `RMSE = sqrt(SSres / N)`
/// - `AIC = N·ln(SSres/N) + 2k` with `k = 4`
/// - standard error of slot `i`: `sqrt(SSres/(N−4) / Σ J[:,i]²)`, with a 0
///   fallback whenever the denominator vanishes or the value is not finite
pub fn calculate_metrics(dataset: &Dataset, params: &SineParams) -> (FitQuality, ParamErrors) {
    let y = dataset.y();
    let n = y.len();
    let y_pred = predict_series(dataset.x(), params);

    let y_mean = mean(y);
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&yi, &pi) in y.iter().zip(&y_pred) {
        let r = yi - pi;
        ss_res += r * r;
        let d = yi - y_mean;
        ss_tot += d * d;
    }

    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };
    let rmse = (ss_res / n as f64).sqrt();
    let aic = n as f64 * (ss_res / n as f64).ln() + 2.0 * PARAM_COUNT as f64;

    let quality = FitQuality {
        sse: ss_res,
        rmse,
        r_squared,
        aic,
        n,
    };

    (quality, parameter_errors(dataset, params, ss_res))
}

/// Per-parameter standard errors from the final Jacobian's column norms.
///
/// Degenerate columns (all-zero derivatives) and non-finite outcomes yield 0
/// for that slot rather than an error.
fn parameter_errors(dataset: &Dataset, params: &SineParams, ss_res: f64) -> ParamErrors {
    let n = dataset.len();
    let jac = jacobian(dataset.x(), params);

    let mut errors = [0.0; PARAM_COUNT];
    for (i, err) in errors.iter_mut().enumerate() {
        let sum_sq = jac.column(i).norm_squared();
        if sum_sq > 0.0 {
            let se = (ss_res / (n - PARAM_COUNT) as f64 / sum_sq).sqrt();
            if se.is_finite() {
                *err = se;
            }
        }
    }
    ParamErrors::from_array(errors)
}
