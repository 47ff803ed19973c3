//! Small statistics helpers shared by the estimator and the metrics stage.
//!
//! All routines are defined for empty input (returning 0) so callers do not
//! need to special-case degenerate slices; the dataset validator guarantees
//! at least 4 points on the main fitting path anyway.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by `n`, not `n - 1`); 0 for an
/// empty slice.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Minimum and maximum of a slice; `(0, 0)` for an empty slice.
///
/// NaN values are ignored by the comparisons, consistent with the engine's
/// contract that malformed numeric values degrade results rather than panic.
pub fn min_max(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let mut lo = values[0];
    let mut hi = values[0];
    for &v in &values[1..] {
        if v < lo {
            lo = v;
        }
        if v > hi {
            hi = v;
        }
    }
    (lo, hi)
}
