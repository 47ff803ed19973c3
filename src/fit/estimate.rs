//! Initial parameter estimation from data statistics.
//!
//! The estimate is a heuristic seed, not a contract: the global optimizer
//! searches a bounded box regardless, but a decent frequency guess makes the
//! closed-form phase regression meaningful.
//!
//! - offset: mean of `y`
//! - amplitude: `2 × stddev(y)`
//! - frequency: zero-crossing count of the detrended signal
//! - phase: closed-form least squares on `y ≈ a·sin(f·x) + b·cos(f·x)`

use std::f64::consts::PI;

use crate::data::Dataset;
use crate::domain::SineParams;

/// Regularizer added to regression denominators to keep them non-zero on
/// degenerate data.
const DENOM_EPS: f64 = 1e-12;

/// Derive a plausible starting parameter vector from the dataset.
pub fn estimate_initial_params(dataset: &Dataset) -> SineParams {
    let stats = dataset.stats();
    let amplitude = 2.0 * stats.y_std;
    let frequency = estimate_frequency(dataset);
    let phase = estimate_phase(dataset, frequency);
    SineParams::new(amplitude, frequency, phase, stats.y_mean)
}

/// Estimate the angular frequency by counting zero crossings of `y - mean(y)`.
///
/// Each full cycle produces two crossings, so `k` crossings over an x-span
/// `R` give `f ≈ π·k / R`. With no crossings (non-oscillatory or severely
/// under-sampled data) we fall back to assuming exactly one cycle over the
/// span: `2π / R`, or 1.0 when the span is not positive.
pub fn estimate_frequency(dataset: &Dataset) -> f64 {
    let y = dataset.y();
    let y_mean = crate::math::mean(y);

    let mut crossings = 0usize;
    let mut last_positive = (y[0] - y_mean) > 0.0;
    for &yi in &y[1..] {
        let current_positive = (yi - y_mean) > 0.0;
        if current_positive != last_positive {
            crossings += 1;
        }
        last_positive = current_positive;
    }

    let x_span = dataset.x_span_sampled();
    if crossings > 0 {
        let f = PI * crossings as f64 / x_span;
        if f.is_finite() {
            return f;
        }
    }

    if x_span > 0.0 { 2.0 * PI / x_span } else { 1.0 }
}

/// Estimate the phase with the frequency fixed, via a closed-form fit of
/// `y ≈ a·sin(f·x) + b·cos(f·x)`.
///
/// The sin/cos coefficients are solved independently (the full normal
/// equations are simplified by assuming the two regressors are orthogonal),
/// with a small epsilon in the denominators. The phase is `atan2(b, a)`; a
/// non-finite outcome falls back to 0 silently.
pub fn estimate_phase(dataset: &Dataset, frequency: f64) -> f64 {
    let x = dataset.x();
    let y = dataset.y();
    let n = x.len() as f64;

    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    let mut y_sum = 0.0;
    let mut sin_y = 0.0;
    let mut cos_y = 0.0;
    let mut sin_sin = 0.0;
    let mut cos_cos = 0.0;

    for (&xi, &yi) in x.iter().zip(y) {
        let s = (frequency * xi).sin();
        let c = (frequency * xi).cos();
        sin_sum += s;
        cos_sum += c;
        y_sum += yi;
        sin_y += s * yi;
        cos_y += c * yi;
        sin_sin += s * s;
        cos_cos += c * c;
    }

    let sin_coeff = (sin_y - sin_sum * y_sum / n) / (sin_sin - sin_sum * sin_sum / n + DENOM_EPS);
    let cos_coeff = (cos_y - cos_sum * y_sum / n) / (cos_cos - cos_sum * cos_sum / n + DENOM_EPS);

    let phase = cos_coeff.atan2(sin_coeff);
    if phase.is_finite() { phase } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::predict_series;

    fn sampled(truth: &SineParams, n: usize, x_max: f64) -> Dataset {
        let x: Vec<f64> = (0..n).map(|i| i as f64 * x_max / (n - 1) as f64).collect();
        let y = predict_series(&x, truth);
        Dataset::new(x, y).unwrap()
    }

    #[test]
    fn frequency_from_zero_crossings_is_close() {
        let truth = SineParams::new(2.0, 3.0, 0.5, 1.0);
        let ds = sampled(&truth, 200, 2.0 * PI);
        let f = estimate_frequency(&ds);
        // Crossing counting is coarse; within ~20% is enough for a seed.
        assert!((f - 3.0).abs() / 3.0 < 0.2, "estimated {f}");
    }

    #[test]
    fn frequency_falls_back_to_one_cycle_on_constant_data() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y = vec![5.0; 10];
        let ds = Dataset::new(x, y).unwrap();
        let f = estimate_frequency(&ds);
        assert!((f - 2.0 * PI / 9.0).abs() < 1e-12);
    }

    #[test]
    fn frequency_falls_back_to_unity_on_zero_span() {
        let ds = Dataset::new(vec![1.0; 5], vec![2.0; 5]).unwrap();
        assert_eq!(estimate_frequency(&ds), 1.0);
    }

    #[test]
    fn phase_recovers_known_shift() {
        // y = sin(2x + 0.8) = a·sin(2x) + b·cos(2x) with atan2(b, a) = 0.8.
        let truth = SineParams::new(1.0, 2.0, 0.8, 0.0);
        let ds = sampled(&truth, 400, 4.0 * PI);
        let phase = estimate_phase(&ds, 2.0);
        assert!((phase - 0.8).abs() < 0.05, "estimated {phase}");
    }

    #[test]
    fn phase_is_zero_on_degenerate_regression() {
        // Constant y zeroes both regression numerators; the epsilon keeps
        // the denominators finite and atan2(0, 0) lands on the 0 fallback.
        let ds = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0; 4]).unwrap();
        let phase = estimate_phase(&ds, 1.0);
        assert_eq!(phase, 0.0);
    }

    #[test]
    fn initial_params_seed_is_reasonable() {
        let truth = SineParams::new(2.0, 3.0, 0.5, 1.0);
        let ds = sampled(&truth, 200, 2.0 * PI);
        let seed = estimate_initial_params(&ds);
        // Offset is the mean; amplitude 2σ of a sine is ~1.41·A.
        assert!((seed.offset - 1.0).abs() < 0.1);
        assert!(seed.amplitude > 1.0 && seed.amplitude < 4.0);
        assert!(seed.frequency > 0.0);
    }
}
