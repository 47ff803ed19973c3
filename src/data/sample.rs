//! Synthetic noisy-sine sample generation.
//!
//! Useful for demos and for exercising the full pipeline against a known
//! ground truth. Generation is seeded and therefore fully deterministic.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::SineParams;
use crate::error::FitError;
use crate::models::predict;

/// Recipe for a synthetic dataset.
#[derive(Debug, Clone, Copy)]
pub struct SampleSpec {
    /// Number of evenly spaced samples.
    pub n_points: usize,
    /// True underlying parameters.
    pub truth: SineParams,
    /// Sampled x interval.
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of additive Gaussian noise (0 disables noise).
    pub noise_sigma: f64,
    /// Seed for the noise generator.
    pub seed: u64,
}

/// A generated dataset plus the truth that produced it.
#[derive(Debug, Clone)]
pub struct SampleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub truth: SineParams,
}

/// Generate evenly spaced samples of `truth` with additive Gaussian noise.
pub fn generate_sine_sample(spec: &SampleSpec) -> Result<SampleData, FitError> {
    if spec.n_points < 2 {
        return Err(FitError::invalid_input("Sample count must be at least 2."));
    }
    if !(spec.x_min.is_finite() && spec.x_max.is_finite() && spec.x_max > spec.x_min) {
        return Err(FitError::invalid_input("Invalid x range for sample generation."));
    }
    if !(spec.noise_sigma.is_finite() && spec.noise_sigma >= 0.0) {
        return Err(FitError::invalid_input("Noise sigma must be finite and non-negative."));
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| FitError::invalid_input(format!("Noise distribution error: {e}")))?;

    let step = (spec.x_max - spec.x_min) / (spec.n_points - 1) as f64;
    let mut x = Vec::with_capacity(spec.n_points);
    let mut y = Vec::with_capacity(spec.n_points);

    for i in 0..spec.n_points {
        let xi = spec.x_min + i as f64 * step;
        let mut yi = predict(xi, &spec.truth);
        if spec.noise_sigma > 0.0 {
            yi += spec.noise_sigma * normal.sample(&mut rng);
        }
        x.push(xi);
        y.push(yi);
    }

    Ok(SampleData {
        x,
        y,
        truth: spec.truth,
    })
}
