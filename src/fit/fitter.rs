//! Fit orchestration: the public entry point of the engine.
//!
//! Sequences the pipeline stages in order:
//!
//! initial estimate -> bounds derivation -> global search (DE) ->
//! local refinement -> metrics -> dense curve sampling
//!
//! Data flows strictly forward; the dataset is the only shared state and is
//! immutable for the fitter's lifetime. The whole pipeline is synchronous
//! and single-threaded, so worst-case latency is bounded by dataset size ×
//! the fixed iteration budgets.

use std::f64::consts::PI;
use std::time::Instant;

use crate::data::{Dataset, DatasetStats};
use crate::domain::{FitConfig, FitResult, FittedCurve, Interval, ParamBounds, SineParams};
use crate::error::FitError;
use crate::fit::estimate::estimate_initial_params;
use crate::fit::global::DifferentialEvolution;
use crate::fit::metrics::calculate_metrics;
use crate::fit::refine::refine;
use crate::models::predict;

/// Sine-fitting engine bound to one validated dataset.
pub struct SineFitter {
    dataset: Dataset,
}

impl SineFitter {
    /// Validate the input sequences and construct the engine.
    ///
    /// This is the loud half of the error contract: malformed input fails
    /// here, before any computation. Numerically difficult but well-formed
    /// data never fails later; it degrades to a poor-quality fit that
    /// callers should judge via R²/RMSE.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, FitError> {
        Ok(Self {
            dataset: Dataset::new(x, y)?,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Heuristic starting estimate derived from data statistics.
    pub fn initial_estimate(&self) -> SineParams {
        estimate_initial_params(&self.dataset)
    }

    /// Run the full pipeline with default configuration.
    pub fn fit(&self) -> FitResult {
        self.fit_with_config(&FitConfig::default())
    }

    /// Run the full pipeline with explicit optimizer knobs.
    pub fn fit_with_config(&self, config: &FitConfig) -> FitResult {
        let start = Instant::now();
        let stats = self.dataset.stats();

        // Advisory seed only; the global search samples the whole bounds box.
        let _initial = self.initial_estimate();

        let bounds = derive_bounds(&stats);
        let mut de = DifferentialEvolution::new(&self.dataset, bounds, config);
        let global_params = de.run(config.de_generations);

        let final_params = refine(&self.dataset, global_params, config);

        let (quality, param_errors) = calculate_metrics(&self.dataset, &final_params);
        let curve = sample_curve(&stats, &final_params, config.num_fit_points);

        FitResult {
            params: final_params,
            param_errors,
            curve,
            quality,
            elapsed_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// Derive the global search box from the observed data ranges.
///
/// - amplitude: `±3·yRange`
/// - frequency: `[0.1/xRange, 10/xRange]` (positive by construction)
/// - phase: `[-2π, 2π]`
/// - offset: `[yMin − yRange, yMax + yRange]`
pub fn derive_bounds(stats: &DatasetStats) -> ParamBounds {
    let y_range = stats.y_range();
    let x_range = stats.x_range();
    ParamBounds {
        amplitude: Interval::new(-3.0 * y_range, 3.0 * y_range),
        frequency: Interval::new(0.1 / x_range, 10.0 / x_range),
        phase: Interval::new(-2.0 * PI, 2.0 * PI),
        offset: Interval::new(stats.y_min - y_range, stats.y_max + y_range),
    }
}

/// Sample the fitted model on a dense, evenly spaced grid over the observed
/// x-range.
fn sample_curve(stats: &DatasetStats, params: &SineParams, num_fit_points: usize) -> FittedCurve {
    let x_step = if num_fit_points > 1 {
        stats.x_range() / (num_fit_points - 1) as f64
    } else {
        0.0
    };

    let mut x = Vec::with_capacity(num_fit_points);
    let mut y = Vec::with_capacity(num_fit_points);
    for i in 0..num_fit_points {
        let xi = stats.x_min + i as f64 * x_step;
        x.push(xi);
        y.push(predict(xi, params));
    }
    FittedCurve { x, y }
}
