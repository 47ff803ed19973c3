//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during fitting
//! - exported to JSON/CSV by callers
//! - reloaded later for plotting or comparisons

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Number of model parameters (amplitude, frequency, phase, offset).
pub const PARAM_COUNT: usize = 4;

/// The four parameters of the sinusoid model `y = A·sin(f·x + φ) + C`.
///
/// Modeled as a fixed-arity struct rather than a dynamic collection so that
/// slot-order mistakes are a compile-time concern. The array bridges below
/// fix the slot order for optimizer code that must index parameters:
/// `[amplitude, frequency, phase, offset]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SineParams {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub offset: f64,
}

impl SineParams {
    pub fn new(amplitude: f64, frequency: f64, phase: f64, offset: f64) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
            offset,
        }
    }

    /// Slot-ordered view: `[amplitude, frequency, phase, offset]`.
    pub fn to_array(self) -> [f64; PARAM_COUNT] {
        [self.amplitude, self.frequency, self.phase, self.offset]
    }

    /// Inverse of [`SineParams::to_array`].
    pub fn from_array(slots: [f64; PARAM_COUNT]) -> Self {
        Self {
            amplitude: slots[0],
            frequency: slots[1],
            phase: slots[2],
            offset: slots[3],
        }
    }

    /// Equivalent parameters with non-negative amplitude and phase wrapped
    /// into `(-π, π]`.
    ///
    /// The fitter reports raw parameters (phase is an angle, not normalized);
    /// this helper makes two fits of the same signal comparable, since
    /// `(A, φ)` and `(-A, φ + π)` describe the same curve.
    pub fn canonicalized(self) -> Self {
        let (amplitude, phase) = if self.amplitude < 0.0 {
            (-self.amplitude, self.phase + PI)
        } else {
            (self.amplitude, self.phase)
        };
        Self {
            amplitude,
            frequency: self.frequency,
            phase: wrap_phase(phase),
            offset: self.offset,
        }
    }
}

/// Wrap an angle into `(-π, π]`.
fn wrap_phase(phase: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let mut p = phase % two_pi;
    if p <= -PI {
        p += two_pi;
    } else if p > PI {
        p -= two_pi;
    }
    p
}

/// A closed parameter interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Per-parameter search box for the global optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamBounds {
    pub amplitude: Interval,
    pub frequency: Interval,
    pub phase: Interval,
    pub offset: Interval,
}

impl ParamBounds {
    /// Slot-ordered view matching [`SineParams::to_array`].
    pub fn as_array(&self) -> [Interval; PARAM_COUNT] {
        [self.amplitude, self.frequency, self.phase, self.offset]
    }
}

/// Per-parameter standard errors (same slot order as [`SineParams`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamErrors {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub offset: f64,
}

impl ParamErrors {
    pub fn zeros() -> Self {
        Self::from_array([0.0; PARAM_COUNT])
    }

    pub fn from_array(slots: [f64; PARAM_COUNT]) -> Self {
        Self {
            amplitude: slots[0],
            frequency: slots[1],
            phase: slots[2],
            offset: slots[3],
        }
    }

    pub fn to_array(self) -> [f64; PARAM_COUNT] {
        [self.amplitude, self.frequency, self.phase, self.offset]
    }
}

/// Fit quality diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub r_squared: f64,
    pub aic: f64,
    pub n: usize,
}

/// Densely sampled fitted curve, evenly spaced over the observed x-range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Final output of one fit run. Immutable once produced; owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitResult {
    pub params: SineParams,
    pub param_errors: ParamErrors,
    pub curve: FittedCurve,
    pub quality: FitQuality,
    /// Wall-clock duration of the whole pipeline, in microseconds.
    pub elapsed_us: u64,
}

/// Optimizer knobs for one fit run.
///
/// Defaults reproduce the reference pipeline: a population of 40 over 200
/// generations for the global search, then up to 100 damped local iterations.
/// The fixed seed makes re-running a fit on identical data deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitConfig {
    /// Differential evolution population size.
    pub de_pop_size: usize,
    /// Differential evolution generation budget (no early stopping).
    pub de_generations: usize,
    /// Differential evolution mutation weight `F`.
    pub de_weight: f64,
    /// Differential evolution crossover probability `CR`.
    pub de_crossover: f64,
    /// Seed for the per-run random generator.
    pub de_seed: u64,
    /// Local refinement iteration budget.
    pub lm_max_iter: usize,
    /// Initial damping factor `λ` for the local refiner.
    pub lm_lambda_init: f64,
    /// Number of samples in the dense fitted curve.
    pub num_fit_points: usize,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            de_pop_size: 40,
            de_generations: 200,
            de_weight: 0.8,
            de_crossover: 0.9,
            de_seed: 42,
            lm_max_iter: 100,
            lm_lambda_init: 1e-3,
            num_fit_points: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_array_round_trip_preserves_slot_order() {
        let p = SineParams::new(2.0, 3.0, 0.5, 1.0);
        let a = p.to_array();
        assert_eq!(a, [2.0, 3.0, 0.5, 1.0]);
        assert_eq!(SineParams::from_array(a), p);
    }

    #[test]
    fn canonicalized_flips_negative_amplitude() {
        let p = SineParams::new(-2.0, 3.0, 0.5, 1.0).canonicalized();
        assert!(p.amplitude > 0.0);
        assert!((p.amplitude - 2.0).abs() < 1e-12);
        // φ + π wrapped into (-π, π].
        assert!((p.phase - (0.5 + PI - 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn canonicalized_wraps_large_phase() {
        let p = SineParams::new(1.0, 1.0, 5.0 * PI + 0.25, 0.0).canonicalized();
        assert!(p.phase > -PI && p.phase <= PI);
        assert!((p.phase - (PI + 0.25 - 2.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn interval_clamp_and_contains() {
        let iv = Interval::new(-1.0, 2.0);
        assert_eq!(iv.clamp(-5.0), -1.0);
        assert_eq!(iv.clamp(5.0), 2.0);
        assert_eq!(iv.clamp(0.5), 0.5);
        assert!(iv.contains(2.0));
        assert!(!iv.contains(2.1));
    }
}
