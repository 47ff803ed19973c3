//! Validated input dataset.
//!
//! Shape/size invariants are checked once at construction, before any
//! fitting; everything downstream can assume the dataset is well-formed.
//! There is deliberately no NaN/Inf filtering: malformed numeric values
//! propagate into the optimizer and degrade results rather than raising an
//! error. That is an accepted limitation, not a guarantee.

use crate::domain::PARAM_COUNT;
use crate::error::FitError;
use crate::math::{min_max, mean, std_dev};

/// Two equal-length ordered sequences of samples, read-only for the lifetime
/// of the engine instance that owns them.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

/// Observed ranges and basic statistics, computed once per fit.
#[derive(Debug, Clone, Copy)]
pub struct DatasetStats {
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_mean: f64,
    pub y_std: f64,
}

impl DatasetStats {
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Dataset {
    /// Validate and take ownership of the input sequences.
    ///
    /// Fails if either sequence is empty, if their lengths differ, or if
    /// fewer than 4 points are supplied (the parameter count; fewer points
    /// makes the fit under-determined).
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, FitError> {
        if x.is_empty() || y.is_empty() {
            return Err(FitError::invalid_input("Empty data arrays."));
        }
        if x.len() != y.len() {
            return Err(FitError::invalid_input(format!(
                "x and y must have the same length (got {} and {}).",
                x.len(),
                y.len()
            )));
        }
        if x.len() < PARAM_COUNT {
            return Err(FitError::invalid_input(format!(
                "Need at least {PARAM_COUNT} data points for sine fitting (got {}).",
                x.len()
            )));
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Span of x as sampled, first to last (used by the frequency estimator,
    /// which assumes ordered samples).
    pub fn x_span_sampled(&self) -> f64 {
        self.x[self.x.len() - 1] - self.x[0]
    }

    pub fn stats(&self) -> DatasetStats {
        let (x_min, x_max) = min_max(&self.x);
        let (y_min, y_max) = min_max(&self.y);
        DatasetStats {
            n: self.x.len(),
            x_min,
            x_max,
            y_min,
            y_max,
            y_mean: mean(&self.y),
            y_std: std_dev(&self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitErrorKind;

    #[test]
    fn rejects_empty_sequences() {
        let err = Dataset::new(vec![], vec![]).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::InvalidInput);
    }

    #[test]
    fn rejects_fewer_than_four_points() {
        let err = Dataset::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap_err();
        assert_eq!(err.kind(), FitErrorKind::InvalidInput);
    }

    #[test]
    fn accepts_four_points_and_reports_stats() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 1.0, -1.0]).unwrap();
        let stats = ds.stats();
        assert_eq!(stats.n, 4);
        assert_eq!(stats.x_min, 0.0);
        assert_eq!(stats.x_max, 3.0);
        assert_eq!(stats.y_min, -1.0);
        assert_eq!(stats.y_max, 3.0);
        assert!((stats.y_mean - 1.0).abs() < 1e-12);
        assert!((ds.x_span_sampled() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn does_not_filter_non_finite_values() {
        // NaN/Inf are accepted at construction; they degrade the fit instead
        // of failing it.
        let ds = Dataset::new(vec![0.0, 1.0, 2.0, 3.0], vec![1.0, f64::NAN, 1.0, 1.0]);
        assert!(ds.is_ok());
    }
}
