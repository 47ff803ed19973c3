//! Model evaluation for the 4-parameter sinusoid.
//!
//! The fitter relies on two primitive operations:
//! - predict `y(x)` given parameters (for residuals/curves)
//! - evaluate the analytic Jacobian at all sample points (for refinement
//!   steps and parameter error estimates)
//!
//! The model is `y = A·sin(f·x + φ) + C` and holds no state.

use nalgebra::DMatrix;

use crate::domain::{PARAM_COUNT, SineParams};

/// Predict `y(x)` for the given parameters.
pub fn predict(x: f64, params: &SineParams) -> f64 {
    params.amplitude * (params.frequency * x + params.phase).sin() + params.offset
}

/// Predict `y` at every sample in `x`.
pub fn predict_series(x: &[f64], params: &SineParams) -> Vec<f64> {
    x.iter().map(|&xi| predict(xi, params)).collect()
}

/// Partial derivatives of the model with respect to each parameter slot,
/// evaluated at a single sample.
///
/// Slot order matches [`SineParams::to_array`]:
/// `[∂y/∂A, ∂y/∂f, ∂y/∂φ, ∂y/∂C]`.
pub fn jacobian_row(x: f64, params: &SineParams) -> [f64; PARAM_COUNT] {
    let arg = params.frequency * x + params.phase;
    [
        arg.sin(),
        params.amplitude * x * arg.cos(),
        params.amplitude * arg.cos(),
        1.0,
    ]
}

/// The N×4 Jacobian evaluated at all sample points.
///
/// Rebuilt fresh at every optimizer iteration; never cached across parameter
/// updates.
pub fn jacobian(x: &[f64], params: &SineParams) -> DMatrix<f64> {
    let mut jac = DMatrix::<f64>::zeros(x.len(), PARAM_COUNT);
    for (i, &xi) in x.iter().enumerate() {
        let row = jacobian_row(xi, params);
        for (j, &d) in row.iter().enumerate() {
            jac[(i, j)] = d;
        }
    }
    jac
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn predict_known_values() {
        let p = SineParams::new(2.0, 1.0, 0.0, 1.0);
        assert!((predict(0.0, &p) - 1.0).abs() < 1e-12);
        assert!((predict(PI / 2.0, &p) - 3.0).abs() < 1e-12);
        assert!((predict(PI, &p) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn jacobian_matches_finite_differences() {
        let p = SineParams::new(1.5, 2.0, 0.3, -0.5);
        let x = 0.7;
        let h = 1e-7;
        let analytic = jacobian_row(x, &p);

        let slots = p.to_array();
        for j in 0..PARAM_COUNT {
            let mut plus = slots;
            let mut minus = slots;
            plus[j] += h;
            minus[j] -= h;
            let numeric = (predict(x, &SineParams::from_array(plus))
                - predict(x, &SineParams::from_array(minus)))
                / (2.0 * h);
            assert!(
                (analytic[j] - numeric).abs() < 1e-5,
                "slot {j}: analytic {} vs numeric {}",
                analytic[j],
                numeric
            );
        }
    }

    #[test]
    fn jacobian_shape_and_offset_column() {
        let p = SineParams::new(1.0, 1.0, 0.0, 0.0);
        let x = [0.0, 0.5, 1.0, 1.5, 2.0];
        let jac = jacobian(&x, &p);
        assert_eq!(jac.nrows(), 5);
        assert_eq!(jac.ncols(), 4);
        assert!(jac.column(3).iter().all(|&v| v == 1.0));
    }
}
