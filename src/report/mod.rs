//! Reporting utilities: formatted fit summaries.
//!
//! We keep formatting code in one place so:
//! - the math/fitting code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::FitResult;

/// Format a plain-text summary of a fit (parameters ± uncertainties,
/// goodness-of-fit and timing).
pub fn format_fit_summary(result: &FitResult) -> String {
    let mut out = String::new();

    out.push_str("=== Sine Fit ===\n");
    out.push_str(&format!(
        "Model: y = A*sin(f*x + phi) + C (n={})\n",
        result.quality.n
    ));

    out.push_str("\nParameters:\n");
    out.push_str(&format!(
        "  amplitude A = {:>12.6} ± {:.6}\n",
        result.params.amplitude, result.param_errors.amplitude
    ));
    out.push_str(&format!(
        "  frequency f = {:>12.6} ± {:.6}\n",
        result.params.frequency, result.param_errors.frequency
    ));
    out.push_str(&format!(
        "  phase   phi = {:>12.6} ± {:.6}\n",
        result.params.phase, result.param_errors.phase
    ));
    out.push_str(&format!(
        "  offset    C = {:>12.6} ± {:.6}\n",
        result.params.offset, result.param_errors.offset
    ));

    out.push_str("\nQuality:\n");
    out.push_str(&format!("  R^2  = {:.6}\n", result.quality.r_squared));
    out.push_str(&format!("  RMSE = {:.6}\n", result.quality.rmse));
    out.push_str(&format!("  AIC  = {:.3}\n", result.quality.aic));

    out.push_str(&format!("\nElapsed: {} us\n", result.elapsed_us));

    out
}
