//! Structural error type for the fitting engine.
//!
//! Only malformed *input* is reported through [`FitError`]; numerical
//! degeneracies encountered during optimization are absorbed locally via
//! epsilon regularization or sentinel fallbacks and never surface as errors.
//! Callers judge fit quality from R²/RMSE, not from error paths.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FitErrorKind {
    /// The input dataset violates a shape/size invariant.
    InvalidInput,
}

#[derive(Clone)]
pub struct FitError {
    kind: FitErrorKind,
    message: String,
}

impl FitError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            kind: FitErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FitErrorKind {
        self.kind
    }
}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FitError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for FitError {}
