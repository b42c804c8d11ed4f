use std::fmt;

/// Errors raised while configuring a [`Classifier`](super::Classifier).
///
/// Prediction itself never fails: empty entry sets and empty tag sets are
/// resolved to "no match" rather than reported as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierError {
    /// `k` must select at least one neighbor
    InvalidK(usize),
    /// The similarity threshold must be a finite value in `[0, 1]`
    InvalidThreshold(f32),
}

impl fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidK(k) => write!(f, "Invalid k: {} (must be at least 1)", k),
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid similarity threshold: {} (must be within [0, 1])", t)
            }
        }
    }
}

impl std::error::Error for ClassifierError {}
