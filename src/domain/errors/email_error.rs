//! Email matcher error types.

use thiserror::Error;

/// Failures of an email matcher. Validators treat any of these as "not a
/// valid email" rather than propagating them.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum EmailMatchError {
    #[error("invalid email pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("email matcher unavailable: {message}")]
    Unavailable { message: String },
}

impl EmailMatchError {
    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
