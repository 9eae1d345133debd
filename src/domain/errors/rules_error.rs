//! Validation rule error types.

use thiserror::Error;

/// Invalid validation rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RulesError {
    #[error("name length bounds are inverted: min {min} > max {max}")]
    InvertedNameBounds { min: usize, max: usize },
}
