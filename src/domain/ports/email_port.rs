//! Email matcher port definition.

use crate::domain::errors::EmailMatchError;

/// Port for judging whether a whole string looks like an email address.
#[cfg_attr(test, mockall::automock)]
pub trait EmailMatcher: Send + Sync {
    /// Returns `Ok(true)` iff the entire value is a syntactically valid
    /// email address.
    fn matches(&self, value: &str) -> Result<bool, EmailMatchError>;
}
