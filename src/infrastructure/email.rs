//! Regex-backed email matcher.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::EmailMatchError;
use crate::domain::ports::EmailMatcher;

/// Email address pattern used by the Android platform matcher.
pub const PLATFORM_EMAIL_PATTERN: &str = concat!(
    r"[a-zA-Z0-9+._%\-]{1,256}",
    r"@",
    r"[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}",
    r"(?:\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+",
);

static PLATFORM_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(PLATFORM_EMAIL_PATTERN)).expect("Invalid platform email regex")
});

fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Whole-string email matcher.
#[derive(Debug, Clone)]
pub struct PatternEmailMatcher {
    pattern: Regex,
}

impl PatternEmailMatcher {
    /// Creates matcher with the platform pattern.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: PLATFORM_EMAIL_RE.clone(),
        }
    }

    /// Creates matcher with a custom pattern. The pattern is anchored to the
    /// whole value.
    ///
    /// # Errors
    /// Returns error if the pattern does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self, EmailMatchError> {
        let pattern = Regex::new(&anchored(pattern))?;
        Ok(Self { pattern })
    }
}

impl Default for PatternEmailMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailMatcher for PatternEmailMatcher {
    fn matches(&self, value: &str) -> Result<bool, EmailMatchError> {
        Ok(self.pattern.is_match(value))
    }
}
