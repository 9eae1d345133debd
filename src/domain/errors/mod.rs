//! Domain error types.

mod email_error;
mod rules_error;

pub use email_error::EmailMatchError;
pub use rules_error::RulesError;
