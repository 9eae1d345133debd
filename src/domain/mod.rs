//! Domain layer with screens, credentials, validators and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Screen and field identifiers.
pub mod screen;
/// Pure field validators.
pub mod validation;

pub use entities::{Credentials, LoginForm, RegistrationForm, Session};
pub use errors::{EmailMatchError, RulesError};
pub use ports::EmailMatcher;
pub use screen::{Field, Screen};
pub use validation::{ValidationRules, is_name_valid, is_valid_date_of_birth};
