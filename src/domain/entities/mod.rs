//! Domain entities.

mod credentials;
mod session;

pub use credentials::{Credentials, LoginForm, RegistrationForm};
pub use session::Session;
