mod form_validator;
mod splash_timer;

pub use form_validator::{FormValidation, FormValidator};
pub use splash_timer::SplashTimer;
