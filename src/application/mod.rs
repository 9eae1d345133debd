//! Application layer with the navigation state machine and its services.

/// Data transfer objects.
pub mod dto;
/// Navigation state machine.
pub mod navigation;
/// Validation and timing services.
pub mod services;

pub use dto::{ScreenView, Transition};
pub use navigation::{NavAction, Navigator, reduce};
pub use services::{FormValidation, FormValidator, SplashTimer};
