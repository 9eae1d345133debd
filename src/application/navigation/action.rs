//! Navigation actions.

use std::fmt;

use crate::domain::Field;

/// User or timer input to the state machine.
#[derive(Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Splash delay elapsed.
    SplashElapsed,
    /// A field's value changed.
    Edit {
        /// Edited field.
        field: Field,
        /// New full value.
        value: String,
    },
    /// "Register" on the login screen.
    OpenRegistration,
    /// "Login" on the login screen.
    SubmitLogin,
    /// "Register" on the registration screen.
    SubmitRegistration,
    /// "Back to login".
    BackToLogin,
}

impl NavAction {
    /// Creates an edit action.
    #[must_use]
    pub fn edit(field: Field, value: impl Into<String>) -> Self {
        Self::Edit {
            field,
            value: value.into(),
        }
    }

    /// Returns a short name for logging. Never includes field values.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SplashElapsed => "splash_elapsed",
            Self::Edit { .. } => "edit",
            Self::OpenRegistration => "open_registration",
            Self::SubmitLogin => "submit_login",
            Self::SubmitRegistration => "submit_registration",
            Self::BackToLogin => "back_to_login",
        }
    }
}

impl fmt::Debug for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Edit { field, value } => f
                .debug_struct("Edit")
                .field("field", field)
                .field("len", &value.chars().count())
                .finish(),
            _ => f.write_str(self.name()),
        }
    }
}
