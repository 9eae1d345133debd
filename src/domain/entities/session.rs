//! Active screen together with the credentials it owns.

use crate::domain::entities::{Credentials, LoginForm, RegistrationForm};
use crate::domain::screen::Screen;

/// Navigation state. Form values live inside the variant of the screen that
/// owns them and are dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Startup splash.
    #[default]
    Splash,
    /// Login form in progress.
    Login(LoginForm),
    /// Registration form in progress.
    Registration(RegistrationForm),
    /// Logged in.
    Main,
}

impl Session {
    /// Fresh login session with empty fields.
    #[must_use]
    pub fn login() -> Self {
        Self::Login(LoginForm::new())
    }

    /// Fresh registration session with empty fields.
    #[must_use]
    pub fn registration() -> Self {
        Self::Registration(RegistrationForm::new())
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::Splash => Screen::Splash,
            Self::Login(_) => Screen::Login,
            Self::Registration(_) => Screen::Registration,
            Self::Main => Screen::Main,
        }
    }

    /// Returns the active form, if the screen has one.
    #[must_use]
    pub fn credentials(&self) -> Option<&dyn Credentials> {
        match self {
            Self::Login(form) => Some(form),
            Self::Registration(form) => Some(form),
            Self::Splash | Self::Main => None,
        }
    }

    /// Returns the active form mutably.
    pub fn credentials_mut(&mut self) -> Option<&mut dyn Credentials> {
        match self {
            Self::Login(form) => Some(form),
            Self::Registration(form) => Some(form),
            Self::Splash | Self::Main => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::Field;

    #[test]
    fn test_default_is_splash() {
        assert_eq!(Session::default().screen(), Screen::Splash);
        assert!(Session::default().credentials().is_none());
    }

    #[test]
    fn test_fresh_sessions_are_empty() {
        let session = Session::login();
        let form = session.credentials().unwrap();
        assert_eq!(form.value(Field::Username), Some(""));
        assert_eq!(form.value(Field::Password), Some(""));
    }

    #[test]
    fn test_credentials_mut_edits_active_form() {
        let mut session = Session::registration();
        let form = session.credentials_mut().unwrap();
        assert!(form.set(Field::LastName, "Lovelace".to_string()));

        assert_eq!(
            session.credentials().unwrap().value(Field::LastName),
            Some("Lovelace")
        );
    }
}
