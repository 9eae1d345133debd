//! Screen and field identifiers.

use std::fmt;

/// Mutually exclusive UI mode the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Welcome screen shown at startup.
    Splash,
    /// Username and password form.
    Login,
    /// New account form.
    Registration,
    /// Page reached after a successful login.
    Main,
}

impl Screen {
    /// Returns the screen title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Splash => "Welcome",
            Self::Login => "Login",
            Self::Registration => "Registration",
            Self::Main => "Main",
        }
    }

    /// Returns whether the screen owns a form.
    #[must_use]
    pub const fn has_form(self) -> bool {
        matches!(self, Self::Login | Self::Registration)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Free-text input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Login name.
    Username,
    /// Secret, masked on display.
    Password,
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Date of birth as `mm/dd/yyyy`.
    DateOfBirth,
    /// Email address.
    Email,
}

impl Field {
    /// Returns the label shown above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::DateOfBirth => "Date of Birth (mm/dd/yyyy)",
            Self::Email => "Email",
        }
    }

    /// Returns whether input is masked on display.
    #[must_use]
    pub const fn is_masked(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_form_screens_have_forms() {
        assert!(Screen::Login.has_form());
        assert!(Screen::Registration.has_form());
        assert!(!Screen::Splash.has_form());
        assert!(!Screen::Main.has_form());
    }

    #[test]
    fn test_only_password_is_masked() {
        assert!(Field::Password.is_masked());
        assert!(!Field::Username.is_masked());
        assert!(!Field::Email.is_masked());
    }
}
