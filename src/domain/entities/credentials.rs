//! Transient form values owned by the active screen.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::screen::Field;

const MASK: &str = "***";

/// Field values of one screen's input session.
pub trait Credentials: fmt::Debug {
    /// Fields owned by this form, in display order.
    fn fields(&self) -> &'static [Field];

    /// Returns the value of an owned field.
    fn value(&self, field: Field) -> Option<&str>;

    /// Replaces the value of an owned field.
    ///
    /// Returns `false` and leaves the form untouched when the field is not
    /// part of this form.
    fn set(&mut self, field: Field, value: String) -> bool;

    /// Returns whether the form owns the field.
    fn owns(&self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

/// Login form values.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl LoginForm {
    /// Fields in display order.
    pub const FIELDS: &'static [Field] = &[Field::Username, Field::Password];

    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Credentials for LoginForm {
    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Password => Some(&self.password),
            _ => None,
        }
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Password => &mut self.password,
            _ => return false,
        };
        slot.zeroize();
        *slot = value;
        true
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &MASK)
            .finish()
    }
}

/// Registration form values.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RegistrationForm {
    first_name: String,
    last_name: String,
    date_of_birth: String,
    email: String,
    password: String,
}

impl RegistrationForm {
    /// Fields in display order.
    pub const FIELDS: &'static [Field] = &[
        Field::FirstName,
        Field::LastName,
        Field::DateOfBirth,
        Field::Email,
        Field::Password,
    ];

    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value.into());
        self
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the date of birth as typed.
    #[must_use]
    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the plaintext password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl Credentials for RegistrationForm {
    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::DateOfBirth => Some(&self.date_of_birth),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Username => None,
        }
    }

    fn set(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::DateOfBirth => &mut self.date_of_birth,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Username => return false,
        };
        slot.zeroize();
        *slot = value;
        true
    }
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("email", &self.email)
            .field("password", &MASK)
            .finish()
    }
}
