//! Field and form validation service.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::EmailMatcher;
use crate::domain::{
    Credentials, Field, LoginForm, RegistrationForm, ValidationRules, is_name_valid,
    is_valid_date_of_birth,
};

/// Validity of every field of one form plus the aggregate gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    fields: Vec<(Field, bool)>,
}

impl FormValidation {
    /// Returns the aggregate gate: all fields valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, valid)| *valid)
    }

    /// Returns validity of one field, if the form has it.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<bool> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, valid)| *valid)
    }

    /// Iterates fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, bool)> + '_ {
        self.fields.iter().copied()
    }

    /// Iterates fields that do not pass.
    pub fn invalid_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields
            .iter()
            .filter(|(_, valid)| !*valid)
            .map(|(field, _)| *field)
    }
}

/// Judges well-formedness of field values.
#[derive(Clone)]
pub struct FormValidator {
    rules: ValidationRules,
    email: Arc<dyn EmailMatcher>,
}

impl FormValidator {
    /// Creates validator.
    #[must_use]
    pub fn new(rules: ValidationRules, email: Arc<dyn EmailMatcher>) -> Self {
        Self { rules, email }
    }

    /// Checks a name-like value.
    #[must_use]
    pub fn is_name_valid(&self, value: &str) -> bool {
        is_name_valid(value, &self.rules)
    }

    /// Checks a date of birth.
    #[must_use]
    pub fn is_valid_date_of_birth(&self, value: &str) -> bool {
        is_valid_date_of_birth(value)
    }

    /// Checks an email address. Matcher failures count as invalid.
    #[must_use]
    pub fn is_valid_email(&self, value: &str) -> bool {
        match self.email.matches(value) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(error = %e, "Email check failed, treating as invalid");
                false
            }
        }
    }

    /// Checks one field value with the validator that field uses.
    #[must_use]
    pub fn check_field(&self, field: Field, value: &str) -> bool {
        match field {
            Field::Username | Field::Password | Field::FirstName | Field::LastName => {
                self.is_name_valid(value)
            }
            Field::DateOfBirth => self.is_valid_date_of_birth(value),
            Field::Email => self.is_valid_email(value),
        }
    }

    /// Validates every field of a form. No check is skipped.
    #[must_use]
    pub fn validate(&self, form: &dyn Credentials) -> FormValidation {
        let fields = form
            .fields()
            .iter()
            .map(|&field| {
                let value = form.value(field).unwrap_or_default();
                (field, self.check_field(field, value))
            })
            .collect();

        FormValidation { fields }
    }

    /// Login gate: username and password both within name bounds.
    #[must_use]
    pub fn login_gate(&self, form: &LoginForm) -> bool {
        self.validate(form).is_valid()
    }

    /// Registration gate: date of birth, password, email, first and last
    /// name all valid.
    #[must_use]
    pub fn registration_gate(&self, form: &RegistrationForm) -> bool {
        self.validate(form).is_valid()
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmailMatchError;
    use crate::domain::ports::mocks::MockEmailMatcher;
    use crate::infrastructure::PatternEmailMatcher;
    use test_case::test_case;

    fn validator() -> FormValidator {
        FormValidator::new(
            ValidationRules::default(),
            Arc::new(PatternEmailMatcher::new()),
        )
    }

    fn valid_registration() -> RegistrationForm {
        RegistrationForm::new()
            .with(Field::FirstName, "Ada")
            .with(Field::LastName, "Lovelace")
            .with(Field::DateOfBirth, "12/10/1815")
            .with(Field::Email, "ada@example.com")
            .with(Field::Password, "engine")
    }

    #[test_case("bob", "pwd", true ; "both_valid")]
    #[test_case("ab", "password", false ; "short_username")]
    #[test_case("bob", "pw", false ; "short_password")]
    #[test_case("", "", false ; "empty")]
    fn test_login_gate(username: &str, password: &str, expected: bool) {
        let form = LoginForm::new()
            .with(Field::Username, username)
            .with(Field::Password, password);
        assert_eq!(validator().login_gate(&form), expected);
    }

    #[test]
    fn test_registration_gate_all_valid() {
        assert!(validator().registration_gate(&valid_registration()));
    }

    #[test]
    fn test_registration_gate_has_no_calendar_semantics() {
        let form = valid_registration().with(Field::DateOfBirth, "13/45/2020");
        assert!(validator().registration_gate(&form));
    }

    #[test_case(Field::FirstName, "Al" ; "short_first_name")]
    #[test_case(Field::LastName, "" ; "empty_last_name")]
    #[test_case(Field::DateOfBirth, "1/2/2000" ; "malformed_dob")]
    #[test_case(Field::Email, "not-an-email" ; "bad_email")]
    #[test_case(Field::Password, "pw" ; "short_password")]
    fn test_registration_gate_single_invalid_field(field: Field, value: &str) {
        let validator = validator();
        let form = valid_registration().with(field, value);
        let validation = validator.validate(&form);

        assert!(!validation.is_valid());
        assert_eq!(validation.field(field), Some(false));
        assert_eq!(validation.invalid_fields().collect::<Vec<_>>(), vec![field]);
        assert!(!validator.registration_gate(&form));
    }

    #[test]
    fn test_validation_covers_every_field_in_order() {
        let validation = validator().validate(&RegistrationForm::new());
        let fields: Vec<Field> = validation.fields().map(|(f, _)| f).collect();

        assert_eq!(fields, RegistrationForm::FIELDS);
        assert_eq!(validation.invalid_fields().count(), 5);
    }

    #[test]
    fn test_email_matcher_failure_degrades_to_invalid() {
        let mut matcher = MockEmailMatcher::new();
        matcher
            .expect_matches()
            .returning(|_| Err(EmailMatchError::unavailable("offline")));
        let validator = FormValidator::new(ValidationRules::default(), Arc::new(matcher));

        assert!(!validator.is_valid_email("ada@example.com"));
        assert!(!validator.registration_gate(&valid_registration()));
    }

    #[test]
    fn test_email_delegates_to_matcher() {
        let mut matcher = MockEmailMatcher::new();
        matcher
            .expect_matches()
            .withf(|value| value == "anything")
            .times(1)
            .returning(|_| Ok(true));
        let validator = FormValidator::new(ValidationRules::default(), Arc::new(matcher));

        assert!(validator.is_valid_email("anything"));
    }

    #[test]
    fn test_custom_rules_apply_to_every_name_field() {
        let rules = ValidationRules::new(1, 5).unwrap();
        let validator = FormValidator::new(rules, Arc::new(PatternEmailMatcher::new()));

        let form = LoginForm::new()
            .with(Field::Username, "b")
            .with(Field::Password, "p");
        assert!(validator.login_gate(&form));

        let form = form.with(Field::Password, "toolong");
        assert!(!validator.login_gate(&form));
    }
}
