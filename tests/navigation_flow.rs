use std::sync::Arc;

use loginflow::application::{FormValidator, NavAction, Navigator, Transition};
use loginflow::domain::ports::EmailMatcher;
use loginflow::domain::{EmailMatchError, Field, Screen, ValidationRules};
use loginflow::infrastructure::PatternEmailMatcher;

struct UnavailableMatcher;

impl EmailMatcher for UnavailableMatcher {
    fn matches(&self, _value: &str) -> Result<bool, EmailMatchError> {
        Err(EmailMatchError::unavailable("offline"))
    }
}

fn navigator_with(email: Arc<dyn EmailMatcher>) -> Navigator {
    Navigator::new(FormValidator::new(ValidationRules::default(), email))
}

fn navigator() -> Navigator {
    navigator_with(Arc::new(PatternEmailMatcher::new()))
}

fn register(nav: &mut Navigator, email: &str) {
    for (field, value) in [
        (Field::FirstName, "Grace"),
        (Field::LastName, "Hopper"),
        (Field::DateOfBirth, "12/09/1906"),
        (Field::Email, email),
        (Field::Password, "cobol"),
    ] {
        nav.dispatch(NavAction::edit(field, value));
    }
}

#[test]
fn full_session_walkthrough() {
    let mut nav = navigator();
    assert_eq!(nav.screen(), Screen::Splash);

    nav.dispatch(NavAction::SplashElapsed);
    nav.dispatch(NavAction::OpenRegistration);
    register(&mut nav, "grace@navy.mil");
    assert_eq!(
        nav.dispatch(NavAction::SubmitRegistration),
        Transition::Moved {
            from: Screen::Registration,
            to: Screen::Login
        }
    );

    nav.dispatch(NavAction::edit(Field::Username, "grace"));
    nav.dispatch(NavAction::edit(Field::Password, "cobol"));
    assert_eq!(
        nav.dispatch(NavAction::SubmitLogin).target(),
        Some(Screen::Main)
    );

    nav.dispatch(NavAction::BackToLogin);
    assert_eq!(nav.screen(), Screen::Login);
    assert_eq!(nav.gate(), Some(false));
}

#[test]
fn submit_before_splash_is_ignored() {
    let mut nav = navigator();

    assert_eq!(nav.dispatch(NavAction::SubmitLogin), Transition::Stayed);
    assert_eq!(nav.dispatch(NavAction::BackToLogin), Transition::Stayed);
    assert_eq!(nav.screen(), Screen::Splash);
}

#[test]
fn unavailable_email_matcher_blocks_registration() {
    let mut nav = navigator_with(Arc::new(UnavailableMatcher));
    nav.dispatch(NavAction::SplashElapsed);
    nav.dispatch(NavAction::OpenRegistration);
    register(&mut nav, "grace@navy.mil");

    let validation = nav.validation().unwrap();
    assert_eq!(validation.invalid_fields().collect::<Vec<_>>(), vec![Field::Email]);
    assert_eq!(nav.dispatch(NavAction::SubmitRegistration), Transition::Stayed);
}

#[test]
fn back_from_registration_discards_input() {
    let mut nav = navigator();
    nav.dispatch(NavAction::SplashElapsed);
    nav.dispatch(NavAction::OpenRegistration);
    register(&mut nav, "not-an-email");
    assert_eq!(nav.gate(), Some(false));

    nav.dispatch(NavAction::BackToLogin);
    nav.dispatch(NavAction::OpenRegistration);

    let validation = nav.validation().unwrap();
    assert_eq!(validation.invalid_fields().count(), 5);
}
