//! Pure transition function.

use crate::application::navigation::NavAction;
use crate::application::services::FormValidator;
use crate::domain::Session;

/// Applies one action to a session.
///
/// | From | Action | Guard | To |
/// |---|---|---|---|
/// | Splash | `SplashElapsed` | none | Login |
/// | Login | `OpenRegistration` | none | Registration |
/// | Login | `SubmitLogin` | login gate | Main |
/// | Registration | `SubmitRegistration` | registration gate | Login |
/// | Registration | `BackToLogin` | none | Login |
/// | Main | `BackToLogin` | none | Login |
///
/// `Edit` replaces a field of the active form. Every other pair, and every
/// guarded action whose gate is false, returns the session unchanged.
/// Leaving a screen drops its form; entering Login or Registration starts
/// from empty fields.
#[must_use]
pub fn reduce(session: Session, action: NavAction, validator: &FormValidator) -> Session {
    match (session, action) {
        (Session::Splash, NavAction::SplashElapsed) => Session::login(),

        (Session::Login(_), NavAction::OpenRegistration)
        | (Session::Registration(_) | Session::Main, NavAction::BackToLogin) => Session::login(),

        (Session::Login(form), NavAction::SubmitLogin) => {
            if validator.login_gate(&form) {
                Session::Main
            } else {
                Session::Login(form)
            }
        }

        (Session::Registration(form), NavAction::SubmitRegistration) => {
            if validator.registration_gate(&form) {
                Session::login()
            } else {
                Session::Registration(form)
            }
        }

        (mut session, NavAction::Edit { field, value }) => {
            if let Some(form) = session.credentials_mut() {
                form.set(field, value);
            }
            session
        }

        (session, _) => session,
    }
}
