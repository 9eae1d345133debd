//! Navigation state holder.

use tracing::{debug, info};

use crate::application::dto::{ScreenView, Transition};
use crate::application::navigation::{NavAction, reduce};
use crate::application::services::{FormValidation, FormValidator};
use crate::domain::{Screen, Session};

/// Owns the active session and applies actions to it.
#[derive(Debug)]
pub struct Navigator {
    session: Session,
    validator: FormValidator,
}

impl Navigator {
    /// Creates a navigator on the splash screen.
    #[must_use]
    pub fn new(validator: FormValidator) -> Self {
        Self::with_session(Session::Splash, validator)
    }

    /// Creates a navigator at an arbitrary session.
    #[must_use]
    pub const fn with_session(session: Session, validator: FormValidator) -> Self {
        Self { session, validator }
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.session.screen()
    }

    /// Returns the active session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Validates the active form from its current values.
    #[must_use]
    pub fn validation(&self) -> Option<FormValidation> {
        self.session
            .credentials()
            .map(|form| self.validator.validate(form))
    }

    /// Returns the aggregate gate of the active form.
    #[must_use]
    pub fn gate(&self) -> Option<bool> {
        self.validation().map(|v| v.is_valid())
    }

    /// Returns what presenters render.
    #[must_use]
    pub fn view(&self) -> ScreenView {
        ScreenView {
            screen: self.screen(),
            gate: self.gate(),
        }
    }

    /// Applies one action.
    pub fn dispatch(&mut self, action: NavAction) -> Transition {
        let from = self.screen();
        let name = action.name();

        let session = std::mem::take(&mut self.session);
        self.session = reduce(session, action, &self.validator);

        let to = self.screen();
        if from == to {
            debug!(action = name, screen = %from, "Action handled without transition");
            Transition::Stayed
        } else {
            info!(action = name, from = %from, to = %to, "Screen transition");
            Transition::Moved { from, to }
        }
    }
}
