//! Registration screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::application::{FormValidation, NavAction};
use crate::domain::RegistrationForm;
use crate::presentation::ui::form::{FormAction, FormView};

/// Registration screen UI.
pub struct RegistrationScreen {
    form: FormView,
}

impl RegistrationScreen {
    /// Creates new registration screen with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormView::new(
                " Registration ",
                RegistrationForm::FIELDS,
                "Register",
                "Back to login",
            ),
        }
    }

    /// Returns the form presenter.
    #[must_use]
    pub const fn form(&self) -> &FormView {
        &self.form
    }

    /// Handles key event, returns the action to dispatch. `gate` is the
    /// form's aggregate gate from the navigator's view.
    pub fn handle_key(&mut self, key: KeyEvent, gate: bool) -> Option<NavAction> {
        match self.form.handle_key(key, gate) {
            FormAction::None => None,
            FormAction::Edited { field, value } => Some(NavAction::Edit { field, value }),
            FormAction::Primary => Some(NavAction::SubmitRegistration),
            FormAction::Secondary => Some(NavAction::BackToLogin),
        }
    }

    /// Refreshes hints from the latest validation.
    pub fn sync(&mut self, gate: bool, validation: &FormValidation) {
        self.form.sync(gate, validation);
    }

    /// Renders the screen.
    pub fn render(&self, area: Rect, buf: &mut Buffer, gate: bool, validation: &FormValidation) {
        self.form.render(area, buf, gate, validation);
    }
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self::new()
    }
}
