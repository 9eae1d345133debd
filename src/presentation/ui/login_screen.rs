//! Login screen.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::application::{FormValidation, NavAction};
use crate::domain::LoginForm;
use crate::presentation::ui::form::{FormAction, FormView};

/// Login screen UI.
pub struct LoginScreen {
    form: FormView,
}

impl LoginScreen {
    /// Creates new login screen with empty fields.
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormView::new(" Login ", LoginForm::FIELDS, "Login", "Register"),
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
            FormAction::Primary => Some(NavAction::SubmitLogin),
            FormAction::Secondary => Some(NavAction::OpenRegistration),
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

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}
