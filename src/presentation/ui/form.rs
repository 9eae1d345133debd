//! Form presenter shared by the login and registration screens.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::application::FormValidation;
use crate::domain::Field;
use crate::presentation::events::{EventHandler, KeyIntent};
use crate::presentation::widgets::{Button, StatusBar, TextInput};

const FORM_WIDTH: u16 = 50;
const INPUT_HEIGHT: u16 = 3;

/// Focusable control of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    /// Input at this index.
    Input(usize),
    /// Gated submit button.
    Primary,
    /// Ungated navigation button.
    Secondary,
}

/// Outcome of a key press on a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing for the state machine.
    None,
    /// A field's value changed.
    Edited {
        /// Edited field.
        field: Field,
        /// New value.
        value: String,
    },
    /// Primary button activated with the gate open.
    Primary,
    /// Secondary button activated.
    Secondary,
}

/// Inputs plus a gated primary button and an ungated secondary button.
///
/// The primary button leaves the focus ring while the gate is closed, and
/// activating it then yields [`FormAction::None`].
pub struct FormView {
    title: &'static str,
    inputs: Vec<(Field, TextInput)>,
    primary: &'static str,
    secondary: &'static str,
    focus: FormFocus,
}

impl FormView {
    /// Creates a form with one input per field; the first input is focused.
    #[must_use]
    pub fn new(
        title: &'static str,
        fields: &[Field],
        primary: &'static str,
        secondary: &'static str,
    ) -> Self {
        let inputs = fields
            .iter()
            .map(|&field| {
                let input = TextInput::new(field.label());
                let input = if field.is_masked() {
                    input.password()
                } else {
                    input
                };
                (field, input)
            })
            .collect();

        let mut form = Self {
            title,
            inputs,
            primary,
            secondary,
            focus: FormFocus::Input(0),
        };
        form.set_focus(FormFocus::Input(0));
        form
    }

    /// Returns the focused control.
    #[must_use]
    pub const fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Returns the displayed value of a field.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input.value())
    }

    /// Handles key event, returns action. `gate` enables the primary button.
    pub fn handle_key(&mut self, key: KeyEvent, gate: bool) -> FormAction {
        match EventHandler::classify(&key) {
            KeyIntent::FocusNext => {
                self.move_focus(true, gate);
                FormAction::None
            }
            KeyIntent::FocusPrevious => {
                self.move_focus(false, gate);
                FormAction::None
            }
            KeyIntent::Activate => match self.focus {
                FormFocus::Input(_) | FormFocus::Primary if gate => FormAction::Primary,
                FormFocus::Input(_) => {
                    self.move_focus(true, gate);
                    FormAction::None
                }
                FormFocus::Primary => FormAction::None,
                FormFocus::Secondary => FormAction::Secondary,
            },
            KeyIntent::Input => self.edit_focused(key),
            KeyIntent::Quit | KeyIntent::Ignore => FormAction::None,
        }
    }

    /// Refreshes hints and focus after the form's values changed.
    pub fn sync(&mut self, gate: bool, validation: &FormValidation) {
        for (field, input) in &mut self.inputs {
            let invalid = !input.value().is_empty() && validation.field(*field) == Some(false);
            input.set_invalid(invalid);
        }

        if self.focus == FormFocus::Primary && !gate {
            self.set_focus(FormFocus::Input(0));
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) -> FormAction {
        let FormFocus::Input(index) = self.focus else {
            return FormAction::None;
        };
        let Some((field, input)) = self.inputs.get_mut(index) else {
            return FormAction::None;
        };

        if input.handle_key(key) {
            FormAction::Edited {
                field: *field,
                value: input.value().to_string(),
            }
        } else {
            FormAction::None
        }
    }

    fn focus_ring(&self, gate: bool) -> Vec<FormFocus> {
        let mut ring: Vec<FormFocus> = (0..self.inputs.len()).map(FormFocus::Input).collect();
        if gate {
            ring.push(FormFocus::Primary);
        }
        ring.push(FormFocus::Secondary);
        ring
    }

    fn move_focus(&mut self, forward: bool, gate: bool) {
        let ring = self.focus_ring(gate);
        let len = ring.len();
        let current = ring.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };

        if let Some(&focus) = ring.get(next) {
            self.set_focus(focus);
        }
    }

    fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
        for (index, (_, input)) in self.inputs.iter_mut().enumerate() {
            input.set_focused(focus == FormFocus::Input(index));
        }
    }

    fn status(validation: &FormValidation) -> StatusBar {
        let hints = "Tab: next | Enter: select | Esc: quit";
        match validation.invalid_fields().next() {
            None => StatusBar::success("Ready").right(hints),
            Some(field) => StatusBar::warning(format!("Check {}", field.label())).right(hints),
        }
    }

    /// Renders the form centered in `area`. Hints come from `validation`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, gate: bool, validation: &FormValidation) {
        let input_count = u16::try_from(self.inputs.len()).unwrap_or(u16::MAX);
        let height = input_count
            .saturating_mul(INPUT_HEIGHT)
            .saturating_add(7);

        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(FORM_WIDTH),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.title);

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let mut constraints: Vec<Constraint> = self
            .inputs
            .iter()
            .map(|_| Constraint::Length(INPUT_HEIGHT))
            .collect();
        constraints.extend([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let rows = Layout::vertical(constraints).split(inner);

        for ((_, input), row) in self.inputs.iter().zip(rows.iter()) {
            input.render(*row, buf);
        }

        let primary = Button::new(self.primary)
            .enabled(gate)
            .focused(self.focus == FormFocus::Primary);
        let secondary = Button::new(self.secondary).focused(self.focus == FormFocus::Secondary);

        let tail = &rows[self.inputs.len().min(rows.len())..];
        if let [_, primary_row, secondary_row, _, status_row] = tail {
            primary.render(*primary_row, buf);
            secondary.render(*secondary_row, buf);
            (&Self::status(validation)).render(*status_row, buf);
        }
    }
}
