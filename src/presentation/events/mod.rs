//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// What a key press asks the focused screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Leave the application.
    Quit,
    /// Move focus forward.
    FocusNext,
    /// Move focus backward.
    FocusPrevious,
    /// Activate the focused control.
    Activate,
    /// Anything else; routed to the focused input.
    Input,
    /// Key release or repeat noise.
    Ignore,
}

/// Terminal key classification.
pub struct EventHandler;

impl EventHandler {
    /// Classifies a key event.
    #[must_use]
    pub fn classify(key: &KeyEvent) -> KeyIntent {
        if key.kind == KeyEventKind::Release {
            return KeyIntent::Ignore;
        }
        if Self::is_quit_event(key) {
            return KeyIntent::Quit;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => KeyIntent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyIntent::FocusPrevious,
            KeyCode::Enter => KeyIntent::Activate,
            _ => KeyIntent::Input,
        }
    }

    /// Checks if key is a quit event. Plain letters never quit since every
    /// form accepts free text.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } | KeyEvent {
                code: KeyCode::Esc,
                modifiers: KeyModifiers::NONE,
                ..
            }
        )
    }
}
