//! Navigation output DTOs.

use crate::domain::Screen;

/// What screen presenters consume: the active screen and, for form screens,
/// whether the primary action is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenView {
    /// Active screen.
    pub screen: Screen,
    /// Aggregate gate of the active form. `None` on screens without one.
    pub gate: Option<bool>,
}

/// Outcome of dispatching one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Screen did not change. Form values may have.
    Stayed,
    /// Screen changed.
    Moved {
        /// Screen before the action.
        from: Screen,
        /// Screen after the action.
        to: Screen,
    },
}

impl Transition {
    /// Returns the new screen, if the action moved.
    #[must_use]
    pub const fn target(self) -> Option<Screen> {
        match self {
            Self::Stayed => None,
            Self::Moved { to, .. } => Some(to),
        }
    }
}
