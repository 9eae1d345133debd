//! Push button widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// Single-line push button.
///
/// A disabled button renders dimmed and is never focused by the owning
/// screen, so it cannot be activated.
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    enabled: bool,
    focused: bool,
}

impl Button {
    /// Creates an enabled, unfocused button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
            focused: false,
        }
    }

    /// Sets enabled state.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn style(&self) -> Style {
        if !self.enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        }
    }
}

impl Widget for &Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = format!("[ {} ]", self.label);
        Paragraph::new(Line::from(text).centered())
            .style(self.style())
            .render(area, buf);
    }
}
