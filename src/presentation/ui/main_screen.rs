//! Main screen after login.

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::NavAction;
use crate::presentation::events::{EventHandler, KeyIntent};
use crate::presentation::widgets::{Button, StatusBar};

/// Main application screen.
pub struct MainScreen {
    status: StatusBar,
}

impl MainScreen {
    /// Creates new main screen.
    #[must_use]
    pub fn new() -> Self {
        let status = StatusBar::success("Logged in").right("Enter: back to login | Esc: quit");

        Self { status }
    }

    /// Handles key event. The only control is "Back to login".
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<NavAction> {
        match EventHandler::classify(&key) {
            KeyIntent::Activate => Some(NavAction::BackToLogin),
            _ => None,
        }
    }
}

impl Default for MainScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &MainScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
        let [content_area, status_area] = layout.areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Main ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let welcome_layout = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = welcome_layout.areas(inner);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(40),
            Constraint::Fill(1),
        ]);
        let [_, message_area, _] = horizontal.areas(center);
        let [text_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(message_area);

        Paragraph::new(Line::from(Span::styled(
            "This is the main page",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .centered()
        .render(text_area, buf);

        (&Button::new("Back to login").focused(true)).render(button_area, buf);

        (&self.status).render(status_area, buf);
    }
}
