use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};
use tachyonfx::{Effect, Interpolation, fx};

const LOGO_TEXT: &str = r"
 /\_/\
( o.o )
 > ^ <";

const WELCOME_TEXT: &str = "Welcome to my app!";

/// Welcome screen shown until the splash timer fires.
pub struct SplashScreen {
    intro_effect: Option<Effect>,
    intro_finished: bool,
    pending_duration: Duration,
}

impl Default for SplashScreen {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SplashScreen {
    /// Creates the splash screen, with the intro effect when `animations` is set.
    #[must_use]
    pub fn new(animations: bool) -> Self {
        let intro_effect = animations.then(|| fx::coalesce((800, Interpolation::CircOut)));

        Self {
            intro_finished: intro_effect.is_none(),
            intro_effect,
            pending_duration: Duration::ZERO,
        }
    }

    pub fn tick(&mut self, duration: Duration) {
        self.pending_duration = self.pending_duration.saturating_add(duration);
    }

    #[must_use]
    pub const fn is_intro_finished(&self) -> bool {
        self.intro_finished
    }

    fn text() -> Text<'static> {
        let mut lines: Vec<Line<'static>> = LOGO_TEXT
            .trim_matches('\n')
            .lines()
            .map(|line| Line::from(line).style(Style::default().fg(Color::Yellow)))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(WELCOME_TEXT).style(Style::default().add_modifier(Modifier::BOLD)));
        Text::from(lines).centered()
    }
}

impl Widget for &mut SplashScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = SplashScreen::text();

        let text_width = u16::try_from(text.width()).unwrap_or(0);
        let text_height = u16::try_from(text.height()).unwrap_or(0);

        let x = area.x + (area.width.saturating_sub(text_width)) / 2;
        let y = area.y + (area.height.saturating_sub(text_height)) / 2;
        let center_area = Rect::new(
            x,
            y,
            text_width.min(area.width),
            text_height.min(area.height),
        );

        Paragraph::new(text).render(center_area, buf);

        let duration = self.pending_duration;
        self.pending_duration = Duration::ZERO;

        if self.intro_finished {
            return;
        }
        if let Some(effect) = self.intro_effect.as_mut() {
            let overflow = effect.process(duration.into(), buf, center_area);
            if overflow.is_some() {
                self.intro_finished = true;
            }
        }
    }
}
