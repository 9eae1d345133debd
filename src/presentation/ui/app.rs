//! Main application orchestrator.

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::{FormValidator, NavAction, Navigator, SplashTimer, Transition};
use crate::domain::Screen;
use crate::infrastructure::config::SplashConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{LoginScreen, MainScreen, RegistrationScreen, SplashScreen};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

enum CurrentScreen {
    Splash(SplashScreen),
    Login(LoginScreen),
    Registration(RegistrationScreen),
    Main(MainScreen),
}

impl CurrentScreen {
    fn for_screen(screen: Screen, animations: bool) -> Self {
        match screen {
            Screen::Splash => Self::Splash(SplashScreen::new(animations)),
            Screen::Login => Self::Login(LoginScreen::new()),
            Screen::Registration => Self::Registration(RegistrationScreen::new()),
            Screen::Main => Self::Main(MainScreen::new()),
        }
    }
}

/// Terminal front end for the navigation state machine.
pub struct App {
    navigator: Navigator,
    screen: CurrentScreen,
    splash: SplashConfig,
    splash_timer: Option<SplashTimer>,
    action_tx: mpsc::UnboundedSender<NavAction>,
    action_rx: mpsc::UnboundedReceiver<NavAction>,
    running: bool,
}

impl App {
    /// Creates the app on the splash screen. The timer starts with [`App::run`].
    #[must_use]
    pub fn new(validator: FormValidator, splash: SplashConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let navigator = Navigator::new(validator);
        let screen = CurrentScreen::for_screen(navigator.screen(), splash.animations);

        Self {
            navigator,
            screen,
            splash,
            splash_timer: None,
            action_tx,
            action_rx,
            running: true,
        }
    }

    /// Returns the active screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.start_splash_timer();
        self.run_event_loop(terminal).await?;

        info!(screen = %self.screen(), "Application exiting normally");
        Ok(())
    }

    fn start_splash_timer(&mut self) {
        if self.navigator.screen() != Screen::Splash {
            return;
        }
        debug!(delay_ms = self.splash.delay_ms, "Starting splash timer");
        self.splash_timer = Some(SplashTimer::start(
            self.splash.delay(),
            self.action_tx.clone(),
        ));
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.apply(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick() => {
                    if let CurrentScreen::Splash(splash) = &mut self.screen {
                        if !splash.is_intro_finished() {
                            splash.tick(ANIMATION_TICK_RATE);
                            terminal.draw(|frame| self.render(frame))?;
                        }
                    }
                }

                item = terminal_event => {
                    if self.handle_terminal_item(item) == EventResult::Exit {
                        self.running = false;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    fn handle_terminal_item(&mut self, item: Option<std::io::Result<Event>>) -> EventResult {
        match item {
            Some(Ok(event)) => self.handle_terminal_event(event),
            Some(Err(e)) => {
                warn!(error = %e, "Terminal event stream failed, exiting");
                EventResult::Exit
            }
            None => {
                warn!("Terminal event stream closed, exiting");
                EventResult::Exit
            }
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let view = self.navigator.view();
        let action = match (&mut self.screen, view.gate) {
            (CurrentScreen::Login(screen), Some(gate)) => screen.handle_key(key, gate),
            (CurrentScreen::Registration(screen), Some(gate)) => screen.handle_key(key, gate),
            (CurrentScreen::Main(screen), _) => screen.handle_key(key),
            _ => None,
        };

        if let Some(action) = action {
            self.apply(action);
        }
        EventResult::Continue
    }

    fn apply(&mut self, action: NavAction) {
        if let Transition::Moved { to, .. } = self.navigator.dispatch(action) {
            if to != Screen::Splash {
                self.splash_timer = None;
            }
            self.screen = CurrentScreen::for_screen(to, self.splash.animations);
        }
        self.sync_screen();
    }

    fn sync_screen(&mut self) {
        let (Some(gate), Some(validation)) = (self.navigator.view().gate, self.navigator.validation())
        else {
            return;
        };
        match &mut self.screen {
            CurrentScreen::Login(screen) => screen.sync(gate, &validation),
            CurrentScreen::Registration(screen) => screen.sync(gate, &validation),
            CurrentScreen::Splash(_) | CurrentScreen::Main(_) => {}
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let view = self.navigator.view();
        let validation = self.navigator.validation();

        match (&mut self.screen, view.gate.zip(validation.as_ref())) {
            (CurrentScreen::Splash(screen), _) => frame.render_widget(screen, area),
            (CurrentScreen::Main(screen), _) => frame.render_widget(&*screen, area),
            (CurrentScreen::Login(screen), Some((gate, validation))) => {
                screen.render(area, frame.buffer_mut(), gate, validation);
            }
            (CurrentScreen::Registration(screen), Some((gate, validation))) => {
                screen.render(area, frame.buffer_mut(), gate, validation);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::ValidationRules;
    use crate::infrastructure::PatternEmailMatcher;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn app() -> App {
        let validator = FormValidator::new(
            ValidationRules::default(),
            Arc::new(PatternEmailMatcher::new()),
        );
        App::new(
            validator,
            SplashConfig {
                delay_ms: 3000,
                animations: false,
            },
        )
    }

    fn press(app: &mut App, code: KeyCode) -> EventResult {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn rendered_buffer(app: &mut App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rendered(app: &mut App) -> String {
        rendered_buffer(app)
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn login_button_dimmed(app: &mut App) -> bool {
        let buf = rendered_buffer(app);
        let cells = buf.content();
        let start = cells
            .windows("[ Login ]".len())
            .position(|w| w.iter().map(|c| c.symbol()).collect::<String>() == "[ Login ]")
            .unwrap();
        cells[start].fg == Color::DarkGray
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_timer_opens_login() {
        let mut app = app();
        app.start_splash_timer();
        assert_eq!(app.screen(), Screen::Splash);

        let action = app.action_rx.recv().await.unwrap();
        app.apply(action);

        assert_eq!(app.screen(), Screen::Login);
        assert!(app.splash_timer.is_none());
    }

    #[test]
    fn test_splash_ignores_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Enter), EventResult::Continue);
        assert_eq!(app.screen(), Screen::Splash);
        assert!(rendered(&mut app).contains("Welcome to my app!"));
    }

    #[test]
    fn test_quit_keys_exit() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), EventResult::Exit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            EventResult::Exit
        );
    }

    #[test]
    fn test_terminal_stream_end_exits() {
        let mut app = app();
        app.apply(NavAction::SplashElapsed);

        assert_eq!(app.handle_terminal_item(None), EventResult::Exit);
        assert_eq!(
            app.handle_terminal_item(Some(Err(std::io::Error::other("tty gone")))),
            EventResult::Exit
        );
        assert_eq!(
            app.handle_terminal_item(Some(Ok(Event::Resize(80, 24)))),
            EventResult::Continue
        );
    }

    #[test]
    fn test_login_with_keyboard() {
        let mut app = app();
        app.apply(NavAction::SplashElapsed);

        type_text(&mut app, "bob");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pwd");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Main);
        assert!(rendered(&mut app).contains("This is the main page"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Login);
        assert_eq!(app.navigator.gate(), Some(false));
    }

    #[test]
    fn test_login_button_dimmed_while_gate_closed() {
        let mut app = app();
        app.apply(NavAction::SplashElapsed);
        assert_eq!(app.navigator.view().gate, Some(false));
        assert!(login_button_dimmed(&mut app));

        type_text(&mut app, "bob");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pwd");
        assert_eq!(app.navigator.view().gate, Some(true));
        assert!(!login_button_dimmed(&mut app));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.navigator.view().gate, Some(false));
        assert!(login_button_dimmed(&mut app));
    }

    #[test]
    fn test_short_username_keeps_login() {
        let mut app = app();
        app.apply(NavAction::SplashElapsed);

        type_text(&mut app, "bo");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pwd");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.screen(), Screen::Login);
        assert!(rendered(&mut app).contains("Check Username"));
    }

    #[test]
    fn test_registration_round_trip() {
        let mut app = app();
        app.apply(NavAction::SplashElapsed);

        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Registration);
        assert!(rendered(&mut app).contains("Date of Birth (mm/dd/yyyy)"));

        for (i, value) in ["Ada", "Lovelace", "12/10/1815", "ada@example.com", "engine"]
            .iter()
            .enumerate()
        {
            if i > 0 {
                press(&mut app, KeyCode::Tab);
            }
            type_text(&mut app, value);
        }
        assert_eq!(app.navigator.gate(), Some(true));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Login);
    }
}
