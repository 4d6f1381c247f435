//! Application state and key handling

use crate::config::FormConfig;
use crate::state::age::{Clock, SystemClock};
use crate::state::{AppState, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: FormConfig,
    /// Source of "today" for age calculation
    clock: Box<dyn Clock>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance using the system clock
    pub fn new(config: FormConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: FormConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::default(),
            config,
            clock,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        let focus = self.state.form.focus();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit()
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter => match focus {
                Focus::Field(_) => self.state.next_form_field(),
                Focus::Terms => self.state.form.toggle_terms(),
                Focus::Submit => self.submit(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_input_char(c)
            }
            KeyCode::Backspace => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate the form and show the declaration, or raise an alert
    pub fn submit(&mut self) {
        match self.state.form.submit(self.clock.as_ref()) {
            Ok(age) => {
                tracing::info!(age, "declaration generated");
            }
            Err(err) => {
                tracing::warn!("submission failed: {err}");
                self.state.push_error(err.to_string());
            }
        }
    }
}
