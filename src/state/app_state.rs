//! Screen state: the participant form plus the alert queue

use super::forms::{Focus, Form, ParticipantForm};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ParticipantForm,

    // Alerts waiting to be dismissed, front is on screen
    errors: VecDeque<String>,
}

impl AppState {
    /// Queue an alert message
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The alert currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Close the alert currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    /// Handle character input in form.
    ///
    /// A space on the terms checkbox toggles it; other focus targets
    /// without a text value ignore the key.
    pub fn form_input_char(&mut self, c: char) {
        match self.form.focus() {
            Focus::Field(_) => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            Focus::Terms if c == ' ' => self.form.toggle_terms(),
            Focus::Terms | Focus::Submit => {}
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
        }
    }
}
