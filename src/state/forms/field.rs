//! Form field value objects

use crate::state::mask::{self, format_date, format_phone};

/// How keystrokes are turned into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, stored as typed
    Text,
    /// Numeric entry masked as `dd/mm/yyyy`
    Date,
    /// Numeric entry masked as `(dd)ddddd-dddd`
    Phone,
}

impl FieldKind {
    /// Whether the field only takes digits (numeric keyboard)
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldKind::Date | FieldKind::Phone)
    }

    /// Apply this kind's mask to a raw value
    pub fn format(self, raw: &str) -> String {
        match self {
            FieldKind::Text => raw.to_string(),
            FieldKind::Date => format_date(raw),
            FieldKind::Phone => format_phone(raw),
        }
    }

    fn digit_limit(self) -> usize {
        match self {
            FieldKind::Text => usize::MAX,
            FieldKind::Date => mask::DATE_DIGITS,
            FieldKind::Phone => mask::PHONE_DIGITS,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create a free text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self::new(name, label, placeholder, FieldKind::Text)
    }

    /// Create a masked field
    pub fn masked(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self::new(name, label, placeholder, kind)
    }

    fn new(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
        kind: FieldKind,
    ) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind,
            value: String::new(),
        }
    }

    /// Current value, masked for numeric fields
    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the value as if the whole text had been typed at once
    pub fn set_text(&mut self, raw: &str) {
        self.value = self.kind.format(raw);
    }

    /// Push a character to the field value.
    ///
    /// Numeric fields re-mask the result, so a non-digit is dropped.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => self.value.push(c),
            _ => {
                let mut raw = std::mem::take(&mut self.value);
                raw.push(c);
                self.set_text(&raw);
            }
        }
    }

    /// Remove the last character, or the last digit for numeric fields
    pub fn pop_char(&mut self) {
        match self.kind {
            FieldKind::Text => {
                self.value.pop();
            }
            kind => {
                let mut digits = mask::digits(&self.value, kind.digit_limit());
                digits.pop();
                self.value = kind.format(&digits);
            }
        }
    }
}
