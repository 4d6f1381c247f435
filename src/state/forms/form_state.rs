//! Participant form state and focus handling

use super::field::{FieldKind, FormField};
use super::validation::{validate, FormError};
use crate::state::age::Clock;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the text inputs, by index
    Field(usize),
    /// The terms acceptance checkbox
    Terms,
    /// The "Generate PDF" button
    Submit,
}

/// Whether the declaration has been generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Number of text inputs on the form
pub const TEXT_FIELD_COUNT: usize = 5;

/// All data collected from one participant
#[derive(Debug, Clone)]
pub struct ParticipantForm {
    pub name: FormField,
    pub email: FormField,
    pub address: FormField,
    pub birth_date: FormField,
    pub phone: FormField,
    pub terms_accepted: bool,
    /// Derived on successful submission
    pub age: Option<i32>,
    pub summary_visible: bool,
    pub active_field_index: usize,
}

impl ParticipantForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name", "Enter your name"),
            email: FormField::text("email", "E-mail", "example@example.com"),
            address: FormField::text(
                "address",
                "Address",
                "Thirty-Three Street, 245 - District",
            ),
            birth_date: FormField::masked(
                "birth_date",
                "Birth date",
                "dd/mm/yyyy",
                FieldKind::Date,
            ),
            phone: FormField::masked("phone", "Phone", "(99) 99999-9999", FieldKind::Phone),
            terms_accepted: false,
            age: None,
            summary_visible: false,
            active_field_index: 0,
        }
    }

    pub fn phase(&self) -> FormPhase {
        if self.summary_visible {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    pub fn focus(&self) -> Focus {
        match self.active_field_index {
            i if i < TEXT_FIELD_COUNT => Focus::Field(i),
            TEXT_FIELD_COUNT => Focus::Terms,
            _ => Focus::Submit,
        }
    }

    pub fn toggle_terms(&mut self) {
        self.terms_accepted = !self.terms_accepted;
    }

    /// Look up a text input by its name
    #[cfg(test)]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        (0..TEXT_FIELD_COUNT)
            .find(|&i| self.get_field(i).is_some_and(|f| f.name == name))
            .and_then(|i| self.field_at_mut(i))
    }

    /// Names of required inputs that block submission
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing: Vec<&'static str> = (0..TEXT_FIELD_COUNT)
            .filter_map(|i| self.get_field(i))
            .filter(|f| f.is_empty())
            .map(|f| f.name)
            .collect();
        if !self.terms_accepted {
            missing.push("terms");
        }
        missing
    }

    /// Validate and, on success, record the age and show the declaration.
    ///
    /// On error nothing changes, so a form that was already submitted keeps
    /// its previous age and stays submitted.
    pub fn submit(&mut self, clock: &dyn Clock) -> Result<i32, FormError> {
        let age = validate(self, clock)?;
        self.age = Some(age);
        self.summary_visible = true;
        Ok(age)
    }

    fn field_at_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.address),
            3 => Some(&mut self.birth_date),
            4 => Some(&mut self.phone),
            _ => None,
        }
    }
}

impl Default for ParticipantForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ParticipantForm {
    fn field_count(&self) -> usize {
        TEXT_FIELD_COUNT + 2 // text inputs, terms, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.field_at_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.address),
            3 => Some(&self.birth_date),
            4 => Some(&self.phone),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::age::MockClock;
    use chrono::NaiveDate;

    fn clock() -> MockClock {
        let mut clock = MockClock::new();
        clock
            .expect_today()
            .return_const(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        clock
    }

    fn filled_form() -> ParticipantForm {
        let mut form = ParticipantForm::new();
        form.name.set_text("Maria Souza");
        form.email.set_text("maria@example.com");
        form.address.set_text("Thirty-Three Street, 245");
        form.birth_date.set_text("01/01/2000");
        form.phone.set_text("11987654321");
        form.terms_accepted = true;
        form
    }

    mod focus {
        use super::*;

        #[test]
        fn test_new_starts_on_name() {
            let form = ParticipantForm::new();
            assert_eq!(form.focus(), Focus::Field(0));
            assert_eq!(form.field_count(), 7);
        }

        #[test]
        fn test_focus_order() {
            let mut form = ParticipantForm::new();
            for i in 0..TEXT_FIELD_COUNT {
                assert_eq!(form.focus(), Focus::Field(i));
                form.next_field();
            }
            assert_eq!(form.focus(), Focus::Terms);
            form.next_field();
            assert_eq!(form.focus(), Focus::Submit);
            form.next_field();
            assert_eq!(form.focus(), Focus::Field(0));
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = ParticipantForm::new();
            form.prev_field();
            assert_eq!(form.focus(), Focus::Submit);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ParticipantForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_no_text_field_on_terms_or_submit() {
            let mut form = ParticipantForm::new();
            form.set_active_field(5);
            assert!(form.get_active_field_mut().is_none());
            form.set_active_field(6);
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ParticipantForm::new();
            assert_eq!(form.get_field(0).unwrap().name, "name");
            assert_eq!(form.get_field(1).unwrap().name, "email");
            assert_eq!(form.get_field(2).unwrap().name, "address");
            assert_eq!(form.get_field(3).unwrap().kind, FieldKind::Date);
            assert_eq!(form.get_field(4).unwrap().kind, FieldKind::Phone);
            assert!(form.get_field(5).is_none());
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_initial_state_is_editing() {
            let form = ParticipantForm::default();
            assert_eq!(form.phase(), FormPhase::Editing);
            assert!(form.age.is_none());
            assert!(!form.terms_accepted);
            assert_eq!(
                form.missing_fields(),
                vec!["name", "email", "address", "birth_date", "phone", "terms"]
            );
        }

        #[test]
        fn test_successful_submit_sets_age_and_summary() {
            let mut form = filled_form();
            assert_eq!(form.submit(&clock()), Ok(24));
            assert_eq!(form.age, Some(24));
            assert!(form.summary_visible);
            assert_eq!(form.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_missing_email_keeps_editing() {
            let mut form = filled_form();
            form.email.set_text("");
            assert_eq!(form.submit(&clock()), Err(FormError::MissingField));
            assert!(!form.summary_visible);
            assert!(form.age.is_none());
        }

        #[test]
        fn test_invalid_date_leaves_age_unset() {
            let mut form = filled_form();
            form.birth_date.set_text("31/02/2024");
            assert_eq!(form.submit(&clock()), Err(FormError::InvalidDate));
            assert!(form.age.is_none());
            assert_eq!(form.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_failed_resubmit_keeps_previous_result() {
            let mut form = filled_form();
            form.submit(&clock()).unwrap();
            form.birth_date.set_text("31/02/2024");
            assert_eq!(form.submit(&clock()), Err(FormError::InvalidDate));
            assert_eq!(form.age, Some(24));
            assert_eq!(form.phase(), FormPhase::Submitted);
        }

        #[test]
        fn test_resubmit_recomputes_age() {
            let mut form = filled_form();
            form.submit(&clock()).unwrap();
            form.birth_date.set_text("15/06/2000");
            assert_eq!(form.submit(&clock()), Ok(24));
            form.birth_date.set_text("16/06/2000");
            assert_eq!(form.submit(&clock()), Ok(23));
            assert_eq!(form.age, Some(23));
        }

        #[test]
        fn test_field_mut_by_name() {
            let mut form = ParticipantForm::new();
            form.field_mut("phone").unwrap().set_text("11");
            assert_eq!(form.phone.as_text(), "(11)");
            assert!(form.field_mut("terms").is_none());
        }
    }
}
