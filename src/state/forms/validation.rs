//! Submission checks for the participant form

use super::form_state::ParticipantForm;
use crate::state::age::{calculate_age, Clock};
use thiserror::Error;

/// User-correctable problems raised on submission.
///
/// The `Display` text is what the alert dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field is empty or the terms are not accepted
    #[error("All fields are required!")]
    MissingField,
    /// The birth date is not a real calendar date
    #[error("Invalid birth date!")]
    InvalidDate,
}

/// Check required fields, then derive the age from the birth date.
///
/// Returns the age on success; the form itself is not modified.
pub fn validate(form: &ParticipantForm, clock: &dyn Clock) -> Result<i32, FormError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "submission rejected: required fields missing");
        return Err(FormError::MissingField);
    }

    calculate_age(form.birth_date.as_text(), clock).inspect_err(|_| {
        tracing::debug!("submission rejected: birth date is not a calendar date");
    })
}
