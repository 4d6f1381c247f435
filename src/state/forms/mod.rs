//! Form domain layer
//!
//! Field values and masking, focus order, and the submission rules that
//! decide when the declaration is shown.

mod field;
mod form_state;
mod validation;

pub use field::FormField;
pub use form_state::{Focus, Form, FormPhase, ParticipantForm, TEXT_FIELD_COUNT};
pub use validation::FormError;
