//! Form rendering module
//!
//! - `field_renderer`: text input and checkbox widgets
//! - `participant_form`: the participant details form

mod field_renderer;
mod participant_form;

pub use participant_form::{draw_participant_form, FORM_HEIGHT};
