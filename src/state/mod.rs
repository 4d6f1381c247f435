//! Application state module

pub mod age;
mod app_state;
mod forms;
pub mod mask;

pub use app_state::*;
pub use forms::*;
