//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: per-kind field widgets and dispatch
//! - `label`: label, required marker and error chrome
//! - `form_view`: the field grid
//! - `action_panel`: buttons and the last submission

mod action_panel;
mod field_renderer;
mod form_view;
mod label;

pub use action_panel::draw_action_panel;
pub use field_renderer::{draw_field, draw_select, draw_text_input, draw_textarea, FieldProps};
pub use form_view::draw_form;
