//! dynform - terminal form builder
//!
//! Renders a form from a declarative list of field descriptors, validates it
//! on submit, and shows the submitted values.

pub mod app;
pub mod cli;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
