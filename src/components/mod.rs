//! Leptos UI components.

pub mod mode_buttons;
pub mod upload_form;
