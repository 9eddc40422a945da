//! Browser boundary helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules are the only places that touch `web_sys` types directly;
//! they hand plain Rust values to the form core.

pub mod file_list;
pub mod page_config;
