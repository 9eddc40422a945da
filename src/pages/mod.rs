//! Routed pages.

pub mod upload;
