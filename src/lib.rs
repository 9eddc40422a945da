//! # upload-form
//!
//! Leptos + WASM upload form that accepts content through exactly one of
//! three input modes: pasted text, an uploaded file, or a URL.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`form`] | Testable [`form::FormCore`]: mode coordination and file ingestion |
//! | [`mode`] | The [`mode::InputMode`] enum and its DOM identifiers |
//! | [`file`] | Incoming file metadata and size formatting |
//! | [`validate`] | File acceptance, word counting, pre-submit checks |
//! | [`config`] | Page-level limits, loadable from inline JSON |
//! | [`consts`] | DOM contract ids/classes and default limits |
//! | [`components`] | Leptos components rendering the form |
//! | [`pages`] | Routed pages |
//! | [`util`] | Browser boundary helpers |

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod file;
pub mod form;
pub mod mode;
pub mod pages;
pub mod util;
pub mod validate;

/// WASM entrypoint: installs logging and hydrates the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
