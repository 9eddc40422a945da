//! Loads [`FormConfig`] overrides embedded in the host page.
//!
//! TRADE-OFFS
//! ==========
//! A broken config block must not break the form, so parse failures are
//! logged and the defaults are used instead.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use crate::config::FormConfig;

/// Parse `raw` if present, falling back to defaults on absence or error.
#[must_use]
pub fn config_or_default(raw: Option<&str>) -> FormConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return FormConfig::default();
    };
    match FormConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default form config");
            FormConfig::default()
        }
    }
}

/// Read the inline config block from the current document.
pub fn read_page_config() -> FormConfig {
    #[cfg(feature = "hydrate")]
    {
        use crate::consts::CONFIG_SCRIPT_ID;

        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_SCRIPT_ID))
            .and_then(|el| el.text_content());
        config_or_default(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FormConfig::default()
    }
}
