//! Page-level configuration for the upload form.
//!
//! Defaults come from [`crate::consts`]. A host page may override any field
//! with an inline JSON block (`<script id="upload-form-config"
//! type="application/json">`); missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_FORM_ACTION, DEFAULT_MAX_FILE_BYTES, DEFAULT_MIN_WORDS, DEFAULT_MODEL_TYPE,
    DEFAULT_MODEL_TYPES, DEFAULT_SUMMARY_LENGTH, DEFAULT_SUMMARY_LENGTHS,
};

/// Error returned by [`FormConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The inline block is not valid JSON for [`FormConfig`].
    #[error("invalid form config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A limit that must be positive was zero.
    #[error("form config field `{0}` must be greater than zero")]
    Zero(&'static str),
    /// A default option is missing from its option list.
    #[error("form config default `{value}` is not listed in `{field}`")]
    Unlisted { field: &'static str, value: String },
}

/// Limits and endpoints used by the form and its validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Largest accepted file, in bytes.
    pub max_file_bytes: u64,
    /// Accepted file extensions, lowercase, without the dot.
    pub allowed_extensions: Vec<String>,
    /// Minimum word count for pasted text.
    pub min_words: usize,
    /// Where the native form posts.
    pub form_action: String,
    /// Summary lengths offered in the length control.
    pub summary_lengths: Vec<u32>,
    pub default_summary_length: u32,
    /// Model identifiers offered in the model control.
    pub model_types: Vec<String>,
    pub default_model_type: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS.iter().map(|&e| e.to_owned()).collect(),
            min_words: DEFAULT_MIN_WORDS,
            form_action: DEFAULT_FORM_ACTION.to_owned(),
            summary_lengths: DEFAULT_SUMMARY_LENGTHS.to_vec(),
            default_summary_length: DEFAULT_SUMMARY_LENGTH,
            model_types: DEFAULT_MODEL_TYPES.iter().map(|&m| m.to_owned()).collect(),
            default_model_type: DEFAULT_MODEL_TYPE.to_owned(),
        }
    }
}

impl FormConfig {
    /// Parse overrides from JSON, filling unspecified fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed, a limit is zero, or a
    /// default option is not in its list.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw)?;
        if config.max_file_bytes == 0 {
            return Err(ConfigError::Zero("max_file_bytes"));
        }
        if config.min_words == 0 {
            return Err(ConfigError::Zero("min_words"));
        }
        for ext in &mut config.allowed_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        if !config.summary_lengths.contains(&config.default_summary_length) {
            return Err(ConfigError::Unlisted {
                field: "summary_lengths",
                value: config.default_summary_length.to_string(),
            });
        }
        if !config.model_types.contains(&config.default_model_type) {
            return Err(ConfigError::Unlisted { field: "model_types", value: config.default_model_type });
        }
        Ok(config)
    }

    /// Whether `ext` (already lowercased) is on the allow list.
    #[must_use]
    pub fn allows_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.iter().any(|a| a == ext)
    }

    /// Value for the picker's `accept` attribute, e.g. `.txt,.pdf`.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
