//! File acceptance, word counting, and pre-submit checks.
//!
//! These are the collaborators the form core hands work to through
//! [`crate::form::Effect`]. They are pure; the component decides how to
//! surface their results.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::config::FormConfig;
use crate::file::{IncomingFile, format_file_size};
use crate::mode::InputMode;

/// Why an incoming file was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    /// Zero-byte file.
    #[error("{0} is empty")]
    Empty(String),
    /// Name has no extension to check.
    #[error("{0} has no file extension")]
    MissingExtension(String),
    /// Extension not on the allow list.
    #[error("unsupported file type .{ext}; allowed: {allowed}")]
    UnsupportedType { ext: String, allowed: String },
    /// Larger than the configured limit.
    #[error("file is {} which exceeds the {} limit", format_file_size(*size), format_file_size(*max))]
    TooLarge { size: u64, max: u64 },
}

/// Why the form may not be submitted yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter some text to summarize.")]
    EmptyText,
    #[error("Text is too short for meaningful summarization ({words} of {min} words).")]
    TooShort { words: usize, min: usize },
    #[error("Please choose a file to upload.")]
    NoFile,
    #[error("Please enter a URL.")]
    EmptyUrl,
    #[error(transparent)]
    File(#[from] FileRejection),
}

/// What the form will submit, once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Trimmed pasted text.
    Text(String),
    /// The first file in the picker.
    File(IncomingFile),
    /// URL with a scheme.
    Url(String),
}

impl Submission {
    #[must_use]
    pub fn mode(&self) -> InputMode {
        match self {
            Self::Text(_) => InputMode::Text,
            Self::File(_) => InputMode::File,
            Self::Url(_) => InputMode::Url,
        }
    }
}

/// Check a file against the configured type and size rules.
///
/// # Errors
///
/// Returns the first rule the file breaks.
pub fn validate_file(file: &IncomingFile, config: &FormConfig) -> Result<(), FileRejection> {
    let Some(ext) = file.extension() else {
        return Err(FileRejection::MissingExtension(file.name.clone()));
    };
    if !config.allows_extension(&ext) {
        return Err(FileRejection::UnsupportedType { ext, allowed: config.allowed_extensions.join(", ") });
    }
    if file.size == 0 {
        return Err(FileRejection::Empty(file.name.clone()));
    }
    if file.size > config.max_file_bytes {
        return Err(FileRejection::TooLarge { size: file.size, max: config.max_file_bytes });
    }
    Ok(())
}

/// Whitespace-separated word count.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Counter caption shown under the text area.
#[must_use]
pub fn word_count_label(words: usize) -> String {
    if words == 1 { "1 word".to_owned() } else { format!("{words} words") }
}

/// Prefix `https://` when the address has no http(s) scheme.
#[must_use]
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

/// Decide whether the active mode has enough content to submit.
///
/// Only the active mode's content is considered; the others are empty by
/// construction.
///
/// # Errors
///
/// Returns a [`SubmitError`] describing what the user still needs to supply.
pub fn validate_submission(
    mode: InputMode,
    text: &str,
    file: Option<&IncomingFile>,
    url: &str,
    config: &FormConfig,
) -> Result<Submission, SubmitError> {
    match mode {
        InputMode::Text => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(SubmitError::EmptyText);
            }
            let words = count_words(trimmed);
            if words < config.min_words {
                return Err(SubmitError::TooShort { words, min: config.min_words });
            }
            Ok(Submission::Text(trimmed.to_owned()))
        }
        InputMode::File => {
            let file = file.ok_or(SubmitError::NoFile)?;
            validate_file(file, config)?;
            Ok(Submission::File(file.clone()))
        }
        InputMode::Url => {
            if url.trim().is_empty() {
                return Err(SubmitError::EmptyUrl);
            }
            Ok(Submission::Url(normalize_url(url)))
        }
    }
}
