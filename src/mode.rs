//! Input mode: the three mutually exclusive ways content reaches the form.
//!
//! The mode identifiers (`text`, `file`, `url`) are part of the DOM contract:
//! they appear in the hidden field, in each button's `data-method` attribute,
//! and as the prefix of each section id.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a mode identifier is not one of `text`, `file`, `url`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown input mode: {0:?}")]
pub struct ParseModeError(pub String);

/// Which input method is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Pasted text (default at page load).
    #[default]
    Text,
    /// Uploaded file, via dialog or drag-and-drop.
    File,
    /// Web page address.
    Url,
}

impl InputMode {
    /// All modes in display order.
    pub const ALL: [Self; 3] = [Self::Text, Self::File, Self::Url];

    /// Literal identifier used in the hidden field and `data-method`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::File => "file",
            Self::Url => "url",
        }
    }

    /// Id of the section shown while this mode is active.
    #[must_use]
    pub fn section_id(self) -> &'static str {
        match self {
            Self::Text => "textInput",
            Self::File => "fileInput",
            Self::Url => "urlInput",
        }
    }

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Paste Text",
            Self::File => "Upload File",
            Self::Url => "From URL",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "file" => Ok(Self::File),
            "url" => Ok(Self::Url),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}
