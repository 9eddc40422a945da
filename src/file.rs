//! Incoming file metadata and its display projection.
//!
//! A file reaches the form either through the picker's change event or a drop
//! on the drop-zone. Both sources are converted to [`IncomingFile`] at the DOM
//! boundary (see `util::file_list`), so everything downstream has one path.
//! The binary payload itself never leaves the picker element.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use serde::{Deserialize, Serialize};

use crate::consts::SIZE_UNIT_BASE;

const SIZE_UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Metadata for one file handed to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingFile {
    /// File name as reported by the browser, without any path.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type reported by the browser; empty when unknown.
    #[serde(default)]
    pub content_type: String,
}

impl IncomingFile {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), size, content_type: String::new() }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Lowercased extension after the last `.`, if the name has one.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Text shown in the file name display: `"<name> (<size>)"`.
    #[must_use]
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size))
    }
}

/// Human-readable size with base-1024 units and two decimals above one KB.
///
/// The unit is picked after rounding, so values just under a unit boundary
/// print as `1.00` of the next unit rather than `1024.00` of the current one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(bytes: u64) -> String {
    if (bytes as f64) < SIZE_UNIT_BASE {
        return format!("{bytes} Bytes");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= SIZE_UNIT_BASE && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_UNIT_BASE;
        unit += 1;
    }
    // Promote when two-decimal rounding would print a full unit, e.g. 1023.999 KB.
    if (value * 100.0).round() / 100.0 >= SIZE_UNIT_BASE && unit < SIZE_UNITS.len() - 1 {
        value /= SIZE_UNIT_BASE;
        unit += 1;
    }
    format!("{value:.2} {}", SIZE_UNITS[unit])
}
