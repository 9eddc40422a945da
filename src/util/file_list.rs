//! Conversion from browser file lists to [`IncomingFile`].
//!
//! The picker's `files` and a drop's `dataTransfer.files` are both a
//! `FileList`, so one converter serves both ingestion paths.

#[cfg(test)]
#[path = "file_list_test.rs"]
mod file_list_test;

use crate::file::IncomingFile;

/// Convert a JS byte count (an `f64`) to `u64`, treating NaN and negatives as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn size_from_js(size: f64) -> u64 {
    if size.is_finite() && size > 0.0 { size as u64 } else { 0 }
}

/// Build an [`IncomingFile`] from the raw values a `web_sys::File` exposes.
#[must_use]
pub fn incoming_from_parts(name: String, size: f64, content_type: String) -> IncomingFile {
    IncomingFile { name, size: size_from_js(size), content_type }
}

/// Every file in `list`, in order.
pub fn incoming_files(list: Option<&web_sys::FileList>) -> Vec<IncomingFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| incoming_from_parts(file.name(), file.size(), file.type_()))
        .collect()
}
