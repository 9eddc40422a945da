//! Shared constants: DOM contract identifiers, CSS classes, and default limits.

// ── Element ids ─────────────────────────────────────────────────

/// Hidden field mirroring the active input mode.
pub const HIDDEN_MODE_FIELD_ID: &str = "inputMethod";

/// Form field name of the hidden mode field.
pub const HIDDEN_MODE_FIELD_NAME: &str = "input_method";

/// Text area for pasted text.
pub const TEXT_FIELD_ID: &str = "text_input";

/// Native file picker element.
pub const FILE_PICKER_ID: &str = "file";

/// URL input field.
pub const URL_FIELD_ID: &str = "url_input";

/// Container accepting drops and click-to-browse.
pub const DROP_ZONE_ID: &str = "fileUploadArea";

/// Container showing the selected file name and size.
pub const FILE_NAME_DISPLAY_ID: &str = "fileName";

/// Summary length select; also its form field name.
pub const SUMMARY_LENGTH_FIELD_ID: &str = "summary_length";

/// Model select; also its form field name.
pub const MODEL_TYPE_FIELD_ID: &str = "model_type";

/// Word counter under the text area.
pub const WORD_COUNT_ID: &str = "wordCount";

/// Inline JSON block holding page-level [`crate::config::FormConfig`] overrides.
pub const CONFIG_SCRIPT_ID: &str = "upload-form-config";

// ── CSS classes ─────────────────────────────────────────────────

// State classes (`active`, `hidden`, `dragover`, `show`) are bound with
// `class:` directives in the components.

pub const MODE_BUTTON_CLASS: &str = "method-btn";
pub const INPUT_SECTION_CLASS: &str = "input-section";

// ── Limits ──────────────────────────────────────────────────────

/// Largest accepted upload (16 MiB), matching the server's content-length cap.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 16 * 1024 * 1024;

/// Extensions the server knows how to extract text from.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["txt", "pdf", "doc", "docx"];

/// Minimum words for pasted text to be worth summarizing.
pub const DEFAULT_MIN_WORDS: usize = 10;

/// Summary lengths offered, in sentences.
pub const DEFAULT_SUMMARY_LENGTHS: &[u32] = &[3, 5, 7, 10];

/// Summary length selected at page load.
pub const DEFAULT_SUMMARY_LENGTH: u32 = 3;

/// Summarization models the server accepts.
pub const DEFAULT_MODEL_TYPES: &[&str] = &["bart", "t5", "legal", "extractive"];

/// Model selected at page load.
pub const DEFAULT_MODEL_TYPE: &str = "bart";

/// Endpoint the native form posts to.
pub const DEFAULT_FORM_ACTION: &str = "/summarize";

/// Step between file size units.
pub const SIZE_UNIT_BASE: f64 = 1024.0;
