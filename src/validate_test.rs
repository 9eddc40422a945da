use super::*;

fn config() -> FormConfig {
    FormConfig::default()
}

const TEN_WORDS: &str = "one two three four five six seven eight nine ten";

// =============================================================
// validate_file
// =============================================================

#[test]
fn accepts_allowed_file_within_limit() {
    let file = IncomingFile::new("report.pdf", 2_097_152);
    assert_eq!(validate_file(&file, &config()), Ok(()));
}

#[test]
fn extension_check_is_case_insensitive() {
    let file = IncomingFile::new("NOTES.DOCX", 10);
    assert_eq!(validate_file(&file, &config()), Ok(()));
}

#[test]
fn rejects_unsupported_extension() {
    let file = IncomingFile::new("setup.exe", 10);
    let err = validate_file(&file, &config()).unwrap_err();
    assert_eq!(
        err,
        FileRejection::UnsupportedType { ext: "exe".to_owned(), allowed: "txt, pdf, doc, docx".to_owned() }
    );
    assert_eq!(err.to_string(), "unsupported file type .exe; allowed: txt, pdf, doc, docx");
}

#[test]
fn rejects_missing_extension() {
    let file = IncomingFile::new("Makefile", 10);
    assert_eq!(validate_file(&file, &config()), Err(FileRejection::MissingExtension("Makefile".to_owned())));
}

#[test]
fn rejects_empty_file() {
    let file = IncomingFile::new("blank.txt", 0);
    assert_eq!(validate_file(&file, &config()), Err(FileRejection::Empty("blank.txt".to_owned())));
}

#[test]
fn size_limit_is_inclusive() {
    let max = config().max_file_bytes;
    assert_eq!(validate_file(&IncomingFile::new("a.txt", max), &config()), Ok(()));
    let err = validate_file(&IncomingFile::new("a.txt", max + 1), &config()).unwrap_err();
    assert_eq!(err, FileRejection::TooLarge { size: max + 1, max });
}

#[test]
fn too_large_message_is_human_readable() {
    let err = FileRejection::TooLarge { size: 32 * 1024 * 1024, max: 16 * 1024 * 1024 };
    assert_eq!(err.to_string(), "file is 32.00 MB which exceeds the 16.00 MB limit");
}

// =============================================================
// Word counting
// =============================================================

#[test]
fn count_words_splits_on_any_whitespace() {
    assert_eq!(count_words(""), 0);
    assert_eq!(count_words("   "), 0);
    assert_eq!(count_words("a  b\tc\nd"), 4);
}

#[test]
fn word_count_label_pluralizes() {
    assert_eq!(word_count_label(0), "0 words");
    assert_eq!(word_count_label(1), "1 word");
    assert_eq!(word_count_label(42), "42 words");
}

// =============================================================
// normalize_url
// =============================================================

#[test]
fn normalize_url_keeps_existing_scheme() {
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url(" https://example.com/a "), "https://example.com/a");
}

#[test]
fn normalize_url_adds_https() {
    assert_eq!(normalize_url("example.com/post"), "https://example.com/post");
}

// =============================================================
// validate_submission
// =============================================================

#[test]
fn text_submission_requires_content() {
    assert_eq!(validate_submission(InputMode::Text, "  ", None, "", &config()), Err(SubmitError::EmptyText));
}

#[test]
fn text_submission_requires_min_words() {
    assert_eq!(
        validate_submission(InputMode::Text, "too short", None, "", &config()),
        Err(SubmitError::TooShort { words: 2, min: 10 })
    );
}

#[test]
fn text_submission_trims() {
    let text = format!("  {TEN_WORDS}\n");
    assert_eq!(
        validate_submission(InputMode::Text, &text, None, "", &config()),
        Ok(Submission::Text(TEN_WORDS.to_owned()))
    );
}

#[test]
fn file_submission_requires_file() {
    assert_eq!(validate_submission(InputMode::File, "", None, "", &config()), Err(SubmitError::NoFile));
}

#[test]
fn file_submission_propagates_rejection() {
    let file = IncomingFile::new("virus.exe", 10);
    let err = validate_submission(InputMode::File, "", Some(&file), "", &config()).unwrap_err();
    assert!(matches!(err, SubmitError::File(FileRejection::UnsupportedType { .. })));
}

#[test]
fn file_submission_returns_file() {
    let file = IncomingFile::new("notes.txt", 100);
    let submission = validate_submission(InputMode::File, "", Some(&file), "", &config()).unwrap();
    assert_eq!(submission.mode(), InputMode::File);
    assert_eq!(submission, Submission::File(file));
}

#[test]
fn url_submission_requires_address() {
    assert_eq!(validate_submission(InputMode::Url, "", None, " ", &config()), Err(SubmitError::EmptyUrl));
}

#[test]
fn url_submission_normalizes() {
    assert_eq!(
        validate_submission(InputMode::Url, "", None, "example.com", &config()),
        Ok(Submission::Url("https://example.com".to_owned()))
    );
}

#[test]
fn only_active_mode_is_checked() {
    // Text content is ignored while url mode is active.
    let result = validate_submission(InputMode::Url, TEN_WORDS, None, "http://a.b", &config());
    assert_eq!(result, Ok(Submission::Url("http://a.b".to_owned())));
}
