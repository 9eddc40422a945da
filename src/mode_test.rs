use super::*;

// =============================================================
// Identifiers
// =============================================================

#[test]
fn default_mode_is_text() {
    assert_eq!(InputMode::default(), InputMode::Text);
}

#[test]
fn identifiers_match_dom_contract() {
    assert_eq!(InputMode::Text.as_str(), "text");
    assert_eq!(InputMode::File.as_str(), "file");
    assert_eq!(InputMode::Url.as_str(), "url");
}

#[test]
fn section_ids_follow_mode_prefix() {
    for mode in InputMode::ALL {
        assert_eq!(mode.section_id(), format!("{}Input", mode.as_str()));
    }
}

#[test]
fn display_uses_identifier() {
    assert_eq!(InputMode::Url.to_string(), "url");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_accepts_every_identifier() {
    for mode in InputMode::ALL {
        assert_eq!(mode.as_str().parse::<InputMode>(), Ok(mode));
    }
}

#[test]
fn parse_rejects_unknown_identifier() {
    let err = "ftp".parse::<InputMode>().unwrap_err();
    assert_eq!(err, ParseModeError("ftp".to_owned()));
    assert_eq!(err.to_string(), "unknown input mode: \"ftp\"");
}

#[test]
fn parse_is_case_sensitive() {
    assert!("Text".parse::<InputMode>().is_err());
}

#[test]
fn serde_uses_lowercase_identifiers() {
    assert_eq!(serde_json::to_string(&InputMode::File).unwrap(), "\"file\"");
    let mode: InputMode = serde_json::from_str("\"url\"").unwrap();
    assert_eq!(mode, InputMode::Url);
}
