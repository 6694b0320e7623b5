use projectnotes_core::{validate_note_fields, NoteStore, NoteStoreError, NoteValidationError};

fn add_reason(header: &str, description: &str) -> Option<&'static str> {
    let mut store = NoteStore::default();
    match store.add(header, description) {
        Ok(_) => None,
        Err(err) => err.validation_reason(),
    }
}

#[test]
fn add_enforces_length_boundaries() {
    assert_eq!(add_reason("ab", "1234567890"), Some("header too short"));
    assert_eq!(add_reason("abc", "123456789"), Some("description too short"));
    assert_eq!(
        add_reason(&"a".repeat(21), "1234567890"),
        Some("header too long")
    );
    assert_eq!(
        add_reason("abc", &"1".repeat(101)),
        Some("description too long")
    );
    assert_eq!(add_reason("abc", "1234567890"), None);
}

#[test]
fn header_check_runs_before_description_check() {
    assert_eq!(add_reason("a", "1"), Some("header too short"));
}

#[test]
fn short_checks_run_before_long_checks() {
    // Long header, short description: description-too-short wins.
    assert_eq!(
        validate_note_fields(&"h".repeat(30), "short"),
        Err(NoteValidationError::DescriptionTooShort)
    );
    // Long header, long description: header-too-long wins.
    assert_eq!(
        validate_note_fields(&"h".repeat(30), &"d".repeat(150)),
        Err(NoteValidationError::HeaderTooLong)
    );
}

#[test]
fn short_non_blank_header_reports_too_short_not_required() {
    assert_eq!(
        validate_note_fields("  ", "1234567890"),
        Err(NoteValidationError::HeaderTooShort)
    );
}

#[test]
fn whitespace_only_fields_fall_through_to_required() {
    let mut store = NoteStore::default();
    let err = store.add("     ", "valid description").unwrap_err();
    assert_eq!(
        err,
        NoteStoreError::Validation(NoteValidationError::FieldsRequired)
    );
    assert_eq!(err.to_string(), "both fields required");
}

#[test]
fn description_between_100_and_200_chars_is_rejected_by_store() {
    assert_eq!(
        add_reason("abc", &"1".repeat(150)),
        Some("description too long")
    );
}

#[test]
fn user_messages_match_form_wording() {
    assert_eq!(
        NoteValidationError::HeaderTooShort.user_message(),
        "Header must be at least 3 characters"
    );
    assert_eq!(
        NoteValidationError::FieldsRequired.user_message(),
        "Both header and description is needed"
    );
}

#[test]
fn lengths_count_utf16_units_like_the_editor() {
    let emoji = "\u{1F600}";

    // One emoji plus one letter is three units.
    assert_eq!(add_reason(&format!("{emoji}a"), "1234567890"), None);
    // Eleven emoji are 22 units.
    assert_eq!(
        add_reason(&emoji.repeat(11), "1234567890"),
        Some("header too long")
    );

    let mut store = NoteStore::default();
    assert!(store.add(&emoji.repeat(11), "1234567890").is_err());
    assert!(store.is_empty());
}
