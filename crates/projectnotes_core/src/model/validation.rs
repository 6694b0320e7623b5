//! Header/description acceptance rules.
//!
//! # Responsibility
//! - Decide whether a candidate note is storable.
//! - Produce exactly one reason per rejected candidate.
//!
//! # Invariants
//! - Checks run in a fixed order and the first failing check wins.
//! - Length checks run before the blank-field check, so a short but
//!   non-blank header reports "header too short".
//! - Lengths count UTF-16 code units, so a character outside the Basic
//!   Multilingual Plane (most emoji) counts as two.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum header length in characters.
pub const HEADER_MIN_CHARS: usize = 3;
/// Maximum header length in characters.
pub const HEADER_MAX_CHARS: usize = 20;
/// Minimum description length in characters.
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// Maximum description length accepted by the store.
pub const DESCRIPTION_MAX_CHARS: usize = 100;
/// Input-field cap applied by editors before a submit is attempted.
pub const DESCRIPTION_INPUT_MAX_CHARS: usize = 200;

/// Rejection reason for a candidate note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteValidationError {
    HeaderTooShort,
    DescriptionTooShort,
    HeaderTooLong,
    DescriptionTooLong,
    /// Either field is empty or whitespace-only.
    FieldsRequired,
}

impl NoteValidationError {
    /// Short reason string returned to callers.
    pub fn reason(self) -> &'static str {
        match self {
            Self::HeaderTooShort => "header too short",
            Self::DescriptionTooShort => "description too short",
            Self::HeaderTooLong => "header too long",
            Self::DescriptionTooLong => "description too long",
            Self::FieldsRequired => "both fields required",
        }
    }

    /// Stable snake_case code for log lines.
    pub fn code(self) -> &'static str {
        match self {
            Self::HeaderTooShort => "header_too_short",
            Self::DescriptionTooShort => "description_too_short",
            Self::HeaderTooLong => "header_too_long",
            Self::DescriptionTooLong => "description_too_long",
            Self::FieldsRequired => "fields_required",
        }
    }

    /// Sentence shown under the add/edit form.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::HeaderTooShort => "Header must be at least 3 characters",
            Self::DescriptionTooShort => "Description must be at least 10 characters",
            Self::HeaderTooLong => "Header must be at most 20 characters",
            Self::DescriptionTooLong => "Description must be at most 100 characters",
            Self::FieldsRequired => "Both header and description is needed",
        }
    }
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

impl Error for NoteValidationError {}

/// Validates one candidate header/description pair.
///
/// # Errors
/// Returns the first failing rule in this order: header too short,
/// description too short, header too long, description too long,
/// blank field.
pub fn validate_note_fields(header: &str, description: &str) -> Result<(), NoteValidationError> {
    let header_len = text_length(header);
    let description_len = text_length(description);

    if header_len < HEADER_MIN_CHARS {
        return Err(NoteValidationError::HeaderTooShort);
    }
    if description_len < DESCRIPTION_MIN_CHARS {
        return Err(NoteValidationError::DescriptionTooShort);
    }
    if header_len > HEADER_MAX_CHARS {
        return Err(NoteValidationError::HeaderTooLong);
    }
    if description_len > DESCRIPTION_MAX_CHARS {
        return Err(NoteValidationError::DescriptionTooLong);
    }
    if header.trim().is_empty() || description.trim().is_empty() {
        return Err(NoteValidationError::FieldsRequired);
    }

    Ok(())
}

/// Returns whether `text` fits the description input field.
pub fn within_description_input_limit(text: &str) -> bool {
    text_length(text) <= DESCRIPTION_INPUT_MAX_CHARS
}

/// Length as editors report it: UTF-16 code units.
pub fn text_length(text: &str) -> usize {
    text.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::{
        text_length, validate_note_fields, within_description_input_limit, NoteValidationError,
    };

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(validate_note_fields("abc", "1234567890"), Ok(()));
        assert_eq!(
            validate_note_fields(&"h".repeat(20), &"d".repeat(100)),
            Ok(())
        );
    }

    #[test]
    fn blank_but_long_enough_fields_are_required() {
        assert_eq!(
            validate_note_fields("   ", "1234567890"),
            Err(NoteValidationError::FieldsRequired)
        );
        assert_eq!(
            validate_note_fields("abc", "          "),
            Err(NoteValidationError::FieldsRequired)
        );
    }

    #[test]
    fn bmp_characters_count_once() {
        // 3 chars, 6 bytes.
        assert_eq!(validate_note_fields("äöü", "éééééééééé"), Ok(()));
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let emoji = "\u{1F600}";
        assert_eq!(text_length(emoji), 2);

        // Header: 3 and 20 units pass, 2 and 21 fail.
        assert_eq!(validate_note_fields(&format!("{emoji}a"), "1234567890"), Ok(()));
        assert_eq!(
            validate_note_fields(emoji, "1234567890"),
            Err(NoteValidationError::HeaderTooShort)
        );
        assert_eq!(validate_note_fields(&emoji.repeat(10), "1234567890"), Ok(()));
        assert_eq!(
            validate_note_fields(&format!("{}a", emoji.repeat(10)), "1234567890"),
            Err(NoteValidationError::HeaderTooLong)
        );

        // Description: 10 and 100 units pass, 9 and 101 fail.
        assert_eq!(validate_note_fields("abc", &emoji.repeat(5)), Ok(()));
        assert_eq!(
            validate_note_fields("abc", &format!("{}a", emoji.repeat(4))),
            Err(NoteValidationError::DescriptionTooShort)
        );
        assert_eq!(validate_note_fields("abc", &emoji.repeat(50)), Ok(()));
        assert_eq!(
            validate_note_fields("abc", &format!("{}a", emoji.repeat(50))),
            Err(NoteValidationError::DescriptionTooLong)
        );

        // Input cap: 200 units fit, 201 do not.
        assert!(within_description_input_limit(&emoji.repeat(100)));
        assert!(!within_description_input_limit(&format!("{}a", emoji.repeat(100))));
    }

    #[test]
    fn description_input_limit_is_200_chars() {
        assert!(within_description_input_limit(&"x".repeat(200)));
        assert!(!within_description_input_limit(&"x".repeat(201)));
    }

    #[test]
    fn display_uses_reason_string() {
        assert_eq!(
            NoteValidationError::DescriptionTooLong.to_string(),
            "description too long"
        );
    }
}
