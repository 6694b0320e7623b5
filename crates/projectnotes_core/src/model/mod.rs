//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record shared by every screen.
//! - Own the header/description acceptance rules.
//!
//! # Invariants
//! - Every note is identified by a store-assigned `NoteId`.
//! - A note resident in the store always passes `validate_note_fields`.

pub mod note;
pub mod validation;
