//! Note record.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `header`/`description` are only replaced through store updates.

use serde::{Deserialize, Serialize};

/// Store-assigned integer identifier of a note.
///
/// Ids start at 1 and are never handed out twice by the same store.
pub type NoteId = u32;

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier, unique within its store.
    pub id: NoteId,
    /// Short title, 3..=20 characters.
    pub header: String,
    /// Body text, 10..=100 characters.
    pub description: String,
}

impl Note {
    /// Builds a note record. Callers outside the store should not need this;
    /// validation happens on the store's write paths.
    pub fn new(id: NoteId, header: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            header: header.into(),
            description: description.into(),
        }
    }
}
