//! Note repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered note collection and id assignment.
//! - Reject invalid writes before they touch the collection.
//!
//! # Invariants
//! - Ids are pairwise distinct for the lifetime of a repository: the id
//!   counter only moves forward and removed ids are never handed out again.
//! - Insertion order is the iteration order; removal keeps the relative order
//!   of the remaining notes.
//! - A failed write leaves both the collection and the id counter untouched.

use crate::model::note::{Note, NoteId};
use crate::model::validation::{validate_note_fields, NoteValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_NOTE_ID: NoteId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note writes and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(NoteValidationError),
    NotFound(NoteId),
    /// Every `NoteId` value has already been handed out.
    IdSpaceExhausted,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::IdSpaceExhausted => write!(f, "note id space exhausted"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::IdSpaceExhausted => None,
        }
    }
}

impl From<NoteValidationError> for RepoError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Validates and appends a new note, returning it with its assigned id.
    fn insert_note(&mut self, header: &str, description: &str) -> RepoResult<Note>;
    /// Validates and replaces header/description of an existing note.
    fn replace_note(&mut self, id: NoteId, header: &str, description: &str) -> RepoResult<Note>;
    /// Gets one note by id.
    fn get_note(&self, id: NoteId) -> Option<&Note>;
    /// All notes in insertion order.
    fn list_notes(&self) -> &[Note];
    /// Removes one note and returns it.
    fn delete_note(&mut self, id: NoteId) -> RepoResult<Note>;
}

/// Process-lifetime note collection.
#[derive(Debug, Clone)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
    next_id: Option<NoteId>,
}

impl Default for InMemoryNoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: Some(FIRST_NOTE_ID),
        }
    }

    /// Id the next successful insert will receive, if any is left.
    #[cfg(test)]
    fn peek_next_id(&self) -> Option<NoteId> {
        self.next_id
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteRepository for InMemoryNoteRepository {
    fn insert_note(&mut self, header: &str, description: &str) -> RepoResult<Note> {
        validate_note_fields(header, description)?;
        let id = self.next_id.ok_or(RepoError::IdSpaceExhausted)?;

        let note = Note::new(id, header, description);
        self.notes.push(note.clone());
        self.next_id = id.checked_add(1);
        Ok(note)
    }

    fn replace_note(&mut self, id: NoteId, header: &str, description: &str) -> RepoResult<Note> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        validate_note_fields(header, description)?;

        let note = &mut self.notes[index];
        note.header = header.to_string();
        note.description = description.to_string();
        Ok(note.clone())
    }

    fn get_note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    fn list_notes(&self) -> &[Note] {
        &self.notes
    }

    fn delete_note(&mut self, id: NoteId) -> RepoResult<Note> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.notes.remove(index))
    }
}
