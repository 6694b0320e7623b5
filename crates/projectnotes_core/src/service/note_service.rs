//! Note store use-case service.
//!
//! # Responsibility
//! - Provide the list/get/add/update/remove API every screen talks to.
//! - Notify subscribers after each applied change.
//! - Emit metadata-only log lines for mutations and rejections.
//!
//! # Invariants
//! - Every write goes through repository validation; the service never
//!   mutates the collection directly.
//! - Subscribers see exactly one event per successful mutation and none for
//!   failed calls.
//! - Note text is never written to logs.
//!
//! # Threading
//! - Single-owner: listeners are plain `FnMut` closures, so the service is
//!   neither `Send` nor `Sync`. Hosts that share it must serialize access.

use crate::model::note::{Note, NoteId};
use crate::model::validation::NoteValidationError;
use crate::repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError};
use crate::service::events::{EventBus, NoteEvent, SubscriptionId};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store error returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// No note with this id is in the store.
    NotFound(NoteId),
    /// Candidate fields were rejected; carries the first failing rule.
    Validation(NoteValidationError),
    /// The store cannot hand out another unique id.
    IdSpaceExhausted,
}

impl NoteStoreError {
    /// Reason string for validation failures.
    pub fn validation_reason(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.reason()),
            _ => None,
        }
    }
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::IdSpaceExhausted => write!(f, "note id space exhausted"),
        }
    }
}

impl Error for NoteStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for NoteStoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::IdSpaceExhausted => Self::IdSpaceExhausted,
        }
    }
}

/// Note store backed by the process-lifetime collection.
pub type NoteStore = NoteService<InMemoryNoteRepository>;

/// Note store facade over a repository implementation.
#[derive(Debug)]
pub struct NoteService<R: NoteRepository> {
    repo: R,
    events: EventBus,
}

impl Default for NoteService<InMemoryNoteRepository> {
    fn default() -> Self {
        Self::new(InMemoryNoteRepository::new())
    }
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            events: EventBus::new(),
        }
    }

    /// All notes in insertion order.
    pub fn list(&self) -> &[Note] {
        self.repo.list_notes()
    }

    /// Gets one note by id.
    pub fn get(&self, id: NoteId) -> Result<&Note, NoteStoreError> {
        self.repo.get_note(id).ok_or(NoteStoreError::NotFound(id))
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.repo.get_note(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.repo.list_notes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list_notes().is_empty()
    }

    /// Validates and appends a new note.
    ///
    /// # Errors
    /// - `Validation` with the first failing rule; nothing is stored.
    /// - `IdSpaceExhausted` once every `NoteId` has been handed out.
    pub fn add(&mut self, header: &str, description: &str) -> Result<Note, NoteStoreError> {
        match self.repo.insert_note(header, description) {
            Ok(note) => {
                info!(
                    "event=note_add module=store status=ok note_id={} count={}",
                    note.id,
                    self.len()
                );
                self.publish(NoteEvent::Added(note.clone()));
                Ok(note)
            }
            Err(err) => Err(self.reject("note_add", None, err)),
        }
    }

    /// Replaces header/description of an existing note, keeping its id.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the store (checked first).
    /// - `Validation` with the first failing rule; the note is unchanged.
    pub fn update(
        &mut self,
        id: NoteId,
        header: &str,
        description: &str,
    ) -> Result<Note, NoteStoreError> {
        match self.repo.replace_note(id, header, description) {
            Ok(note) => {
                info!("event=note_update module=store status=ok note_id={id}");
                self.publish(NoteEvent::Updated(note.clone()));
                Ok(note)
            }
            Err(err) => Err(self.reject("note_update", Some(id), err)),
        }
    }

    /// Removes one note. Remaining notes keep their ids and order.
    pub fn remove(&mut self, id: NoteId) -> Result<Note, NoteStoreError> {
        match self.repo.delete_note(id) {
            Ok(note) => {
                info!(
                    "event=note_remove module=store status=ok note_id={id} count={}",
                    self.len()
                );
                self.publish(NoteEvent::Removed(note.clone()));
                Ok(note)
            }
            Err(err) => Err(self.reject("note_remove", Some(id), err)),
        }
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&NoteEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(listener)
    }

    /// Removes a change listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn publish(&mut self, event: NoteEvent) {
        debug!(
            "event=note_publish module=store status=ok kind={} note_id={} listeners={}",
            event.name(),
            event.note_id(),
            self.events.listener_count()
        );
        self.events.emit(&event);
    }

    fn reject(&self, event: &str, id: Option<NoteId>, err: RepoError) -> NoteStoreError {
        let id_field = id.map_or_else(|| "none".to_string(), |id| id.to_string());
        match &err {
            RepoError::Validation(reason) => debug!(
                "event={event} module=store status=rejected note_id={id_field} reason={}",
                reason.code()
            ),
            RepoError::NotFound(_) => debug!(
                "event={event} module=store status=not_found note_id={id_field}"
            ),
            RepoError::IdSpaceExhausted => {
                warn!("event={event} module=store status=error reason=id_space_exhausted")
            }
        }
        err.into()
    }
}
