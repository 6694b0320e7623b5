//! Add/edit form state for note editors.
//!
//! # Responsibility
//! - Hold draft header/description text and the last error message.
//! - Run the submit flow: validate through the store, record the error or
//!   apply the change.
//!
//! # Invariants
//! - A rejected submit never touches the store.
//! - Description drafts never exceed the input-field cap.
//! - A successful add clears the draft; a successful edit keeps it.

use crate::model::note::{Note, NoteId};
use crate::model::validation::within_description_input_limit;
use crate::nav::ScreenRequest;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::{NoteService, NoteStoreError};

/// Which store operation `submit` performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(NoteId),
}

/// Draft state behind the add and edit screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    mode: FormMode,
    header: String,
    description: String,
    error: Option<String>,
}

impl NoteForm {
    /// Empty form for a new note.
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            header: String::new(),
            description: String::new(),
            error: None,
        }
    }

    /// Form prefilled from an existing note.
    pub fn edit<R: NoteRepository>(
        store: &NoteService<R>,
        id: NoteId,
    ) -> Result<Self, NoteStoreError> {
        let note = store.get(id)?;
        Ok(Self {
            mode: FormMode::Edit(id),
            header: note.header.clone(),
            description: note.description.clone(),
            error: None,
        })
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Message to show under the fields, if the last submit failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_header(&mut self, value: impl Into<String>) {
        self.header = value.into();
    }

    /// Replaces the description draft.
    ///
    /// Returns `false` and keeps the old draft when `value` is over the
    /// input-field cap.
    pub fn set_description(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if !within_description_input_limit(&value) {
            return false;
        }
        self.description = value;
        true
    }

    /// Screen to navigate to after a successful submit.
    pub fn completion_target(&self) -> ScreenRequest {
        ScreenRequest::NotesList
    }

    /// Applies the draft to the store.
    ///
    /// # Errors
    /// - `Validation`: the user message is stored in `error()`.
    /// - `NotFound`: the edited note is gone; the caller should leave the
    ///   screen.
    pub fn submit<R: NoteRepository>(
        &mut self,
        store: &mut NoteService<R>,
    ) -> Result<Note, NoteStoreError> {
        let result = match self.mode {
            FormMode::Add => store.add(&self.header, &self.description),
            FormMode::Edit(id) => store.update(id, &self.header, &self.description),
        };

        match result {
            Ok(note) => {
                self.error = None;
                if self.mode == FormMode::Add {
                    self.header.clear();
                    self.description.clear();
                }
                Ok(note)
            }
            Err(err) => {
                self.error = Some(match &err {
                    NoteStoreError::Validation(reason) => reason.user_message().to_string(),
                    other => other.to_string(),
                });
                Err(err)
            }
        }
    }
}
