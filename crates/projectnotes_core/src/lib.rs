//! Core domain logic for ProjectNotes.
//! This crate is the single source of truth for note invariants; screens only
//! read through the store and write through its operations.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use form::{FormMode, NoteForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId};
pub use model::validation::{
    validate_note_fields, within_description_input_limit, NoteValidationError,
};
pub use nav::{parse_route, RouteError, ScreenRequest};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::events::{NoteEvent, SubscriptionId};
pub use service::note_service::{NoteService, NoteStore, NoteStoreError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
