//! Repository layer for the note collection.
//!
//! # Responsibility
//! - Define the data access contract the note service is written against.
//! - Keep collection and id bookkeeping out of the service.
//!
//! # Invariants
//! - Repository writes must pass `validate_note_fields` before mutating.
//! - Repository APIs return semantic errors (`NotFound`) instead of panicking.

pub mod note_repo;
