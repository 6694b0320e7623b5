//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the store API screens consume.
//! - Keep presentation layers decoupled from collection details.

pub mod events;
pub mod note_service;
