//! Typed screen requests and their route strings.
//!
//! # Responsibility
//! - Map route strings (`detailedViewListItem/3`) to typed requests and back.
//! - Decide where a request lands when its note no longer exists.
//!
//! # Invariants
//! - `parse_route(request.route())` yields `request` for every request.
//! - Detail/edit requests for missing notes resolve to the notes list.

use crate::model::note::NoteId;
use crate::repo::note_repo::NoteRepository;
use crate::service::note_service::NoteService;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const ROUTE_NOTES_LIST: &str = "notesList";
const ROUTE_ADD_NOTE: &str = "addListItem";
const ROUTE_NOTE_DETAIL: &str = "detailedViewListItem";
const ROUTE_EDIT_NOTE: &str = "editListItem";

static NOTE_ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(detailedViewListItem|editListItem)/([^/]*)$").expect("valid note route regex")
});

/// Screen the presentation layer is asked to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScreenRequest {
    /// Start destination.
    #[default]
    NotesList,
    AddNote,
    NoteDetail(NoteId),
    EditNote(NoteId),
}

impl ScreenRequest {
    /// Route string for this request.
    pub fn route(self) -> String {
        match self {
            Self::NotesList => ROUTE_NOTES_LIST.to_string(),
            Self::AddNote => ROUTE_ADD_NOTE.to_string(),
            Self::NoteDetail(id) => format!("{ROUTE_NOTE_DETAIL}/{id}"),
            Self::EditNote(id) => format!("{ROUTE_EDIT_NOTE}/{id}"),
        }
    }

    /// Note targeted by this request, if any.
    pub fn note_id(self) -> Option<NoteId> {
        match self {
            Self::NoteDetail(id) | Self::EditNote(id) => Some(id),
            Self::NotesList | Self::AddNote => None,
        }
    }

    /// Returns the request to actually show given the current store state.
    ///
    /// Detail and edit requests for a note that is gone fall back to the list.
    pub fn resolve<R: NoteRepository>(self, store: &NoteService<R>) -> Self {
        match self.note_id() {
            Some(id) if !store.contains(id) => {
                log::debug!(
                    "event=route_resolve module=nav status=not_found note_id={id} fallback={ROUTE_NOTES_LIST}"
                );
                Self::NotesList
            }
            _ => self,
        }
    }
}

/// Route parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    Unknown(String),
    InvalidNoteId(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(route) => write!(f, "unknown route: `{route}`"),
            Self::InvalidNoteId(value) => write!(f, "invalid note id in route: `{value}`"),
        }
    }
}

impl Error for RouteError {}

/// Parses one route string.
pub fn parse_route(route: &str) -> Result<ScreenRequest, RouteError> {
    let trimmed = route.trim();
    match trimmed {
        ROUTE_NOTES_LIST => return Ok(ScreenRequest::NotesList),
        ROUTE_ADD_NOTE => return Ok(ScreenRequest::AddNote),
        _ => {}
    }

    let caps = NOTE_ROUTE_RE
        .captures(trimmed)
        .ok_or_else(|| RouteError::Unknown(trimmed.to_string()))?;
    let raw_id = &caps[2];
    let id = raw_id
        .parse::<NoteId>()
        .map_err(|_| RouteError::InvalidNoteId(raw_id.to_string()))?;

    if &caps[1] == ROUTE_NOTE_DETAIL {
        Ok(ScreenRequest::NoteDetail(id))
    } else {
        Ok(ScreenRequest::EditNote(id))
    }
}
