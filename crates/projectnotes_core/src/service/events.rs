//! Change notifications for note collection subscribers.

use crate::model::note::{Note, NoteId};
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// One applied change to the note collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteEvent {
    /// A note was appended.
    Added(Note),
    /// A note's header/description were replaced.
    Updated(Note),
    /// A note was removed; carries its last state.
    Removed(Note),
}

impl NoteEvent {
    /// Id of the note the event refers to.
    pub fn note_id(&self) -> NoteId {
        match self {
            Self::Added(note) | Self::Updated(note) | Self::Removed(note) => note.id,
        }
    }

    /// Stable event name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added(_) => "note_added",
            Self::Updated(_) => "note_updated",
            Self::Removed(_) => "note_removed",
        }
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&NoteEvent)>;

/// Ordered listener registry.
///
/// Listeners are called synchronously in subscription order.
#[derive(Default)]
pub struct EventBus {
    listeners: BTreeMap<SubscriptionId, Listener>,
    next_id: u64,
}

impl Debug for EventBus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&NoteEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Box::new(listener));
        id
    }

    /// Removes one listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Delivers `event` to every listener.
    pub fn emit(&mut self, event: &NoteEvent) {
        for listener in self.listeners.values_mut() {
            listener(event);
        }
    }
}
