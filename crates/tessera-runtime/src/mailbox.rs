#![forbid(unsafe_code)]

//! Per-handler FIFO mailboxes.
//!
//! A mailbox exists exactly while its tag is registered: the diff engine
//! creates it on first appearance and discards it (with anything still
//! queued) when the tag disappears from a frame. Draining removes events
//! permanently, so every event is delivered at most once.
//!
//! Mailboxes accept any addressed tag. Whether only the focused handler may
//! receive key input is the caller's policy (see
//! [`Router::queue_key`](crate::router::Router::queue_key)).

use std::collections::VecDeque;

use ahash::AHashMap;
use tessera_core::event::{Event, FocusEvent, InputHint};
use tessera_core::tag::Tag;

/// Outcome of handing an external event to the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delivery {
    /// Appended to the handler's mailbox.
    Queued,
    /// The tag has no mailbox (never registered, or removed); event dropped.
    Unregistered,
    /// The handler already holds the configured maximum of external events;
    /// event dropped.
    Rejected,
    /// Routed delivery found no focused handler; event dropped.
    NoFocus,
}

impl Delivery {
    /// Whether the event was queued.
    #[must_use]
    pub const fn is_queued(self) -> bool {
        matches!(self, Self::Queued)
    }
}

/// Outcome of appending to an addressed mailbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enqueue {
    /// Appended.
    Queued,
    /// No mailbox for the tag.
    Unregistered,
    /// External bound reached.
    Rejected,
}

impl Enqueue {
    /// Whether the event was queued.
    #[must_use]
    pub const fn is_queued(self) -> bool {
        matches!(self, Self::Queued)
    }
}

impl From<Enqueue> for Delivery {
    fn from(outcome: Enqueue) -> Self {
        match outcome {
            Enqueue::Queued => Self::Queued,
            Enqueue::Unregistered => Self::Unregistered,
            Enqueue::Rejected => Self::Rejected,
        }
    }
}

#[derive(Debug)]
struct Mailbox {
    queue: VecDeque<Event>,
    hint: InputHint,
    /// External events currently queued; synthetic ones are not bounded.
    external: usize,
}

/// The set of live mailboxes, keyed by tag.
#[derive(Debug)]
pub struct Mailboxes {
    boxes: AHashMap<Tag, Mailbox>,
    max_queued_events: Option<usize>,
    initial_capacity: usize,
}

impl Default for Mailboxes {
    fn default() -> Self {
        Self::new(None, 4)
    }
}

impl Mailboxes {
    /// Create an empty set. `max_queued_events` bounds external events per
    /// handler; `None` is unbounded.
    #[must_use]
    pub fn new(max_queued_events: Option<usize>, initial_capacity: usize) -> Self {
        Self {
            boxes: AHashMap::new(),
            max_queued_events,
            initial_capacity,
        }
    }

    /// Whether `tag` has a mailbox.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.boxes.contains_key(&tag)
    }

    /// Number of live mailboxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Whether there are no live mailboxes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Tags with a live mailbox, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.boxes.keys().copied()
    }

    /// Events waiting for `tag` (0 for unknown tags).
    #[must_use]
    pub fn pending(&self, tag: Tag) -> usize {
        self.boxes.get(&tag).map_or(0, |mb| mb.queue.len())
    }

    /// Keyboard hint last registered for `tag`.
    #[must_use]
    pub fn hint(&self, tag: Tag) -> Option<InputHint> {
        self.boxes.get(&tag).map(|mb| mb.hint)
    }

    /// Create an empty mailbox. Returns `false` if one already existed.
    pub(crate) fn create(&mut self, tag: Tag, hint: InputHint) -> bool {
        if self.boxes.contains_key(&tag) {
            return false;
        }
        self.boxes.insert(
            tag,
            Mailbox {
                queue: VecDeque::with_capacity(self.initial_capacity),
                hint,
                external: 0,
            },
        );
        true
    }

    /// Discard `tag`'s mailbox. Returns how many undelivered events went
    /// with it, or `None` if there was no mailbox.
    pub(crate) fn remove(&mut self, tag: Tag) -> Option<usize> {
        self.boxes.remove(&tag).map(|mb| mb.queue.len())
    }

    pub(crate) fn set_hint(&mut self, tag: Tag, hint: InputHint) {
        if let Some(mb) = self.boxes.get_mut(&tag) {
            mb.hint = hint;
        }
    }

    /// Append a synthetic focus event. Returns `false` if `tag` has no
    /// mailbox.
    pub(crate) fn push_synthetic(&mut self, tag: Tag, event: FocusEvent) -> bool {
        match self.boxes.get_mut(&tag) {
            Some(mb) => {
                mb.queue.push_back(Event::Focus(event));
                true
            }
            None => false,
        }
    }

    /// Append an externally sourced event to `tag`'s mailbox.
    pub fn enqueue_external(&mut self, tag: Tag, event: Event) -> Enqueue {
        let Some(mb) = self.boxes.get_mut(&tag) else {
            return Enqueue::Unregistered;
        };
        if self.max_queued_events.is_some_and(|max| mb.external >= max) {
            return Enqueue::Rejected;
        }
        mb.queue.push_back(event);
        mb.external += 1;
        Enqueue::Queued
    }

    /// Remove and return every queued event for `tag`, oldest first.
    pub fn drain(&mut self, tag: Tag) -> Vec<Event> {
        match self.boxes.get_mut(&tag) {
            Some(mb) => {
                mb.external = 0;
                mb.queue.drain(..).collect()
            }
            None => Vec::new(),
        }
    }
}
