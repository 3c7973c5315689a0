#![forbid(unsafe_code)]

//! Frame ingestion: one [`Ops`] buffer in, one [`FrameRegistrations`] out.
//!
//! # Scoping
//!
//! Ingestion keeps an explicit stack of open [`ScopeId`]s. `Save` pushes,
//! `Load(id)` pops back to and including `id`, closing any scopes nested
//! inside it that were left open. The stack only feeds the diagnostic
//! `scope_path` of each [`Registration`]; it never decides whether an
//! operation counts toward the frame.
//!
//! # Invariants
//!
//! 1. Registrations keep encounter order; a tag registered twice collapses
//!    to its last occurrence (last-seen position, hint, and scope path).
//! 2. The last `Focus` op wins; the last `SoftKeyboard` op wins.
//! 3. An immediate `Invalidate` dominates timed ones; otherwise the earliest
//!    deadline wins.
//! 4. A `Load` naming a scope that is not open is ignored.

use ahash::AHashMap;
use smallvec::SmallVec;
use web_time::Instant;

use tessera_core::event::InputHint;
use tessera_core::op::{Op, Ops, ScopeId};
use tessera_core::tag::Tag;

/// Stack of open scopes at the point a registration was declared.
pub type ScopePath = SmallVec<[ScopeId; 4]>;

/// One handler declared for this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Handler identity.
    pub tag: Tag,
    /// Open scopes, outermost first.
    pub scope_path: ScopePath,
    /// Keyboard layout hint.
    pub hint: InputHint,
}

/// Redraw request accumulated from `Invalidate` ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidateRequest {
    /// Redraw as soon as possible.
    Immediate,
    /// Redraw no later than the given instant.
    At(Instant),
}

impl InvalidateRequest {
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::At(a), Self::At(b)) => Self::At(a.min(b)),
            _ => Self::Immediate,
        }
    }
}

/// Everything one frame declared, flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameRegistrations {
    /// Registered handlers in (last-seen) encounter order, unique by tag.
    registrations: Vec<Registration>,
    /// Position of each tag in `registrations`.
    index: AHashMap<Tag, usize>,
    /// `None`: no focus op this frame. `Some(None)`: clear focus.
    pub focus_request: Option<Option<Tag>>,
    /// `None`: no opinion on keyboard visibility.
    pub keyboard_request: Option<bool>,
    /// Redraw requested by the frame itself.
    pub invalidate: Option<InvalidateRequest>,
}

impl FrameRegistrations {
    /// Registered handlers in (last-seen) encounter order, unique by tag.
    #[must_use]
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Registered tags in order.
    pub fn tags(&self) -> impl ExactSizeIterator<Item = Tag> + '_ {
        self.registrations.iter().map(|r| r.tag)
    }

    /// Whether `tag` is registered this frame.
    #[must_use]
    pub fn contains(&self, tag: Tag) -> bool {
        self.index.contains_key(&tag)
    }

    /// The registration record for `tag`.
    #[must_use]
    pub fn get(&self, tag: Tag) -> Option<&Registration> {
        self.index.get(&tag).and_then(|&i| self.registrations.get(i))
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

/// Walk `ops` once and flatten it into a [`FrameRegistrations`].
#[must_use]
pub fn ingest(ops: &Ops) -> FrameRegistrations {
    let mut scopes: ScopePath = SmallVec::new();
    // Slots keep encounter order; a duplicate empties its earlier slot.
    let mut slots: Vec<Option<Registration>> = Vec::new();
    let mut index: AHashMap<Tag, usize> = AHashMap::new();
    let mut frame = FrameRegistrations::default();

    for op in ops {
        match *op {
            Op::Save(id) => scopes.push(id),
            Op::Load(id) => match scopes.iter().rposition(|&open| open == id) {
                Some(pos) => scopes.truncate(pos),
                None => {
                    tracing::warn!(
                        target: "tessera.frame",
                        scope = id.raw(),
                        depth = scopes.len(),
                        "load of a scope that is not open; ignored"
                    );
                }
            },
            Op::Input { tag, hint } => {
                if let Some(prev) = index.insert(tag, slots.len()) {
                    slots[prev] = None;
                }
                slots.push(Some(Registration {
                    tag,
                    scope_path: scopes.clone(),
                    hint,
                }));
            }
            Op::Focus { tag } => frame.focus_request = Some(tag),
            Op::SoftKeyboard { show } => frame.keyboard_request = Some(show),
            Op::Invalidate { at } => {
                let req = at.map_or(InvalidateRequest::Immediate, InvalidateRequest::At);
                frame.invalidate = Some(match frame.invalidate {
                    Some(prev) => prev.merge(req),
                    None => req,
                });
            }
        }
    }

    if !scopes.is_empty() {
        tracing::trace!(
            target: "tessera.frame",
            open_scopes = scopes.len(),
            "frame ended with open scopes"
        );
    }

    frame.registrations = slots.into_iter().flatten().collect();
    frame.index = frame
        .registrations
        .iter()
        .enumerate()
        .map(|(i, r)| (r.tag, i))
        .collect();
    frame
}
