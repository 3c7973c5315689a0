#![forbid(unsafe_code)]

//! Registration diff engine and the persisted router state.
//!
//! Each frame's [`FrameRegistrations`] is compared against the mailboxes
//! that survived the previous frame. The comparison is a pure function,
//! [`diff`], that returns a [`FrameDiff`]: which tags were removed and
//! added, an ordered list of focus notifications, and the resolved focus
//! and keyboard outcome. [`RouterState::apply`] then commits that diff.
//!
//! # Passes
//!
//! 1. **Removal**: tags with a mailbox that this frame did not register lose
//!    their mailbox. A removed focus holder loses focus silently.
//! 2. **Addition**: first-appearing tags get a mailbox and `Focus(false)`,
//!    or a single `Focus(true)` if they are this frame's focus target.
//! 3. **Focus request**: moving focus notifies the previous holder with
//!    `Focus(false)` and the new one with `Focus(true)` (unless pass 2 did);
//!    an unregistered target or an explicit clear drops focus.
//! 4. **Keyboard**: resolve [`KeyboardDecision`] from the resolved focus,
//!    the frame's keyboard request, and whether focus was lost.
//!
//! # Invariants
//!
//! - After `apply`, the focused tag (if any) is registered this frame.
//! - A removed tag never receives an event.
//! - Per tag, notifications follow pass order (removal, addition, focus).
//! - `keyboard_visible` changes only on `Open` or `Close`.

use ahash::AHashSet;
use tessera_core::event::{Event, FocusEvent, InputHint};
use tessera_core::tag::Tag;
use web_time::Instant;

use crate::config::RouterConfig;
use crate::frame::FrameRegistrations;
use crate::mailbox::{Delivery, Enqueue, Mailboxes};
use crate::redraw::RedrawScheduler;

/// Instruction to the platform text-input layer for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardDecision {
    /// Show the virtual keyboard (or re-attach it to the new focus holder).
    Open,
    /// Hide the virtual keyboard.
    Close,
    /// Leave the virtual keyboard as it is.
    Keep,
}

impl KeyboardDecision {
    /// Stable label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Keep => "keep",
        }
    }
}

impl std::fmt::Display for KeyboardDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A synthetic focus event bound for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    /// Recipient.
    pub tag: Tag,
    /// Payload.
    pub event: FocusEvent,
}

/// Result of comparing one frame against the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDiff {
    /// Tags whose mailbox is discarded, sorted by tag.
    pub removed: Vec<Tag>,
    /// First-appearing tags, in registration order.
    pub added: Vec<Tag>,
    /// Synthetic events in enqueue order.
    pub notifications: Vec<Notification>,
    /// Focus holder after this frame.
    pub focus: Option<Tag>,
    /// Whether a focus holder existed before this frame and none does after.
    pub focus_lost: bool,
    /// Keyboard instruction for the platform.
    pub keyboard: KeyboardDecision,
}

impl FrameDiff {
    /// Notifications addressed to `tag`, in order.
    pub fn notifications_for(&self, tag: Tag) -> impl Iterator<Item = FocusEvent> + '_ {
        self.notifications
            .iter()
            .filter(move |n| n.tag == tag)
            .map(|n| n.event)
    }
}

/// Counters maintained by [`RouterState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouterStats {
    /// Frames applied.
    pub frames: u64,
    /// Synthetic focus events enqueued.
    pub synthetic_events: u64,
    /// External events accepted into a mailbox.
    pub external_events: u64,
    /// External events refused by the per-handler bound.
    pub rejected_events: u64,
    /// External events addressed to a tag without a mailbox, or routed while
    /// nothing was focused.
    pub dropped_events: u64,
    /// Events handed out by drains.
    pub drained_events: u64,
    /// Undelivered events discarded along with a removed mailbox.
    pub discarded_events: u64,
}

/// Router state persisted across frames.
///
/// Created once, mutated by [`apply`](Self::apply), drains, and external
/// enqueues, and dropped at shutdown.
#[derive(Debug)]
pub struct RouterState {
    focused: Option<Tag>,
    keyboard_visible: bool,
    mailboxes: Mailboxes,
    redraw: RedrawScheduler,
    reattach_keyboard: bool,
    stats: RouterStats,
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute what applying `frame` to `state` would do, without mutating it.
#[must_use]
pub fn diff(state: &RouterState, frame: &FrameRegistrations) -> FrameDiff {
    let registered: AHashSet<Tag> = frame.tags().collect();
    let previous_focus = state.focused;
    let mut focus = state.focused;
    let mut notifications = Vec::new();

    // 1. Removal.
    let mut removed: Vec<Tag> = state
        .mailboxes
        .tags()
        .filter(|tag| !registered.contains(tag))
        .collect();
    removed.sort_unstable();
    if focus.is_some_and(|f| !registered.contains(&f)) {
        focus = None;
    }

    // 2. Addition.
    let target = match frame.focus_request {
        Some(Some(tag)) if registered.contains(&tag) => Some(tag),
        _ => None,
    };
    let mut added = Vec::new();
    for tag in frame.tags() {
        if state.mailboxes.contains(tag) {
            continue;
        }
        added.push(tag);
        notifications.push(Notification {
            tag,
            event: FocusEvent::new(target == Some(tag)),
        });
    }

    // 3. Focus request.
    match (frame.focus_request, target) {
        (None, _) => {}
        (Some(_), Some(tag)) => {
            if focus != Some(tag) {
                if let Some(prev) = focus {
                    notifications.push(Notification {
                        tag: prev,
                        event: FocusEvent::lost(),
                    });
                }
                if state.mailboxes.contains(tag) {
                    notifications.push(Notification {
                        tag,
                        event: FocusEvent::gained(),
                    });
                }
                focus = Some(tag);
            }
        }
        (Some(_), None) => {
            if let Some(prev) = focus.take() {
                notifications.push(Notification {
                    tag: prev,
                    event: FocusEvent::lost(),
                });
            }
        }
    }

    // 4. Keyboard.
    let focus_lost = previous_focus.is_some() && focus.is_none();
    let focus_moved = focus.is_some() && focus != previous_focus;
    let keyboard = match (focus, frame.keyboard_request) {
        (Some(_), Some(true)) => KeyboardDecision::Open,
        (Some(_), Some(false)) => KeyboardDecision::Close,
        (Some(_), None) if focus_moved && state.keyboard_visible && state.reattach_keyboard => {
            KeyboardDecision::Open
        }
        (Some(_), None) => KeyboardDecision::Keep,
        (None, Some(false)) => KeyboardDecision::Close,
        (None, _) if focus_lost && state.keyboard_visible => KeyboardDecision::Close,
        (None, _) => KeyboardDecision::Keep,
    };

    FrameDiff {
        removed,
        added,
        notifications,
        focus,
        focus_lost,
        keyboard,
    }
}

impl RouterState {
    /// Fresh state: nothing focused, keyboard hidden, no mailboxes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RouterConfig::default())
    }

    /// Fresh state using `config`.
    #[must_use]
    pub fn with_config(config: &RouterConfig) -> Self {
        Self {
            focused: None,
            keyboard_visible: false,
            mailboxes: Mailboxes::new(
                config.mailbox.max_queued_events,
                config.mailbox.initial_capacity,
            ),
            redraw: RedrawScheduler::new(),
            reattach_keyboard: config.keyboard.reattach_on_focus_move,
            stats: RouterStats::default(),
        }
    }

    /// Apply one frame: diff it against the current state, commit the
    /// result, and return the keyboard decision for the platform.
    pub fn apply(&mut self, frame: &FrameRegistrations) -> KeyboardDecision {
        self.redraw.begin_frame(frame.invalidate);
        self.stats.frames += 1;

        let span = tracing::debug_span!(
            target: "tessera.router",
            "router.frame",
            frame = self.stats.frames,
            registered = frame.len(),
            added = tracing::field::Empty,
            removed = tracing::field::Empty,
            focus = tracing::field::Empty,
            keyboard = tracing::field::Empty,
        );
        let _guard = span.enter();

        let diff = diff(self, frame);
        span.record("added", diff.added.len());
        span.record("removed", diff.removed.len());
        span.record("keyboard", diff.keyboard.as_str());
        if let Some(tag) = diff.focus {
            span.record("focus", tag.raw());
        }

        self.commit(frame, &diff);
        diff.keyboard
    }

    fn commit(&mut self, frame: &FrameRegistrations, diff: &FrameDiff) {
        for &tag in &diff.removed {
            let discarded = self.mailboxes.remove(tag).unwrap_or(0);
            self.stats.discarded_events += discarded as u64;
            tracing::trace!(
                target: "tessera.router",
                tag = tag.raw(),
                discarded,
                "handler removed"
            );
        }
        for reg in frame.registrations() {
            if !self.mailboxes.create(reg.tag, reg.hint) {
                self.mailboxes.set_hint(reg.tag, reg.hint);
            }
        }
        for n in &diff.notifications {
            if self.mailboxes.push_synthetic(n.tag, n.event) {
                self.stats.synthetic_events += 1;
                tracing::trace!(
                    target: "tessera.router",
                    tag = n.tag.raw(),
                    focus = n.event.focus,
                    "focus notification queued"
                );
            }
        }

        if diff.focus_lost {
            tracing::debug!(target: "tessera.router", "focus cleared");
        }
        self.focused = diff.focus;
        match diff.keyboard {
            KeyboardDecision::Open => self.keyboard_visible = true,
            KeyboardDecision::Close => self.keyboard_visible = false,
            KeyboardDecision::Keep => {}
        }
    }

    /// Append an externally sourced event to `tag`'s mailbox.
    pub fn enqueue_external(&mut self, tag: Tag, event: Event) -> Delivery {
        let outcome = self.mailboxes.enqueue_external(tag, event);
        match outcome {
            Enqueue::Queued => self.stats.external_events += 1,
            Enqueue::Rejected => {
                self.stats.rejected_events += 1;
                tracing::debug!(
                    target: "tessera.mailbox",
                    tag = tag.raw(),
                    "external event rejected: mailbox full"
                );
            }
            Enqueue::Unregistered => {
                self.stats.dropped_events += 1;
                tracing::debug!(
                    target: "tessera.mailbox",
                    tag = tag.raw(),
                    "external event dropped: no mailbox"
                );
            }
        }
        outcome.into()
    }

    /// Append an externally sourced event to the focus holder's mailbox.
    ///
    /// Drops the event with [`Delivery::NoFocus`] when nothing holds focus.
    pub fn enqueue_focused(&mut self, event: Event) -> Delivery {
        let Some(tag) = self.focused else {
            self.stats.dropped_events += 1;
            tracing::debug!(
                target: "tessera.mailbox",
                "external event dropped: nothing focused"
            );
            return Delivery::NoFocus;
        };
        self.enqueue_external(tag, event)
    }

    /// Remove and return every queued event for `tag`, oldest first. A
    /// non-empty result schedules a redraw.
    pub fn drain(&mut self, tag: Tag) -> Vec<Event> {
        let events = self.mailboxes.drain(tag);
        if !events.is_empty() {
            self.stats.drained_events += events.len() as u64;
            self.redraw.note_delivery();
        }
        events
    }

    /// Current focus holder.
    #[must_use]
    pub fn focused(&self) -> Option<Tag> {
        self.focused
    }

    /// Whether the virtual keyboard is considered visible.
    #[must_use]
    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible
    }

    /// Keyboard hint of the focus holder.
    #[must_use]
    pub fn focused_hint(&self) -> Option<InputHint> {
        self.focused.and_then(|tag| self.mailboxes.hint(tag))
    }

    /// Whether a drain has delivered events since the last frame.
    #[must_use]
    pub fn pending_redraw(&self) -> bool {
        self.redraw.pending_redraw()
    }

    /// Whether a new frame should be produced now.
    #[must_use]
    pub fn wakeup_pending(&self) -> bool {
        self.redraw.wakeup_pending()
    }

    /// Deadline requested by the last frame, if any.
    #[must_use]
    pub fn wakeup_time(&self) -> Option<Instant> {
        self.redraw.wakeup_time()
    }

    /// Live mailboxes.
    #[must_use]
    pub fn mailboxes(&self) -> &Mailboxes {
        &self.mailboxes
    }

    /// Counters.
    #[must_use]
    pub fn stats(&self) -> RouterStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ingest;
    use tessera_core::op::{FocusOp, InputOp, Ops, SoftKeyboardOp};

    fn frame(build: impl FnOnce(&mut Ops)) -> FrameRegistrations {
        let mut ops = Ops::new();
        build(&mut ops);
        ingest(&ops)
    }

    fn focus_events(state: &mut RouterState, tag: Tag) -> Vec<bool> {
        state
            .drain(tag)
            .into_iter()
            .filter_map(|e| e.as_focus().map(|f| f.focus))
            .collect()
    }

    #[test]
    fn fresh_state() {
        let state = RouterState::new();
        assert_eq!(state.focused(), None);
        assert!(!state.keyboard_visible());
        assert!(state.mailboxes().is_empty());
        assert!(!state.wakeup_pending());
    }

    #[test]
    fn diff_is_pure() {
        let a = Tag::new();
        let state = RouterState::new();
        let f = frame(|ops| InputOp::new(a).add(ops));
        let first = diff(&state, &f);
        let second = diff(&state, &f);
        assert_eq!(first, second);
        assert!(state.mailboxes().is_empty());
    }

    #[test]
    fn new_tag_gets_single_focus_false() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let decision = state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        assert_eq!(decision, KeyboardDecision::Keep);
        assert_eq!(focus_events(&mut state, a), vec![false]);
    }

    #[test]
    fn new_focus_target_gets_single_focus_true() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let d = diff(
            &state,
            &frame(|ops| {
                FocusOp::new(Some(a)).add(ops);
                InputOp::new(a).add(ops);
            }),
        );
        assert_eq!(d.added, vec![a]);
        assert_eq!(d.notifications_for(a).collect::<Vec<_>>(), vec![FocusEvent::gained()]);
        assert_eq!(d.focus, Some(a));

        state.apply(&frame(|ops| {
            FocusOp::new(Some(a)).add(ops);
            InputOp::new(a).add(ops);
        }));
        assert_eq!(focus_events(&mut state, a), vec![true]);
        assert_eq!(state.focused(), Some(a));
    }

    #[test]
    fn persisting_tag_gets_no_further_events() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        state.drain(a);
        state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        assert!(state.drain(a).is_empty());
    }

    #[test]
    fn moving_focus_notifies_both_holders() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        state.drain(a);
        state.drain(b);

        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(b)).add(ops);
        }));
        assert_eq!(focus_events(&mut state, a), vec![false]);
        assert_eq!(focus_events(&mut state, b), vec![true]);
        assert_eq!(state.focused(), Some(b));
    }

    #[test]
    fn refocusing_holder_is_silent() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let f = frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
        });
        state.apply(&f);
        state.drain(a);
        state.apply(&f);
        assert!(state.drain(a).is_empty());
        assert_eq!(state.focused(), Some(a));
    }

    #[test]
    fn focus_moves_to_new_tag_from_old_holder() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        state.drain(a);

        let d = diff(
            &state,
            &frame(|ops| {
                InputOp::new(a).add(ops);
                InputOp::new(b).add(ops);
                FocusOp::new(Some(b)).add(ops);
            }),
        );
        assert_eq!(
            d.notifications,
            vec![
                Notification { tag: b, event: FocusEvent::gained() },
                Notification { tag: a, event: FocusEvent::lost() },
            ]
        );
        assert_eq!(d.focus, Some(b));
    }

    #[test]
    fn orphan_focus_request_clears_focus() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        state.drain(a);

        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(Tag::new())).add(ops);
        }));
        assert_eq!(state.focused(), None);
        assert_eq!(focus_events(&mut state, a), vec![false]);
    }

    #[test]
    fn removed_holder_loses_focus_silently() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        let d = diff(&state, &frame(|ops| InputOp::new(b).add(ops)));
        assert_eq!(d.removed, vec![a]);
        assert!(d.notifications.is_empty());
        assert!(d.focus_lost);

        state.apply(&frame(|ops| InputOp::new(b).add(ops)));
        assert_eq!(state.focused(), None);
        assert!(!state.mailboxes().contains(a));
        assert!(state.drain(a).is_empty());
        assert_eq!(state.stats().discarded_events, 1);
    }

    #[test]
    fn reappearing_tag_is_brand_new() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        state.apply(&Default::default());
        state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        assert_eq!(focus_events(&mut state, a), vec![false]);
    }

    #[test]
    fn keyboard_open_requires_focus() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let d = state.apply(&frame(|ops| SoftKeyboardOp::new(true).add(ops)));
        assert_eq!(d, KeyboardDecision::Keep);
        assert!(!state.keyboard_visible());

        let d = state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(true).add(ops);
        }));
        assert_eq!(d, KeyboardDecision::Open);
        assert!(state.keyboard_visible());
    }

    #[test]
    fn keyboard_is_sticky_without_requests() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let open = frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(true).add(ops);
        });
        state.apply(&open);
        let d = state.apply(&frame(|ops| InputOp::new(a).add(ops)));
        assert_eq!(d, KeyboardDecision::Keep);
        assert!(state.keyboard_visible());
    }

    #[test]
    fn explicit_hide_closes_with_or_without_focus() {
        let a = Tag::new();
        let mut state = RouterState::new();
        let d = state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(false).add(ops);
        }));
        assert_eq!(d, KeyboardDecision::Close);

        let d = state.apply(&frame(|ops| SoftKeyboardOp::new(false).add(ops)));
        assert_eq!(d, KeyboardDecision::Close);
        assert!(!state.keyboard_visible());
    }

    #[test]
    fn clearing_focus_while_visible_closes() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(true).add(ops);
        }));
        let d = state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(None).add(ops);
        }));
        assert_eq!(d, KeyboardDecision::Close);
        assert!(!state.keyboard_visible());
    }

    #[test]
    fn focus_move_while_visible_reattaches() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(true).add(ops);
        }));
        let d = state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(b)).add(ops);
        }));
        assert_eq!(d, KeyboardDecision::Open);
    }

    #[test]
    fn reattach_can_be_disabled() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut config = RouterConfig::default();
        config.keyboard.reattach_on_focus_move = false;
        let mut state = RouterState::with_config(&config);
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(a)).add(ops);
            SoftKeyboardOp::new(true).add(ops);
        }));
        let d = state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
            FocusOp::new(Some(b)).add(ops);
        }));
        assert_eq!(d, KeyboardDecision::Keep);
        assert!(state.keyboard_visible());
    }

    #[test]
    fn focused_hint_follows_latest_registration() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).with_hint(InputHint::Email).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        assert_eq!(state.focused_hint(), Some(InputHint::Email));

        state.apply(&frame(|ops| InputOp::new(a).with_hint(InputHint::Numeric).add(ops)));
        assert_eq!(state.focused_hint(), Some(InputHint::Numeric));
    }

    #[test]
    fn stats_count_frames_and_events() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut state = RouterState::new();
        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            InputOp::new(b).add(ops);
        }));
        assert_eq!(state.enqueue_external(Tag::new(), FocusEvent::gained().into()), Delivery::Unregistered);
        state.drain(a);

        let stats = state.stats();
        assert_eq!(stats.frames, 1);
        assert_eq!(stats.synthetic_events, 2);
        assert_eq!(stats.dropped_events, 1);
        assert_eq!(stats.drained_events, 1);
    }

    #[test]
    fn unfocused_and_unregistered_drops_are_distinct() {
        let a = Tag::new();
        let mut state = RouterState::new();
        state.apply(&frame(|ops| InputOp::new(a).add(ops)));

        assert_eq!(state.enqueue_focused(FocusEvent::gained().into()), Delivery::NoFocus);
        assert_eq!(state.enqueue_external(Tag::new(), FocusEvent::gained().into()), Delivery::Unregistered);
        assert_eq!(state.stats().dropped_events, 2);
        assert_eq!(state.stats().external_events, 0);

        state.apply(&frame(|ops| {
            InputOp::new(a).add(ops);
            FocusOp::new(Some(a)).add(ops);
        }));
        assert_eq!(state.enqueue_focused(FocusEvent::gained().into()), Delivery::Queued);
        assert_eq!(state.stats().external_events, 1);
        assert_eq!(state.stats().dropped_events, 2);
    }

    #[test]
    fn keyboard_decision_labels() {
        assert_eq!(KeyboardDecision::Open.to_string(), "open");
        assert_eq!(KeyboardDecision::Close.as_str(), "close");
        assert_eq!(KeyboardDecision::Keep.as_str(), "keep");
    }
}
