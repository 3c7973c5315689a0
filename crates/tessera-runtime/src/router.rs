#![forbid(unsafe_code)]

//! The router: boundary calls for the platform collaborator.
//!
//! [`Router`] owns a [`RouterState`] and exposes the per-frame cycle:
//!
//! ```text
//! submit_frame(ops) ──> KeyboardDecision ──> platform
//!        │
//!        └─ handlers: drain_events(tag) ──> wakeup_pending() ──> next frame
//!
//! platform input ──> queue_key(event) / inject_external_event(tag, event)
//! ```
//!
//! Injection from another thread goes through
//! [`SharedRouter`](crate::shared::SharedRouter).

use tessera_core::event::{Event, InputHint};
use tessera_core::op::Ops;
use tessera_core::tag::Tag;
use web_time::Instant;

use crate::config::RouterConfig;
use crate::diff::{KeyboardDecision, RouterState, RouterStats};
use crate::frame::ingest;
use crate::mailbox::Delivery;

/// Per-frame input router.
///
/// # Example
///
/// ```
/// use tessera_core::op::{FocusOp, InputOp, Ops};
/// use tessera_core::event::{Event, FocusEvent};
/// use tessera_core::tag::Tag;
/// use tessera_runtime::{KeyboardDecision, Router};
///
/// let field = Tag::new();
/// let mut router = Router::new();
///
/// let mut ops = Ops::new();
/// InputOp::new(field).add(&mut ops);
/// FocusOp::new(Some(field)).add(&mut ops);
/// assert_eq!(router.submit_frame(&ops), KeyboardDecision::Keep);
///
/// assert_eq!(router.drain_events(field), vec![Event::Focus(FocusEvent::gained())]);
/// assert!(router.wakeup_pending());
/// ```
#[derive(Debug, Default)]
pub struct Router {
    state: RouterState,
}

impl Router {
    /// Router with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Router using `config`.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            state: RouterState::with_config(&config),
        }
    }

    /// Ingest and apply one frame's ops. Returns the keyboard instruction
    /// for the platform.
    pub fn submit_frame(&mut self, ops: &Ops) -> KeyboardDecision {
        let frame = ingest(ops);
        self.state.apply(&frame)
    }

    /// Remove and return every queued event for `tag`, oldest first.
    pub fn drain_events(&mut self, tag: Tag) -> Vec<Event> {
        self.state.drain(tag)
    }

    /// Whether a new frame should be produced now.
    #[must_use]
    pub fn wakeup_pending(&self) -> bool {
        self.state.wakeup_pending()
    }

    /// When the next frame is due, if the last frame scheduled one.
    #[must_use]
    pub fn wakeup_time(&self) -> Option<Instant> {
        self.state.wakeup_time()
    }

    /// Append an externally sourced event to `tag`'s mailbox.
    ///
    /// The mailbox accepts any registered tag. Use
    /// [`queue_key`](Self::queue_key) to deliver only to the focus holder.
    pub fn inject_external_event(&mut self, tag: Tag, event: Event) -> Delivery {
        self.state.enqueue_external(tag, event)
    }

    /// Deliver a key or edit event to the focused handler.
    ///
    /// Returns [`Delivery::NoFocus`] and drops the event when nothing holds
    /// focus.
    pub fn queue_key(&mut self, event: impl Into<Event>) -> Delivery {
        self.state.enqueue_focused(event.into())
    }

    /// Current focus holder.
    #[must_use]
    pub fn focused(&self) -> Option<Tag> {
        self.state.focused()
    }

    /// Whether the virtual keyboard is considered visible.
    #[must_use]
    pub fn keyboard_visible(&self) -> bool {
        self.state.keyboard_visible()
    }

    /// Keyboard hint registered by the focus holder.
    #[must_use]
    pub fn focused_hint(&self) -> Option<InputHint> {
        self.state.focused_hint()
    }

    /// Whether `tag` was registered by the last frame.
    #[must_use]
    pub fn is_registered(&self, tag: Tag) -> bool {
        self.state.mailboxes().contains(tag)
    }

    /// Events waiting for `tag`.
    #[must_use]
    pub fn pending(&self, tag: Tag) -> usize {
        self.state.mailboxes().pending(tag)
    }

    /// Counters since creation.
    #[must_use]
    pub fn stats(&self) -> RouterStats {
        self.state.stats()
    }

    /// Underlying state.
    #[must_use]
    pub fn state(&self) -> &RouterState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::event::{EditEvent, FocusEvent, KeyCode, KeyEvent};
    use tessera_core::op::{FocusOp, InputOp, InvalidateOp};
    use web_time::Duration;

    fn focused_frame(tag: Tag) -> Ops {
        let mut ops = Ops::new();
        InputOp::new(tag).add(&mut ops);
        FocusOp::new(Some(tag)).add(&mut ops);
        ops
    }

    #[test]
    fn queue_key_goes_to_focus_holder() {
        let (a, b) = (Tag::new(), Tag::new());
        let mut router = Router::new();
        let mut ops = focused_frame(a);
        InputOp::new(b).add(&mut ops);
        router.submit_frame(&ops);
        router.drain_events(a);
        router.drain_events(b);

        let key = KeyEvent::new(KeyCode::Char('x'));
        assert_eq!(router.queue_key(key), Delivery::Queued);
        assert_eq!(router.drain_events(a), vec![Event::Key(key)]);
        assert!(router.drain_events(b).is_empty());
    }

    #[test]
    fn queue_key_without_focus_is_dropped() {
        let mut router = Router::new();
        assert_eq!(
            router.queue_key(EditEvent::new("a")),
            Delivery::NoFocus
        );
        assert_eq!(router.stats().dropped_events, 1);
    }

    #[test]
    fn inject_to_unregistered_tag() {
        let mut router = Router::new();
        let tag = Tag::new();
        let delivery = router.inject_external_event(tag, FocusEvent::gained().into());
        assert_eq!(delivery, Delivery::Unregistered);
        assert!(!router.is_registered(tag));
    }

    #[test]
    fn bounded_router_rejects_overflow() {
        let tag = Tag::new();
        let mut config = RouterConfig::default();
        config.mailbox.max_queued_events = Some(2);
        let mut router = Router::with_config(config);
        router.submit_frame(&focused_frame(tag));

        for c in ['a', 'b'] {
            assert!(router.queue_key(KeyEvent::new(KeyCode::Char(c))).is_queued());
        }
        assert_eq!(
            router.queue_key(KeyEvent::new(KeyCode::Char('c'))),
            Delivery::Rejected
        );
        assert_eq!(router.pending(tag), 3);
        assert_eq!(router.stats().rejected_events, 1);
    }

    #[test]
    fn timed_invalidate_sets_wakeup_time() {
        let at = Instant::now() + Duration::from_millis(100);
        let mut ops = Ops::new();
        InvalidateOp::at(at).add(&mut ops);
        let mut router = Router::new();
        router.submit_frame(&ops);
        assert_eq!(router.wakeup_time(), Some(at));
        assert!(!router.wakeup_pending());

        router.submit_frame(&Ops::new());
        assert_eq!(router.wakeup_time(), None);
    }

    #[test]
    fn immediate_invalidate_requests_wakeup() {
        let mut ops = Ops::new();
        InvalidateOp::new().add(&mut ops);
        let mut router = Router::new();
        router.submit_frame(&ops);
        assert!(router.wakeup_pending());
    }

    #[test]
    fn accessors_reflect_state() {
        let tag = Tag::new();
        let mut router = Router::new();
        router.submit_frame(&focused_frame(tag));
        assert_eq!(router.focused(), Some(tag));
        assert!(router.is_registered(tag));
        assert!(!router.keyboard_visible());
        assert_eq!(router.focused_hint(), Some(InputHint::Any));
        assert_eq!(router.state().focused(), Some(tag));
    }
}
