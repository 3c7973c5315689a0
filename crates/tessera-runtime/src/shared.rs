#![forbid(unsafe_code)]

//! Cross-thread access to a [`Router`].
//!
//! The routing thread owns the frame cycle; platform input threads only
//! inject events. Both go through one [`parking_lot::Mutex`] around the
//! router, so an injected event is ordered after every synthetic event
//! already queued when the lock was taken.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use tessera_core::event::Event;
use tessera_core::op::Ops;
use tessera_core::tag::Tag;

use crate::diff::KeyboardDecision;
use crate::mailbox::Delivery;
use crate::router::Router;

/// A [`Router`] behind a mutex, shared between the routing thread and any
/// number of [`EventInjector`]s.
#[derive(Debug, Clone, Default)]
pub struct SharedRouter {
    inner: Arc<Mutex<Router>>,
}

impl SharedRouter {
    /// Wrap `router`.
    #[must_use]
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(Mutex::new(router)),
        }
    }

    /// Lock the router for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, Router> {
        self.inner.lock()
    }

    /// [`Router::submit_frame`] under the lock.
    pub fn submit_frame(&self, ops: &Ops) -> KeyboardDecision {
        self.inner.lock().submit_frame(ops)
    }

    /// [`Router::drain_events`] under the lock.
    pub fn drain_events(&self, tag: Tag) -> Vec<Event> {
        self.inner.lock().drain_events(tag)
    }

    /// [`Router::wakeup_pending`] under the lock.
    #[must_use]
    pub fn wakeup_pending(&self) -> bool {
        self.inner.lock().wakeup_pending()
    }

    /// A handle that can only inject events.
    #[must_use]
    pub fn injector(&self) -> EventInjector {
        EventInjector {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Injection-only handle to a [`SharedRouter`], for platform input threads.
#[derive(Debug, Clone)]
pub struct EventInjector {
    inner: Arc<Mutex<Router>>,
}

impl EventInjector {
    /// [`Router::inject_external_event`] under the lock.
    pub fn inject(&self, tag: Tag, event: impl Into<Event>) -> Delivery {
        self.inner.lock().inject_external_event(tag, event.into())
    }

    /// [`Router::queue_key`] under the lock.
    pub fn queue_key(&self, event: impl Into<Event>) -> Delivery {
        self.inner.lock().queue_key(event)
    }
}
