#![forbid(unsafe_code)]

//! Platform host: applies router decisions to a text-input driver.
//!
//! The router only decides; a [`TextInputDriver`] acts. [`Host`] sits
//! between the two on the routing thread:
//!
//! - `Open`/`Close` decisions become [`TextInputDriver::show_text_input`].
//! - A change in the focus holder's [`InputHint`] becomes
//!   [`TextInputDriver::set_input_hint`].
//! - An event queued through the host wakes the platform loop with
//!   [`TextInputDriver::wakeup`] so the handler gets a frame to drain it.

use tessera_core::event::{Event, InputHint};
use tessera_core::op::Ops;
use tessera_core::tag::Tag;
use web_time::Instant;

use crate::diff::KeyboardDecision;
use crate::mailbox::Delivery;
use crate::shared::{EventInjector, SharedRouter};

/// Platform text-input services.
pub trait TextInputDriver {
    /// Show or hide the virtual keyboard.
    fn show_text_input(&mut self, show: bool);

    /// Choose the virtual keyboard layout.
    fn set_input_hint(&mut self, hint: InputHint);

    /// Ask the platform loop to produce a frame soon.
    fn wakeup(&mut self);
}

impl<D: TextInputDriver + ?Sized> TextInputDriver for &mut D {
    fn show_text_input(&mut self, show: bool) {
        (**self).show_text_input(show);
    }

    fn set_input_hint(&mut self, hint: InputHint) {
        (**self).set_input_hint(hint);
    }

    fn wakeup(&mut self) {
        (**self).wakeup();
    }
}

impl<D: TextInputDriver + ?Sized> TextInputDriver for Box<D> {
    fn show_text_input(&mut self, show: bool) {
        (**self).show_text_input(show);
    }

    fn set_input_hint(&mut self, hint: InputHint) {
        (**self).set_input_hint(hint);
    }

    fn wakeup(&mut self) {
        (**self).wakeup();
    }
}

/// Drives a [`SharedRouter`] against a [`TextInputDriver`].
#[derive(Debug)]
pub struct Host<D> {
    router: SharedRouter,
    driver: D,
    applied_hint: Option<InputHint>,
}

impl<D: TextInputDriver> Host<D> {
    /// Host for `router` using `driver`.
    pub fn new(router: SharedRouter, driver: D) -> Self {
        Self {
            router,
            driver,
            applied_hint: None,
        }
    }

    /// Submit a frame and forward its consequences to the driver.
    pub fn submit_frame(&mut self, ops: &Ops) -> KeyboardDecision {
        let (decision, hint) = {
            let mut router = self.router.lock();
            let decision = router.submit_frame(ops);
            (decision, router.focused_hint())
        };

        match decision {
            KeyboardDecision::Open => self.driver.show_text_input(true),
            KeyboardDecision::Close => self.driver.show_text_input(false),
            KeyboardDecision::Keep => {}
        }
        if let Some(hint) = hint.filter(|h| self.applied_hint != Some(*h)) {
            tracing::debug!(target: "tessera.host", ?hint, "input hint changed");
            self.driver.set_input_hint(hint);
        }
        self.applied_hint = hint;

        if decision != KeyboardDecision::Keep {
            tracing::debug!(target: "tessera.host", %decision, "text input updated");
        }
        decision
    }

    /// Deliver a key or edit event to the focus holder, waking the platform
    /// loop if it was queued.
    pub fn queue_key(&mut self, event: impl Into<Event>) -> Delivery {
        let delivery = self.router.lock().queue_key(event);
        self.wake_if_queued(delivery)
    }

    /// Deliver an event to `tag`, waking the platform loop if it was queued.
    pub fn inject(&mut self, tag: Tag, event: impl Into<Event>) -> Delivery {
        let delivery = self.router.lock().inject_external_event(tag, event.into());
        self.wake_if_queued(delivery)
    }

    fn wake_if_queued(&mut self, delivery: Delivery) -> Delivery {
        if delivery.is_queued() {
            self.driver.wakeup();
        }
        delivery
    }

    /// Drain `tag`'s events.
    pub fn drain_events(&self, tag: Tag) -> Vec<Event> {
        self.router.drain_events(tag)
    }

    /// Whether the platform should produce a frame now.
    #[must_use]
    pub fn wakeup_pending(&self) -> bool {
        self.router.wakeup_pending()
    }

    /// When the platform should produce the next frame, if scheduled.
    #[must_use]
    pub fn wakeup_time(&self) -> Option<Instant> {
        self.router.lock().wakeup_time()
    }

    /// Injection handle for other threads.
    #[must_use]
    pub fn injector(&self) -> EventInjector {
        self.router.injector()
    }

    /// The shared router.
    #[must_use]
    pub fn router(&self) -> &SharedRouter {
        &self.router
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Consume the host, returning the driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}
