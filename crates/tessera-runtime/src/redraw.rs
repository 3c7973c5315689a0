#![forbid(unsafe_code)]

//! Redraw scheduling.
//!
//! A new frame is needed when a handler has observed state changes, which
//! the router approximates as "a drain returned events". The flag is reset
//! at the start of every applied frame, so a redraw is requested exactly one
//! cycle after delivery.
//!
//! Frames can also ask for a redraw directly with an `Invalidate` op, either
//! immediately or by a deadline.

use web_time::Instant;

use crate::frame::InvalidateRequest;

/// Tracks whether a new frame must be produced.
#[derive(Debug, Clone, Default)]
pub struct RedrawScheduler {
    pending_redraw: bool,
    invalidate: Option<InvalidateRequest>,
}

impl RedrawScheduler {
    /// Create an idle scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame cycle: forget previous deliveries and adopt the frame's
    /// own invalidate request.
    pub fn begin_frame(&mut self, invalidate: Option<InvalidateRequest>) {
        self.pending_redraw = false;
        self.invalidate = invalidate;
    }

    /// Record that a drain delivered at least one event.
    pub fn note_delivery(&mut self) {
        self.pending_redraw = true;
    }

    /// Whether delivery has happened since the last frame.
    #[must_use]
    pub fn pending_redraw(&self) -> bool {
        self.pending_redraw
    }

    /// Whether a new frame should be produced now.
    #[must_use]
    pub fn wakeup_pending(&self) -> bool {
        self.pending_redraw || matches!(self.invalidate, Some(InvalidateRequest::Immediate))
    }

    /// Deadline requested by the last frame's timed invalidate, if any.
    #[must_use]
    pub fn wakeup_time(&self) -> Option<Instant> {
        match self.invalidate {
            Some(InvalidateRequest::At(at)) => Some(at),
            _ => None,
        }
    }
}
