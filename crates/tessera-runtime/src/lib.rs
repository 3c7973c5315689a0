#![forbid(unsafe_code)]

//! Tessera Runtime
//!
//! The input routing state machine. Each frame the layout layer records
//! [`Ops`](tessera_core::op::Ops); the runtime ingests them, diffs the
//! declared handlers against the previous frame, and maintains focus,
//! virtual keyboard visibility, per-handler mailboxes, and redraw
//! scheduling across frames.
//!
//! # Key Components
//!
//! - [`Router`] - Boundary calls for the platform collaborator
//! - [`RouterState`] - Persisted cross-frame state and the [`diff()`] engine
//! - [`FrameRegistrations`] - One frame's ops, flattened by [`ingest`]
//! - [`Mailboxes`] - Per-handler FIFO queues
//! - [`RedrawScheduler`] - Wakeup decisions
//! - [`SharedRouter`] / [`EventInjector`] - Cross-thread injection
//! - [`Host`] / [`TextInputDriver`] - Applying decisions to a platform
//! - [`RouterConfig`] - Policy-as-data tunables
//!
//! # How it fits in the system
//! `tessera-core` supplies tags, ops, and events. This crate owns every
//! cross-frame decision. A platform layer implements [`TextInputDriver`]
//! and calls [`Router::submit_frame`] once per produced frame.

pub mod config;
pub mod diff;
pub mod frame;
pub mod host;
pub mod mailbox;
pub mod redraw;
pub mod router;
pub mod shared;

pub use config::{ConfigError, KeyboardConfig, MailboxConfig, RouterConfig};
pub use diff::{FrameDiff, KeyboardDecision, Notification, RouterState, RouterStats, diff};
pub use frame::{FrameRegistrations, InvalidateRequest, Registration, ScopePath, ingest};
pub use host::{Host, TextInputDriver};
pub use mailbox::{Delivery, Enqueue, Mailboxes};
pub use redraw::RedrawScheduler;
pub use router::Router;
pub use shared::{EventInjector, SharedRouter};
