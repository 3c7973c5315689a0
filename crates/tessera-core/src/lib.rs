#![forbid(unsafe_code)]

//! Core: handler identity, declarative input ops, and event types.
//!
//! # Role in Tessera
//! `tessera-core` is the vocabulary shared by the layout layer that records
//! ops and the runtime that routes input. It has no routing logic of its own.
//!
//! # Primary responsibilities
//! - **Tag**: identity-compared handler token.
//! - **Ops**: the per-frame, scope-structured operation buffer and its typed
//!   builders.
//! - **Event**: synthetic focus notifications and external key/edit events.
//!
//! # How it fits in the system
//! Widgets record [`op::Ops`] each frame; `tessera-runtime` ingests them,
//! diffs against the previous frame, and delivers [`event::Event`] values
//! back to handlers named by [`tag::Tag`].

pub mod event;
pub mod op;
pub mod tag;

pub use event::{EditEvent, Event, FocusEvent, InputHint, KeyCode, KeyEvent, KeyState, Modifiers};
pub use op::{FocusOp, InputOp, InvalidateOp, Op, Ops, ScopeId, SoftKeyboardOp};
pub use tag::Tag;
