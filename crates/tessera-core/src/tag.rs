#![forbid(unsafe_code)]

//! Handler identity.
//!
//! A [`Tag`] names one logical input handler. Tags compare by identity: each
//! call to [`Tag::new`] mints a value that is unequal to every other tag
//! minted by the process, while copies of the same tag always compare equal.
//! Reusing a tag across frames is how an application says "this is the same
//! handler as last frame".
//!
//! Tags are plain integers rather than addresses, so they are `Copy`,
//! hashable, ordered, and safe to send to other threads (for example to an
//! input thread that injects key events).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next raw id handed out by [`Tag::new`]. Zero is never minted.
static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Opaque, identity-compared handler token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u64);

impl Tag {
    /// Mint a new tag, distinct from every tag minted before it.
    ///
    /// There is no `Default` impl: a default value would mint a fresh
    /// identity where a placeholder is expected.
    ///
    /// ```compile_fail
    /// let _ = tessera_core::tag::Tag::default();
    /// ```
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id, for logging and diagnostics only.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(#{})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
