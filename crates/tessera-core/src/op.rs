#![forbid(unsafe_code)]

//! Declarative per-frame input operations.
//!
//! The layout/drawing layer records one [`Ops`] buffer per frame. The buffer
//! is an append-only list of [`Op`] values interleaved with scope markers:
//!
//! ```text
//! Save(0)
//!   Input { tag: a }
//!   Focus { tag: Some(a) }
//! Load(0)
//! Save(1)
//!   Input { tag: b }
//!   SoftKeyboard { show: true }
//! Load(1)
//! ```
//!
//! Scopes group operations for diagnostics only. Every operation in the
//! buffer counts toward the frame, whatever scope it was recorded in.
//!
//! Typed builders ([`InputOp`], [`FocusOp`], [`SoftKeyboardOp`],
//! [`InvalidateOp`]) mirror how widgets declare intent:
//!
//! ```
//! use tessera_core::op::{FocusOp, InputOp, Ops};
//! use tessera_core::tag::Tag;
//!
//! let field = Tag::new();
//! let mut ops = Ops::new();
//! ops.scope(|ops| {
//!     InputOp::new(field).add(ops);
//!     FocusOp::new(Some(field)).add(ops);
//! });
//! assert_eq!(ops.len(), 4);
//! ```

use web_time::Instant;

use crate::event::InputHint;
use crate::tag::Tag;

/// Identifier of a save scope within one [`Ops`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The raw scope number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// One recorded operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Open a scope.
    Save(ScopeId),

    /// Close the scope `id` and every scope nested inside it.
    Load(ScopeId),

    /// Declare `tag` as a candidate for input this frame.
    Input {
        /// Handler identity.
        tag: Tag,
        /// Keyboard layout hint for the handler.
        hint: InputHint,
    },

    /// Request that `tag` hold focus after this frame, or that focus be
    /// cleared when `None`.
    Focus {
        /// Requested focus target.
        tag: Option<Tag>,
    },

    /// Request the virtual keyboard be shown or hidden.
    SoftKeyboard {
        /// Desired visibility.
        show: bool,
    },

    /// Request a redraw, immediately (`None`) or no later than `at`.
    Invalidate {
        /// Deadline for the next frame.
        at: Option<Instant>,
    },
}

/// Append-only buffer of operations for one frame.
#[derive(Debug, Clone, Default)]
pub struct Ops {
    ops: Vec<Op>,
    next_scope: u32,
}

impl Ops {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the buffer for reuse in the next frame, keeping its allocation.
    pub fn reset(&mut self) {
        self.ops.clear();
        self.next_scope = 0;
    }

    /// Append a raw operation.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Open a new scope and return its id. Close it with [`Ops::load`].
    pub fn save(&mut self) -> ScopeId {
        let id = ScopeId(self.next_scope);
        self.next_scope = self.next_scope.wrapping_add(1);
        self.ops.push(Op::Save(id));
        id
    }

    /// Close the scope opened by [`Ops::save`].
    pub fn load(&mut self, id: ScopeId) {
        self.ops.push(Op::Load(id));
    }

    /// Record `f` inside a fresh scope.
    pub fn scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let id = self.save();
        let out = f(self);
        self.load(id);
        out
    }

    /// Recorded operations in stream order.
    #[must_use]
    pub fn as_slice(&self) -> &[Op] {
        &self.ops
    }

    /// Iterate over recorded operations in stream order.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    /// Number of recorded operations, scope markers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ops {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Op> for Ops {
    fn extend<I: IntoIterator<Item = Op>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

/// Declares a handler that wants keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOp {
    /// Handler identity.
    pub tag: Tag,
    /// Keyboard layout hint.
    pub hint: InputHint,
}

impl InputOp {
    /// Declare `tag` with no layout preference.
    #[must_use]
    pub const fn new(tag: Tag) -> Self {
        Self {
            tag,
            hint: InputHint::Any,
        }
    }

    /// Set the keyboard layout hint.
    #[must_use]
    pub const fn with_hint(mut self, hint: InputHint) -> Self {
        self.hint = hint;
        self
    }

    /// Record this op.
    pub fn add(self, ops: &mut Ops) {
        ops.push(Op::Input {
            tag: self.tag,
            hint: self.hint,
        });
    }
}

/// Requests a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusOp {
    /// Target handler, or `None` to clear focus.
    pub tag: Option<Tag>,
}

impl FocusOp {
    /// Request focus for `tag` (`None` clears focus).
    #[must_use]
    pub const fn new(tag: Option<Tag>) -> Self {
        Self { tag }
    }

    /// Record this op.
    pub fn add(self, ops: &mut Ops) {
        ops.push(Op::Focus { tag: self.tag });
    }
}

/// Requests virtual keyboard visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoftKeyboardOp {
    /// Desired visibility.
    pub show: bool,
}

impl SoftKeyboardOp {
    /// Request the keyboard shown (`true`) or hidden (`false`).
    #[must_use]
    pub const fn new(show: bool) -> Self {
        Self { show }
    }

    /// Record this op.
    pub fn add(self, ops: &mut Ops) {
        ops.push(Op::SoftKeyboard { show: self.show });
    }
}

/// Requests a new frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InvalidateOp {
    /// Deadline; `None` means as soon as possible.
    pub at: Option<Instant>,
}

impl InvalidateOp {
    /// Request an immediate redraw.
    #[must_use]
    pub const fn new() -> Self {
        Self { at: None }
    }

    /// Request a redraw no later than `at`.
    #[must_use]
    pub const fn at(at: Instant) -> Self {
        Self { at: Some(at) }
    }

    /// Record this op.
    pub fn add(self, ops: &mut Ops) {
        ops.push(Op::Invalidate { at: self.at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_record_in_order() {
        let a = Tag::new();
        let mut ops = Ops::new();
        InputOp::new(a).with_hint(InputHint::Email).add(&mut ops);
        FocusOp::new(Some(a)).add(&mut ops);
        SoftKeyboardOp::new(true).add(&mut ops);
        InvalidateOp::new().add(&mut ops);

        assert_eq!(
            ops.as_slice(),
            &[
                Op::Input {
                    tag: a,
                    hint: InputHint::Email
                },
                Op::Focus { tag: Some(a) },
                Op::SoftKeyboard { show: true },
                Op::Invalidate { at: None },
            ]
        );
    }

    #[test]
    fn save_mints_sequential_scope_ids() {
        let mut ops = Ops::new();
        let s0 = ops.save();
        let s1 = ops.save();
        ops.load(s1);
        ops.load(s0);
        assert_eq!(s0.raw(), 0);
        assert_eq!(s1.raw(), 1);
        assert_eq!(
            ops.as_slice(),
            &[Op::Save(s0), Op::Save(s1), Op::Load(s1), Op::Load(s0)]
        );
    }

    #[test]
    fn scope_wraps_closure() {
        let tag = Tag::new();
        let mut ops = Ops::new();
        let value = ops.scope(|ops| {
            InputOp::new(tag).add(ops);
            7
        });
        assert_eq!(value, 7);
        let recorded: Vec<Op> = ops.iter().copied().collect();
        assert!(matches!(recorded[0], Op::Save(_)));
        assert!(matches!(recorded[1], Op::Input { .. }));
        assert!(matches!(recorded[2], Op::Load(_)));
    }

    #[test]
    fn reset_clears_ops_and_scope_counter() {
        let mut ops = Ops::new();
        ops.scope(|ops| SoftKeyboardOp::new(false).add(ops));
        assert!(!ops.is_empty());

        ops.reset();
        assert!(ops.is_empty());
        assert_eq!(ops.save().raw(), 0);
    }

    #[test]
    fn invalidate_at_records_deadline() {
        let at = Instant::now();
        let mut ops = Ops::new();
        InvalidateOp::at(at).add(&mut ops);
        assert_eq!(ops.as_slice(), &[Op::Invalidate { at: Some(at) }]);
    }

    #[test]
    fn extend_appends_raw_ops() {
        let mut ops = Ops::new();
        ops.extend([Op::Focus { tag: None }, Op::SoftKeyboard { show: false }]);
        assert_eq!(ops.len(), 2);
        assert_eq!((&ops).into_iter().count(), 2);
    }
}
