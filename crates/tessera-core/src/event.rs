#![forbid(unsafe_code)]

//! Events delivered to input handlers.
//!
//! Handlers receive [`Event`] values by draining their mailbox. Two kinds
//! exist:
//!
//! - **Synthetic**: [`FocusEvent`], produced by the router when a handler
//!   first appears or gains/loses focus.
//! - **External**: [`KeyEvent`] and [`EditEvent`], injected by the platform
//!   layer. The router treats their payload as opaque.
//!
//! All events derive `Clone`, `PartialEq`, and `Eq` for use in tests and
//! pattern matching.

use bitflags::bitflags;

/// An event addressed to a single handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Focus gained (`true`) or lost (`false`).
    Focus(FocusEvent),

    /// A key press or release.
    Key(KeyEvent),

    /// Committed text from the platform text-input layer.
    Edit(EditEvent),
}

impl Event {
    /// The focus payload, if this is a focus event.
    #[must_use]
    pub const fn as_focus(&self) -> Option<FocusEvent> {
        match self {
            Self::Focus(ev) => Some(*ev),
            _ => None,
        }
    }

    /// Whether the router produced this event itself.
    #[must_use]
    pub const fn is_synthetic(&self) -> bool {
        matches!(self, Self::Focus(_))
    }
}

impl From<FocusEvent> for Event {
    fn from(ev: FocusEvent) -> Self {
        Self::Focus(ev)
    }
}

impl From<KeyEvent> for Event {
    fn from(ev: KeyEvent) -> Self {
        Self::Key(ev)
    }
}

impl From<EditEvent> for Event {
    fn from(ev: EditEvent) -> Self {
        Self::Edit(ev)
    }
}

/// Synthetic focus notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusEvent {
    /// Whether the receiving handler now holds focus.
    pub focus: bool,
}

impl FocusEvent {
    /// Create a focus event.
    #[must_use]
    pub const fn new(focus: bool) -> Self {
        Self { focus }
    }

    /// Focus gained.
    #[must_use]
    pub const fn gained() -> Self {
        Self::new(true)
    }

    /// Focus lost (or never held).
    #[must_use]
    pub const fn lost() -> Self {
        Self::new(false)
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that changed state.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// Press or release.
    pub state: KeyState,
}

impl KeyEvent {
    /// Create a key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            state: KeyState::Press,
        }
    }

    /// Set the modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the key state.
    #[must_use]
    pub const fn with_state(mut self, state: KeyState) -> Self {
        self.state = state;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if the platform shortcut modifier is held.
    #[must_use]
    pub fn shortcut(&self) -> bool {
        self.modifiers.contains(Modifiers::shortcut())
    }
}

/// Key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key.
    Char(char),
    /// Space bar.
    Space,
    /// Enter/Return.
    Enter,
    /// Escape.
    Escape,
    /// Backspace.
    Backspace,
    /// Delete.
    Delete,
    /// Tab.
    Tab,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Function key (F1-F24).
    F(u8),
}

/// Whether a key went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    /// Key was pressed.
    #[default]
    Press,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Modifiers {
    /// The modifier used for shortcuts on the current platform: Command on
    /// Apple platforms, Control elsewhere.
    #[must_use]
    pub const fn shortcut() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Self::SUPER
        } else {
            Self::CTRL
        }
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Text committed by the platform input method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    /// The committed text.
    pub text: String,
}

impl EditEvent {
    /// Create an edit event.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Hint to the platform about the kind of text a handler expects, used to
/// choose a virtual keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputHint {
    /// No preference.
    #[default]
    Any,
    /// Free-form text.
    Text,
    /// Digits and numeric punctuation.
    Numeric,
    /// Email address.
    Email,
    /// URL.
    Url,
    /// Telephone number.
    Telephone,
}
