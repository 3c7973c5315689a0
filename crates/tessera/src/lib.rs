#![forbid(unsafe_code)]

//! Tessera public facade crate.
//!
//! Re-exports the handler vocabulary from `tessera-core` and the input
//! router from `tessera-runtime`, plus a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tessera_core::event::{
    EditEvent, Event, FocusEvent, InputHint, KeyCode, KeyEvent, KeyState, Modifiers,
};
pub use tessera_core::op::{FocusOp, InputOp, InvalidateOp, Op, Ops, ScopeId, SoftKeyboardOp};
pub use tessera_core::tag::Tag;

// --- Runtime re-exports ----------------------------------------------------

pub use tessera_runtime::{
    ConfigError, Delivery, EventInjector, Host, KeyboardDecision, Router, RouterConfig,
    RouterStats, SharedRouter, TextInputDriver,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Tessera apps.
#[derive(Debug)]
pub enum Error {
    /// Router configuration could not be loaded or is invalid.
    Config(ConfigError),
    /// I/O failure outside configuration loading.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "router config: {err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for Tessera APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a router from a TOML configuration file.
#[cfg(feature = "router-config")]
pub fn router_from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Router> {
    let config = RouterConfig::from_toml_file(path)?;
    Ok(Router::with_config(config))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Delivery, Error, Event, FocusEvent, FocusOp, InputHint, InputOp, KeyCode, KeyEvent,
        KeyboardDecision, Modifiers, Ops, Result, Router, SoftKeyboardOp, Tag,
    };

    pub use crate::{core, runtime};
}

pub use tessera_core as core;
pub use tessera_runtime as runtime;
