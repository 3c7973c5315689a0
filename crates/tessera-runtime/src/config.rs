#![forbid(unsafe_code)]

//! Policy-as-data configuration for the input router.
//!
//! [`RouterConfig`] gathers the router's tunables so they can be loaded from
//! TOML or JSON at startup instead of being fixed at compile time.
//!
//! # Loading
//!
//! ```toml
//! # tessera-router.toml
//! [mailbox]
//! max_queued_events = 256
//!
//! [keyboard]
//! reattach_on_focus_move = false
//! ```
//!
//! ```rust,ignore
//! let config = RouterConfig::from_toml_file("tessera-router.toml")?;
//! let router = Router::with_config(config);
//! ```
//!
//! # Defaults
//!
//! `RouterConfig::default()` is unbounded and re-attaches the keyboard when
//! focus moves while it is visible. Omitted fields keep their defaults.

#[cfg(feature = "router-config")]
use std::path::Path;

#[cfg(feature = "router-config")]
use serde::{Deserialize, Serialize};

/// Top-level router configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "router-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "router-config", serde(default))]
pub struct RouterConfig {
    /// Mailbox sizing and bounds.
    pub mailbox: MailboxConfig,

    /// Virtual keyboard policy.
    pub keyboard: KeyboardConfig,
}

/// Mailbox parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "router-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "router-config", serde(default))]
pub struct MailboxConfig {
    /// Maximum external events queued per handler between drains. `None`
    /// means unbounded. Synthetic focus events are never rejected.
    pub max_queued_events: Option<usize>,

    /// Capacity reserved for each new mailbox.
    pub initial_capacity: usize,
}

impl Default for MailboxConfig {
    fn default() -> Self {
        Self {
            max_queued_events: None,
            initial_capacity: 4,
        }
    }
}

/// Virtual keyboard parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "router-config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "router-config", serde(default))]
pub struct KeyboardConfig {
    /// Emit `Open` when focus moves to another handler while the keyboard is
    /// visible and the frame states no keyboard preference.
    pub reattach_on_focus_move: bool,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            reattach_on_focus_move: true,
        }
    }
}

impl RouterConfig {
    /// Load from a TOML string.
    #[cfg(feature = "router-config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str::<Self>(s)
            .map_err(ConfigError::Toml)?
            .validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "router-config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "router-config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(s)
            .map_err(ConfigError::Json)?
            .validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "router-config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.mailbox.max_queued_events == Some(0) {
            errors.push("mailbox.max_queued_events must be > 0 when set".into());
        }

        if self.mailbox.initial_capacity > 1 << 16 {
            errors.push(format!(
                "mailbox.initial_capacity must be <= 65536, got {}",
                self.mailbox.initial_capacity
            ));
        }

        errors
    }

    /// Return `self` if it validates, or the collected errors.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Errors from loading or validating a [`RouterConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "router-config")]
    Toml(toml::de::Error),
    /// JSON parse error.
    #[cfg(feature = "router-config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "router-config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "router-config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "router-config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "router-config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
