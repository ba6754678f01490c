//! Error types
//!
//! The simulation itself cannot fail once it is running; the only fallible
//! step is turning a settings document into a validated [`Settings`].
//!
//! [`Settings`]: crate::Settings

use std::fmt;

/// Why a set of settings could not be loaded or accepted
#[derive(Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    Io(std::io::Error),
    /// Settings document is not valid JSON for [`crate::Settings`]
    Parse(serde_json::Error),
    /// A value is outside the range the simulation can handle
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {}", err),
            Self::Parse(err) => write!(f, "failed to parse settings: {}", err),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
