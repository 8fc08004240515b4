//! Error types for the magnifier core
//!
//! Command handlers never surface errors: a failed operation degrades to
//! "no visible change". These types are returned only by activation,
//! configuration loading and the windowing binding.

use crate::types::WindowId;

/// Errors reported by a [`crate::WindowSystem`] implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSystemError {
    /// Geometry could not be queried for the window
    GeometryUnavailable(WindowId),

    /// The window could not be resized
    ResizeFailed {
        /// Window that was being resized
        window: WindowId,
        /// Why the resize failed
        reason: String,
    },
}

impl std::fmt::Display for WindowSystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GeometryUnavailable(window) => {
                write!(f, "geometry unavailable for window {:#x}", window)
            }
            Self::ResizeFailed { window, reason } => {
                write!(f, "resize of window {:#x} failed: {}", window, reason)
            }
        }
    }
}

impl std::error::Error for WindowSystemError {}

/// Errors that can occur in magnifier operations
#[derive(Debug, Clone, PartialEq)]
pub enum MagnifierError {
    /// A new window context could not be allocated
    ContextAllocation,

    /// A configuration value is out of range
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// Configuration JSON could not be parsed
    ConfigParse(String),

    /// The windowing binding reported an error
    WindowSystem(WindowSystemError),
}

impl MagnifierError {
    /// Create an invalid config error.
    pub fn invalid_config(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidConfig { field, reason }
    }

    /// Create a config parse error with message.
    pub fn config_parse(msg: impl Into<String>) -> Self {
        Self::ConfigParse(msg.into())
    }
}

impl std::fmt::Display for MagnifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContextAllocation => write!(f, "failed to allocate window context"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::ConfigParse(msg) => write!(f, "config parse error: {}", msg),
            Self::WindowSystem(err) => write!(f, "window system error: {}", err),
        }
    }
}

impl std::error::Error for MagnifierError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WindowSystem(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WindowSystemError> for MagnifierError {
    fn from(e: WindowSystemError) -> Self {
        MagnifierError::WindowSystem(e)
    }
}

impl From<serde_json::Error> for MagnifierError {
    fn from(e: serde_json::Error) -> Self {
        MagnifierError::ConfigParse(e.to_string())
    }
}

/// Result type alias for magnifier operations
pub type MagnifierResult<T> = Result<T, MagnifierError>;
