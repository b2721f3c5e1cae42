//! Error handling for Twilly
//!
//! This module defines the validation error raised while building flows and
//! the crate-wide error type used by configuration and the conversation driver.

use thiserror::Error;

/// Validation failures raised while constructing actions and flows.
///
/// The display strings are matched verbatim by callers and must not change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Reply constructor expects a non-empty string as the first argument")]
    ReplyBody,

    #[error("Flow constructor expects a non-empty string as the first argument")]
    FlowName,

    #[error("Flow name has already been set: {current}")]
    FlowNameAlreadySet { current: String },

    #[error("Flow addAction expects a non-empty string as the first argument")]
    ActionName,

    #[error("Flow addAction expects a function as the second argument")]
    ActionResolver,

    #[error("Every Flow's action names must be unique. Unexpected duplicate name: {name}")]
    DuplicateActionName { name: String },

    #[error("Flow addActions expects an array of objects with a name property set to a non-empty string")]
    ActionEntryName,

    #[error("Flow addActions must add at least one action to the flow")]
    NoActions,
}

/// Main error type for Twilly
#[derive(Error, Debug)]
pub enum TwillyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Twilly operations
pub type Result<T> = std::result::Result<T, TwillyError>;

/// Result type alias for flow and action construction
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

impl TwillyError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TwillyError::Validation(_) => ErrorSeverity::Critical,
            TwillyError::Config(_) => ErrorSeverity::Critical,
            TwillyError::ConfigLoad(_) => ErrorSeverity::Critical,
            TwillyError::InvalidStateTransition { .. } => ErrorSeverity::Warning,
            TwillyError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
