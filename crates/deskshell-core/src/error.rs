//! Error types for the desktop shell
//!
//! Window store operations never fail: unknown window ids are ignored.
//! Errors only arise at the edges where the host hands us strings or JSON.

/// Errors that can occur at the shell's host-facing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A snap zone name could not be parsed
    UnknownSnapZone(String),

    /// A resize handle name could not be parsed
    UnknownResizeEdge(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::UnknownSnapZone(name) => write!(f, "unknown snap zone: {}", name),
            Self::UnknownResizeEdge(name) => write!(f, "unknown resize edge: {}", name),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

impl From<serde_json::Error> for ShellError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for fallible shell operations
pub type ShellResult<T> = Result<T, ShellError>;
