use thiserror::Error;

/// Unified error type for client-version operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Malformed version '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in client-version
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a malformed version error for the given raw input
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VersionError::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }
}
