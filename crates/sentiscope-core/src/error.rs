//! Error types for SentiScope

/// Result type alias using SentiScope's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for SentiScope operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected before any engine call (empty, too long, too many
    /// words, or nothing left after preprocessing). Always recoverable by
    /// the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Polarity engine or tokenizer failures
    #[error("engine error: {0}")]
    Engine(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors the caller can fix by changing the input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
