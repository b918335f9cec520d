use thiserror::Error;

/// Top-level error type for the Brain client.
///
/// Covers faults outside the request path (configuration, IO,
/// serialization). Request-path faults have their own type in the gateway
/// crate and are converted to channel-scoped messages by the orchestrator,
/// so they never surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BrainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for BrainError {
    fn from(err: toml::de::Error) -> Self {
        BrainError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for BrainError {
    fn from(err: toml::ser::Error) -> Self {
        BrainError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BrainError {
    fn from(err: serde_json::Error) -> Self {
        BrainError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Brain operations.
pub type Result<T> = std::result::Result<T, BrainError>;
