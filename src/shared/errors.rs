use thiserror::Error;

/// Key-value store failures. Always recovered: reads fall back to defaults,
/// writes are dropped and the in-memory state stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("Malformed value for {key}: {reason}")]
    Decode { key: String, reason: String },
}

/// Failures of the form POST itself
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; `body` may still hold a structured response
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
