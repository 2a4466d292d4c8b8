//! Error types for the tagged codec

use thiserror::Error;

/// Errors that can occur while encoding or decoding tagged JSON
#[derive(Error, Debug)]
pub enum TagError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value is not JSON serializable: {0}")]
    Unserializable(String),

    #[error("malformed \"{tag}\" payload: {reason}")]
    MalformedPayload { tag: String, reason: String },
}

pub type Result<T> = std::result::Result<T, TagError>;
