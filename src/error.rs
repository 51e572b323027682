//! Error types for eventroute.

use thiserror::Error;

/// Main error type for all router operations.
#[derive(Debug, Error)]
pub enum RouterError {
    /// JSON error while decoding an envelope or encoding a handler result.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// MsgPack envelope decode error.
    #[error("MsgPack decode error: {0}")]
    MsgPackDecode(#[from] rmp_serde::decode::Error),

    /// MsgPack envelope encode error.
    #[error("MsgPack encode error: {0}")]
    MsgPackEncode(#[from] rmp_serde::encode::Error),

    /// Payload failed shape validation inside a subscription.
    ///
    /// Kept distinct from [`RouterError::Json`] so callers can tell a
    /// malformed envelope apart from a well-formed envelope carrying a
    /// payload that does not match the handler's declared shape.
    #[error("payload validation failed: {0}")]
    Validation(#[source] serde_json::Error),
}

/// Result type alias using RouterError.
pub type Result<T> = std::result::Result<T, RouterError>;
