//! JSON codec using `serde_json`.
//!
//! The primary wire format: envelopes arrive as JSON strings of the form
//! `{"channel": "...", "event": "...", "data": {...}}`.

use crate::error::Result;

/// JSON text codec for structured data.
pub struct JsonCodec;

impl JsonCodec {
    /// Encode a value to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns error if the value cannot be serialized.
    #[inline]
    pub fn encode<T: serde::Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Decode a JSON string to a value.
    ///
    /// # Errors
    ///
    /// Returns error if the string cannot be deserialized to type T.
    #[inline]
    pub fn decode<T: serde::de::DeserializeOwned>(raw: &str) -> Result<T> {
        Ok(serde_json::from_str(raw)?)
    }
}
