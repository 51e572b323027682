//! Envelope - the decoded unit of incoming traffic.
//!
//! An envelope names the target channel and event and carries the raw,
//! not-yet-validated payload under `data`. This exact three-field shape is
//! the wire contract a transport must produce.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{JsonCodec, MsgPackCodec};
use crate::error::Result;

/// Decoded wire message: target channel, target event, raw payload.
///
/// Immutable once decoded; constructed per incoming message and discarded
/// after dispatch. The payload stays an untyped [`Value`] until the target
/// subscription validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Target channel name.
    pub channel: String,
    /// Target event name within the channel.
    pub event: String,
    /// Raw payload, validated later against the subscription's shape.
    pub data: Value,
}

impl Envelope {
    /// Decode an envelope from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::Json`] if the message is not valid JSON
    /// or does not match the three-field envelope shape.
    pub fn from_json(raw: &str) -> Result<Self> {
        JsonCodec::decode(raw)
    }

    /// Decode an envelope from MsgPack bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::MsgPackDecode`] on malformed input.
    pub fn from_msgpack(raw: &[u8]) -> Result<Self> {
        MsgPackCodec::decode(raw)
    }

    /// Encode this envelope as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        JsonCodec::encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_json_envelope() {
        let env =
            Envelope::from_json(r#"{"channel":"chat","event":"message","data":{"text":"hi"}}"#)
                .unwrap();

        assert_eq!(env.channel, "chat");
        assert_eq!(env.event, "message");
        assert_eq!(env.data, json!({"text": "hi"}));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        // No "event" field.
        let result = Envelope::from_json(r#"{"channel":"chat","data":{}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(Envelope::from_json("not json at all").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let env = Envelope {
            channel: "orders".to_string(),
            event: "created".to_string(),
            data: json!({"id": "o-1"}),
        };

        let raw = env.to_json().unwrap();
        let decoded = Envelope::from_json(&raw).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn test_msgpack_roundtrip() {
        let env = Envelope {
            channel: "chat".to_string(),
            event: "message".to_string(),
            data: json!({"text": "hello"}),
        };

        let bytes = MsgPackCodec::encode(&env).unwrap();
        let decoded = Envelope::from_msgpack(&bytes).unwrap();
        assert_eq!(decoded, env);
    }

    #[test]
    fn test_scalar_data_is_allowed() {
        // The payload slot is opaque at this layer; shape checks happen in
        // the subscription, not while decoding the envelope.
        let env = Envelope::from_json(r#"{"channel":"c","event":"e","data":42}"#).unwrap();
        assert_eq!(env.data, json!(42));
    }
}
