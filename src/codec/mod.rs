//! Codec module - serialization/deserialization for wire messages.
//!
//! This module is the transport seam: it turns raw wire text or bytes into
//! structured values (most importantly [`crate::Envelope`]) and back.
//!
//! - [`JsonCodec`] - JSON text using `serde_json` (the primary wire format)
//! - [`MsgPackCodec`] - MessagePack using `rmp-serde` (`to_vec_named` so
//!   structs encode as maps)
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than
//! trait objects. This allows for compile-time codec selection.
//!
//! # Example
//!
//! ```
//! use eventroute::codec::{JsonCodec, MsgPackCodec};
//!
//! let encoded = JsonCodec::encode(&"hello").unwrap();
//! let decoded: String = JsonCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//!
//! let encoded = MsgPackCodec::encode(&"hello").unwrap();
//! let decoded: String = MsgPackCodec::decode(&encoded).unwrap();
//! assert_eq!(decoded, "hello");
//! ```

mod json;
mod msgpack;

pub use json::JsonCodec;
pub use msgpack::MsgPackCodec;
