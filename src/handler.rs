//! Typed subscriptions and publish descriptors.
//!
//! A [`Subscription`] binds an event to a handler function and derives the
//! expected payload shape from the handler's single argument type: the type
//! must implement `DeserializeOwned` (so the raw payload can be validated
//! into it) and `JsonSchema` (so the subscription can describe it in the
//! exported schema document). Registration is generic over that type, so
//! "handler takes exactly one payload argument" is checked by the compiler
//! rather than at runtime.
//!
//! A [`PublishDescriptor`] is the outbound counterpart: it documents an event
//! the channel emits, carries only a shape, and is never a dispatch target.
//!
//! # Example
//!
//! ```
//! use eventroute::Subscription;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Ping {
//!     seq: u32,
//! }
//!
//! let sub = Subscription::new(|p: Ping| p.seq + 1);
//! let result = sub.process(&json!({"seq": 41})).unwrap();
//! assert_eq!(result, json!(42));
//! ```

use std::marker::PhantomData;

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{Result, RouterError};

/// Trait for dispatchable handler functions.
///
/// Implementations validate the raw payload, invoke the wrapped function,
/// and serialize its return value.
pub trait Handler: Send + Sync + 'static {
    /// Validate `payload` and invoke the handler with the typed result.
    fn call(&self, payload: &Value) -> Result<Value>;
}

/// Wrapper that validates and deserializes the payload before calling the
/// handler, then serializes the handler's return value.
pub struct TypedHandler<F, T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: DeserializeOwned + JsonSchema + 'static,
    R: Serialize + 'static,
{
    handler: F,
    _phantom: PhantomData<fn(T) -> R>,
}

impl<F, T, R> TypedHandler<F, T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: DeserializeOwned + JsonSchema + 'static,
    R: Serialize + 'static,
{
    /// Create a new typed handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, T, R> Handler for TypedHandler<F, T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
    T: DeserializeOwned + JsonSchema + 'static,
    R: Serialize + 'static,
{
    fn call(&self, payload: &Value) -> Result<Value> {
        // Validation strictly precedes invocation: a payload that does not
        // match the declared shape never reaches the handler.
        let parsed: T = serde_json::from_value(payload.clone()).map_err(RouterError::Validation)?;

        let out = (self.handler)(parsed);
        Ok(serde_json::to_value(out)?)
    }
}

/// Registered binding of an event to a handler plus its payload shape.
///
/// Created at registration time, immutable thereafter, owned exclusively by
/// its [`crate::Channel`].
pub struct Subscription {
    handler: Box<dyn Handler>,
    payload_schema: Value,
}

impl Subscription {
    /// Create a subscription from a handler function.
    ///
    /// The handler's argument type becomes the subscription's payload shape;
    /// its JSON Schema is synthesized here, once, at registration time.
    pub fn new<F, T, R>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
    {
        let payload_schema = serde_json::to_value(schema_for!(T))
            .expect("JSON Schema serialization should not fail");

        Self {
            handler: Box::new(TypedHandler::new(handler)),
            payload_schema,
        }
    }

    /// Validate `payload` against the declared shape and invoke the handler.
    ///
    /// Returns the handler's return value serialized to a [`Value`] (a
    /// handler returning `()` yields `Value::Null`).
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Validation`] if the payload does not match the
    /// shape; the handler is not invoked in that case.
    pub fn process(&self, payload: &Value) -> Result<Value> {
        self.handler.call(payload)
    }

    /// Schema fragment for this subscription: `{"payload": <shape schema>}`.
    pub fn schema(&self) -> Value {
        json!({ "payload": self.payload_schema })
    }
}

/// Documentation-only binding of an event to a payload shape.
///
/// Describes an event the channel emits outward. There is no handler and no
/// process operation; publish descriptors only contribute to the exported
/// schema document.
pub struct PublishDescriptor {
    payload_schema: Value,
}

impl PublishDescriptor {
    /// Create a publish descriptor for the shape `T`.
    pub fn new<T: JsonSchema>() -> Self {
        let payload_schema = serde_json::to_value(schema_for!(T))
            .expect("JSON Schema serialization should not fail");

        Self { payload_schema }
    }

    /// Schema fragment for this descriptor: `{"payload": <shape schema>}`.
    pub fn schema(&self) -> Value {
        json!({ "payload": self.payload_schema })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Deserialize, JsonSchema)]
    struct Message {
        text: String,
    }

    #[test]
    fn test_process_invokes_handler_with_typed_payload() {
        let sub = Subscription::new(|m: Message| m.text.to_uppercase());

        let result = sub.process(&json!({"text": "hi"})).unwrap();
        assert_eq!(result, json!("HI"));
    }

    #[test]
    fn test_unit_return_becomes_null() {
        let sub = Subscription::new(|_m: Message| ());

        let result = sub.process(&json!({"text": "hi"})).unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_validation_failure_skips_handler() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_handler = calls.clone();

        let sub = Subscription::new(move |_m: Message| {
            calls_in_handler.fetch_add(1, Ordering::SeqCst);
        });

        // Missing required "text" field.
        let result = sub.process(&json!({}));

        assert!(matches!(result, Err(RouterError::Validation(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_wrong_type_is_validation_error() {
        let sub = Subscription::new(|_m: Message| ());

        let result = sub.process(&json!({"text": 7}));
        assert!(matches!(result, Err(RouterError::Validation(_))));
    }

    #[test]
    fn test_subscription_schema_wraps_payload() {
        let sub = Subscription::new(|_m: Message| ());
        let schema = sub.schema();

        let expected = serde_json::to_value(schema_for!(Message)).unwrap();
        assert_eq!(schema["payload"], expected);
        assert_eq!(schema["payload"]["properties"]["text"]["type"], "string");
    }

    #[test]
    fn test_publish_descriptor_schema() {
        #[derive(JsonSchema)]
        #[allow(dead_code)]
        struct Shipped {
            tracking_id: String,
        }

        let desc = PublishDescriptor::new::<Shipped>();
        let schema = desc.schema();

        let expected = serde_json::to_value(schema_for!(Shipped)).unwrap();
        assert_eq!(schema["payload"], expected);
    }
}
