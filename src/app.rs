//! Application facade and builder.
//!
//! The [`ApplicationBuilder`] provides a fluent API for registering
//! subscriptions and publish descriptors at definition time. The
//! [`Application`] owns the router and exposes the runtime surface:
//! `process_message` for incoming traffic and `schema` for the exported
//! AsyncAPI-style document.
//!
//! # Example
//!
//! ```
//! use eventroute::Application;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct OrderCreated {
//!     id: String,
//! }
//!
//! #[derive(JsonSchema)]
//! struct OrderShipped {
//!     tracking_id: String,
//! }
//!
//! let app = Application::builder()
//!     .subscribe("orders", "created", |o: OrderCreated| o.id)
//!     .publish::<OrderShipped>("orders", "shipped")
//!     .build();
//!
//! let doc = app.schema();
//! assert_eq!(doc["asyncapi"], "2.2.0");
//! assert!(doc["channels"]["orders"]["publish"]["created"]["payload"].is_object());
//! ```

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::channel::DispatchOutcome;
use crate::envelope::Envelope;
use crate::error::Result;
use crate::router::ChannelRouter;

/// AsyncAPI version string reported in the exported schema document.
pub const ASYNCAPI_VERSION: &str = "2.2.0";

/// Builder for configuring and creating an [`Application`].
///
/// Use the fluent API to register subscriptions and publish descriptors,
/// then call `build()` to produce the application.
#[derive(Default)]
pub struct ApplicationBuilder {
    router: ChannelRouter,
}

impl ApplicationBuilder {
    /// Create a new application builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscription handler for `event` on `channel`.
    ///
    /// The handler's argument type becomes the expected payload shape.
    pub fn subscribe<F, T, R>(mut self, channel: &str, event: &str, handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
    {
        self.router.register_subscription(channel, event, handler);
        self
    }

    /// Register a publish descriptor for `event` on `channel` with payload
    /// shape `T`.
    ///
    /// Publish descriptors are documentation-only; they appear in the schema
    /// document but are never dispatch targets.
    pub fn publish<T: JsonSchema>(mut self, channel: &str, event: &str) -> Self {
        self.router.register_publish::<T>(channel, event);
        self
    }

    /// Build the application.
    pub fn build(self) -> Application {
        Application {
            router: self.router,
        }
    }
}

/// Top-level facade: registration, dispatch-from-raw-message, schema export.
///
/// Owns exactly one [`ChannelRouter`] for its lifetime. Registration takes
/// `&mut self` and dispatch takes `&self`, so the registration phase and the
/// dispatch phase cannot interleave without external synchronization.
#[derive(Default)]
pub struct Application {
    router: ChannelRouter,
}

impl Application {
    /// Create a new application with empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new application builder.
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    /// Register a subscription handler for `event` on `channel`.
    pub fn register_subscription<F, T, R>(&mut self, channel: &str, event: &str, handler: F)
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
    {
        self.router.register_subscription(channel, event, handler);
    }

    /// Register a publish descriptor for `event` on `channel` with payload
    /// shape `T`.
    pub fn register_publish<T: JsonSchema>(&mut self, channel: &str, event: &str) {
        self.router.register_publish::<T>(channel, event);
    }

    /// Decode a JSON envelope and route it.
    ///
    /// A message that cannot be decoded into the three-field envelope shape
    /// is a hard error. A well-formed envelope addressed to an unknown
    /// channel or event is not: it yields [`DispatchOutcome::NotRouted`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::Json`] on a malformed envelope and
    /// [`crate::RouterError::Validation`] when the payload does not match
    /// the target subscription's shape.
    pub fn process_message(&self, raw: &str) -> Result<DispatchOutcome> {
        let envelope = Envelope::from_json(raw)?;
        self.dispatch_envelope(&envelope)
    }

    /// Decode a MsgPack envelope and route it.
    ///
    /// Binary counterpart of [`Application::process_message`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::RouterError::MsgPackDecode`] on a malformed envelope.
    pub fn process_message_msgpack(&self, raw: &[u8]) -> Result<DispatchOutcome> {
        let envelope = Envelope::from_msgpack(raw)?;
        self.dispatch_envelope(&envelope)
    }

    /// Route an already-decoded envelope.
    pub fn dispatch_envelope(&self, envelope: &Envelope) -> Result<DispatchOutcome> {
        self.router
            .dispatch(&envelope.channel, &envelope.event, &envelope.data)
    }

    /// Export the AsyncAPI-style schema document.
    ///
    /// Top-level keys are `asyncapi` (version string) and `channels` (per
    /// channel: `publish` for consumed events, `subscribe` for produced
    /// ones, each event wrapped as `{"payload": <shape schema>}`).
    pub fn schema(&self) -> Value {
        json!({
            "asyncapi": ASYNCAPI_VERSION,
            "channels": self.router.schema(),
        })
    }
}
