//! Channel - per-channel event registries and dispatch.
//!
//! A channel owns two independent registries keyed by event name: the
//! subscriptions it consumes and the publish descriptors it documents as
//! produced. Registration is last-wins with a `tracing` warning on
//! overwrite; dispatch of an unknown event is a silent no-op.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::handler::{PublishDescriptor, Subscription};

/// Outcome of a dispatch attempt.
///
/// Distinguishes "a handler ran" from "nothing was registered for this
/// address". A handler that returns `()` yields `Delivered(Value::Null)`,
/// which is still distinct from [`DispatchOutcome::NotRouted`].
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// A subscription handled the event; carries the handler's return value.
    Delivered(Value),
    /// No subscription was registered for the channel/event pair.
    NotRouted,
}

impl DispatchOutcome {
    /// True if a handler was invoked.
    pub fn is_routed(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered(_))
    }

    /// The handler's return value, if the event was routed.
    pub fn into_value(self) -> Option<Value> {
        match self {
            DispatchOutcome::Delivered(value) => Some(value),
            DispatchOutcome::NotRouted => None,
        }
    }
}

/// Named grouping of events: subscriptions in, publish descriptors out.
///
/// Owned exclusively by a [`crate::ChannelRouter`] under the channel's name.
#[derive(Default)]
pub struct Channel {
    subscriptions: HashMap<String, Subscription>,
    publishes: HashMap<String, PublishDescriptor>,
}

impl Channel {
    /// Create a new empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `event`.
    ///
    /// The handler's argument type becomes the expected payload shape. If
    /// the event already has a subscription, the new one replaces it and a
    /// warning is emitted; the old handler is never invoked again.
    pub fn register_subscription<F, T, R>(&mut self, event: &str, handler: F)
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
    {
        if self.subscriptions.contains_key(event) {
            tracing::warn!(event, "overwriting existing subscription");
        }
        self.subscriptions
            .insert(event.to_string(), Subscription::new(handler));
    }

    /// Register a publish descriptor for `event` with payload shape `T`.
    ///
    /// Last registration wins, with the same overwrite warning as
    /// [`Channel::register_subscription`].
    pub fn register_publish<T: JsonSchema>(&mut self, event: &str) {
        if self.publishes.contains_key(event) {
            tracing::warn!(event, "overwriting existing publish descriptor");
        }
        self.publishes
            .insert(event.to_string(), PublishDescriptor::new::<T>());
    }

    /// Dispatch a raw payload to the subscription registered for `event`.
    ///
    /// An unknown event is not a fault: the envelope was well-formed, just
    /// unaddressed, and the call returns [`DispatchOutcome::NotRouted`].
    ///
    /// # Errors
    ///
    /// Propagates the subscription's validation error unchanged.
    pub fn dispatch(&self, event: &str, payload: &Value) -> Result<DispatchOutcome> {
        match self.subscriptions.get(event) {
            Some(subscription) => subscription.process(payload).map(DispatchOutcome::Delivered),
            None => {
                tracing::debug!(event, "no subscription registered, ignoring");
                Ok(DispatchOutcome::NotRouted)
            }
        }
    }

    /// Schema fragment for this channel.
    ///
    /// Subscriptions appear under `"publish"` and publish descriptors under
    /// `"subscribe"`: the document describes the channel from a client's
    /// point of view (what a client publishes into it, what a client can
    /// subscribe to), per the AsyncAPI convention. A key is present only
    /// when its registry is non-empty.
    pub fn schema(&self) -> Value {
        let mut out = serde_json::Map::new();

        if !self.subscriptions.is_empty() {
            let publish: serde_json::Map<String, Value> = self
                .subscriptions
                .iter()
                .map(|(event, sub)| (event.clone(), sub.schema()))
                .collect();
            out.insert("publish".to_string(), Value::Object(publish));
        }

        if !self.publishes.is_empty() {
            let subscribe: serde_json::Map<String, Value> = self
                .publishes
                .iter()
                .map(|(event, desc)| (event.clone(), desc.schema()))
                .collect();
            out.insert("subscribe".to_string(), Value::Object(subscribe));
        }

        Value::Object(out)
    }
}
