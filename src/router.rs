//! ChannelRouter - the registry of channels.
//!
//! Channels are created lazily on first registration and never removed.
//! Dispatch to an unknown channel is the same silent no-op as dispatch to an
//! unknown event inside a known channel, propagated one level up.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::channel::{Channel, DispatchOutcome};
use crate::error::Result;

/// Registry mapping channel names to [`Channel`]s.
#[derive(Default)]
pub struct ChannelRouter {
    channels: HashMap<String, Channel>,
}

impl ChannelRouter {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `event` on `channel`.
    ///
    /// The channel is created lazily the first time any event is registered
    /// under its name.
    pub fn register_subscription<F, T, R>(&mut self, channel: &str, event: &str, handler: F)
    where
        F: Fn(T) -> R + Send + Sync + 'static,
        T: DeserializeOwned + JsonSchema + 'static,
        R: Serialize + 'static,
    {
        self.channels
            .entry(channel.to_string())
            .or_default()
            .register_subscription(event, handler);
    }

    /// Register a publish descriptor for `event` on `channel` with payload
    /// shape `T`.
    pub fn register_publish<T: JsonSchema>(&mut self, channel: &str, event: &str) {
        self.channels
            .entry(channel.to_string())
            .or_default()
            .register_publish::<T>(event);
    }

    /// Route a raw payload to the subscription at `channel`/`event`.
    ///
    /// # Errors
    ///
    /// Propagates the subscription's validation error unchanged.
    pub fn dispatch(&self, channel: &str, event: &str, payload: &Value) -> Result<DispatchOutcome> {
        match self.channels.get(channel) {
            Some(ch) => ch.dispatch(event, payload),
            None => {
                tracing::debug!(channel, event, "unknown channel, ignoring");
                Ok(DispatchOutcome::NotRouted)
            }
        }
    }

    /// Schema fragment: mapping from channel name to the channel's schema.
    pub fn schema(&self) -> Value {
        let channels: serde_json::Map<String, Value> = self
            .channels
            .iter()
            .map(|(name, channel)| (name.clone(), channel.schema()))
            .collect();
        Value::Object(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, JsonSchema)]
    struct Message {
        text: String,
    }

    #[test]
    fn test_lazy_channel_creation() {
        let mut router = ChannelRouter::new();
        router.register_subscription("chat", "message", |m: Message| m.text);

        let outcome = router
            .dispatch("chat", "message", &json!({"text": "hi"}))
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Delivered(json!("hi")));
    }

    #[test]
    fn test_unknown_channel_is_noop() {
        let router = ChannelRouter::new();

        for _ in 0..3 {
            let outcome = router.dispatch("nope", "message", &json!({})).unwrap();
            assert_eq!(outcome, DispatchOutcome::NotRouted);
        }
    }

    #[test]
    fn test_unknown_event_in_known_channel_is_noop() {
        let mut router = ChannelRouter::new();
        router.register_subscription("chat", "message", |_m: Message| ());

        let outcome = router.dispatch("chat", "unknown", &json!({})).unwrap();
        assert_eq!(outcome, DispatchOutcome::NotRouted);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut router = ChannelRouter::new();
        router.register_subscription("a", "e", |_m: Message| "a");
        router.register_subscription("b", "e", |_m: Message| "b");

        let outcome = router.dispatch("b", "e", &json!({"text": "x"})).unwrap();
        assert_eq!(outcome, DispatchOutcome::Delivered(json!("b")));
    }

    #[test]
    fn test_schema_maps_channel_names() {
        let mut router = ChannelRouter::new();
        router.register_subscription("chat", "message", |_m: Message| ());

        let schema = router.schema();
        assert!(schema["chat"]["publish"]["message"]["payload"].is_object());
    }

    #[test]
    fn test_empty_router_schema_is_empty_object() {
        let router = ChannelRouter::new();
        assert_eq!(router.schema(), json!({}));
    }
}
