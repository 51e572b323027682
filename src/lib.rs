//! # eventroute
//!
//! Schema-aware, in-process event router with AsyncAPI-style schema export.
//!
//! Handlers are registered per `(channel, event)` pair and are typed: the
//! payload type of the handler's single argument becomes the subscription's
//! expected payload shape, and its JSON Schema (via `schemars`) is what the
//! exported schema document reports. Incoming messages are decoded into an
//! [`Envelope`], validated against the target subscription's shape, and only
//! then handed to the handler.
//!
//! ## Architecture
//!
//! - **Registration** (startup): build the channel/event/handler graph via
//!   [`ApplicationBuilder`] or direct `register_*` calls.
//! - **Dispatch** (runtime): [`Application::process_message`] decodes an
//!   envelope and routes it. Unroutable envelopes yield a silent
//!   [`DispatchOutcome::NotRouted`]; malformed ones are a hard error.
//! - **Schema export**: [`Application::schema`] walks the registries and
//!   emits an AsyncAPI-style document.
//!
//! ## Example
//!
//! ```
//! use eventroute::Application;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct ChatMessage {
//!     text: String,
//! }
//!
//! let app = Application::builder()
//!     .subscribe("chat", "message", |m: ChatMessage| {
//!         println!("got: {}", m.text);
//!     })
//!     .build();
//!
//! let outcome = app
//!     .process_message(r#"{"channel":"chat","event":"message","data":{"text":"hi"}}"#)
//!     .unwrap();
//! assert!(outcome.is_routed());
//! ```

pub mod app;
pub mod channel;
pub mod codec;
pub mod envelope;
pub mod error;
pub mod handler;
pub mod router;

pub use app::{Application, ApplicationBuilder, ASYNCAPI_VERSION};
pub use channel::{Channel, DispatchOutcome};
pub use envelope::Envelope;
pub use error::{Result, RouterError};
pub use handler::{PublishDescriptor, Subscription};
pub use router::ChannelRouter;
