//! Chat worker - minimal subscribe-and-dispatch walkthrough.
//!
//! Demonstrates:
//! - Typed registration via the builder
//! - Dispatching raw JSON messages
//! - The three distinguishable outcomes: delivered, not routed, hard error
//!
//! Run with: `cargo run --example chat`

use eventroute::{Application, DispatchOutcome};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
struct ChatMessage {
    text: String,
    #[serde(default)]
    sender: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let app = Application::builder()
        .subscribe("chat", "message", |m: ChatMessage| {
            let sender = m.sender.unwrap_or_else(|| "anonymous".to_string());
            format!("{}: {}", sender, m.text)
        })
        .build();

    // Delivered.
    let outcome = app
        .process_message(r#"{"channel":"chat","event":"message","data":{"text":"hi"}}"#)
        .expect("valid message should dispatch");
    println!("delivered -> {:?}", outcome.into_value());

    // Well-formed but unaddressed: silently ignored.
    let outcome = app
        .process_message(r#"{"channel":"chat","event":"typing","data":{}}"#)
        .expect("unroutable message is not an error");
    assert_eq!(outcome, DispatchOutcome::NotRouted);
    println!("not routed -> ignored");

    // Payload violates the shape: hard error, handler not invoked.
    let err = app
        .process_message(r#"{"channel":"chat","event":"message","data":{"text":7}}"#)
        .unwrap_err();
    println!("validation error -> {err}");
}
