//! Orders worker - schema export walkthrough.
//!
//! Registers one consumed event and one produced event on the `orders`
//! channel, then prints the exported AsyncAPI-style document. Note the
//! inversion: the subscription shows up under `publish` (what a client
//! publishes into the channel) and the publish descriptor under `subscribe`.
//!
//! Run with: `cargo run --example orders`

use eventroute::Application;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Deserialize, JsonSchema)]
struct OrderCreated {
    id: String,
    amount_cents: u64,
}

#[derive(JsonSchema)]
#[allow(dead_code)]
struct OrderShipped {
    tracking_id: String,
}

fn main() {
    tracing_subscriber::fmt().init();

    let app = Application::builder()
        .subscribe("orders", "created", |o: OrderCreated| {
            println!("order {} for {} cents", o.id, o.amount_cents);
        })
        .publish::<OrderShipped>("orders", "shipped")
        .build();

    let doc = app.schema();
    println!("{}", serde_json::to_string_pretty(&doc).expect("schema document serializes"));
}
