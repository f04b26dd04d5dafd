//! User Schema Example
//!
//! Builds a user schema from leaves and combinators and validates three
//! users against it.
//!
//! Run with: cargo run --example user_schema --features tracing

use serde_json::{json, Value};
use validata::prelude::*;

fn user_schema() -> Result<Dict, SchemaError> {
    let mut hobbies = List::default();
    hobbies.set_validator(Str::new());

    Dict::builder()
        .required("_id", StrUuid)
        .required("name", Str::with_pattern("[A-Z][a-z]+")?)
        .required("gender", Choice::new(["male", "female"]))
        .optional("hobbies", hobbies)
        .optional("home", IpPort::new())
        .ignore_unknown(false)
        .build()
}

fn users() -> Vec<(&'static str, Value)> {
    vec![
        (
            "john",
            json!({
                "_id": "e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd",
                "name": "John",
                "gender": "male",
                "hobbies": ["python", "blarg", "blub", 1],
            }),
        ),
        (
            "paula",
            json!({
                "_id": "e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd",
                "name": "Paula",
                "gender": "female",
                "home": "::1:8080",
            }),
        ),
        (
            "weirdo",
            json!({
                "_id": "e7a5ff1c-ee5e-4ca9-a3d3-0106dd826dcd",
                "name": "Weirdo",
                "gender": "all of them",
                "hobbies": ["mitosis"],
                "blarg": true,
            }),
        ),
    ]
}

fn main() -> Result<(), SchemaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let schema = user_schema()?;
    tracing::info!(?schema, "schema ready");

    for (label, user) in users() {
        match schema.validate(&user) {
            Ok(()) => println!("{}: user is valid", label),
            Err(err) => println!("{}: {}", label, err),
        }
    }
    Ok(())
}
