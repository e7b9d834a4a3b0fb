//! Serialize a single resource.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_jsonapi::{Document, Registry, ResourceObject};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry.register::<User>();

    let user = User {
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
    };

    let mut doc = Document::new();
    println!("Empty document: {}", doc.to_string()?);

    doc.add_data(ResourceObject::new(&registry, "42", &user)?);
    println!("With data:      {}", doc.to_string()?);

    Ok(())
}
