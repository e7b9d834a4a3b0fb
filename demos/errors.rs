//! Report failures as error documents.
//!
//! Run with: cargo run --example errors

use serde::Serialize;
use serde_jsonapi::{meta, AnyDocument, Document, ErrorDocument, ErrorObject, Registry, ResourceObject};
use std::error::Error;

#[derive(Serialize)]
struct Order {
    total: f64,
}

fn render(registry: &Registry, order: &Order) -> AnyDocument {
    match ResourceObject::new(registry, "1", order) {
        Ok(resource) => {
            let mut doc = Document::new();
            doc.add_data(resource);
            doc.into()
        }
        // Order was never registered: degrade to an error document.
        Err(err) => err.into(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();
    println!("{}", render(&registry, &Order { total: 9.5 }).to_string()?);

    let mut doc = ErrorDocument::new();
    doc.add_error(
        ErrorObject::new("Invalid attribute")
            .with_detail("total must be positive")
            .with_status("422")
            .with_code("invalid_total"),
    );
    doc.add_meta(meta!({ "request": "abc123" }));
    println!("{}", doc.to_string()?);

    Ok(())
}
