//! Serialize a collection of resources with paging meta.
//!
//! Run with: cargo run --example collection

use serde::Serialize;
use serde_jsonapi::{CollectionDocument, Meta, Registry, ResourceObject};
use std::error::Error;

#[derive(Serialize)]
struct Article {
    title: String,
    words: u32,
}

#[derive(Serialize)]
struct Paging {
    page: u32,
    total: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut registry = Registry::new();
    registry.register::<Article>();

    let articles = vec![
        Article {
            title: "Ownership".to_string(),
            words: 1200,
        },
        Article {
            title: "Lifetimes".to_string(),
            words: 900,
        },
    ];

    let mut doc = CollectionDocument::new();
    for (id, article) in articles.iter().enumerate() {
        doc.add_data(ResourceObject::new(&registry, id.to_string(), article)?);
    }
    doc.add_meta(Meta::from_serialize(&Paging {
        page: 1,
        total: articles.len(),
    })?);

    println!(
        "{} ({} plural)",
        doc.to_string()?,
        registry.plural_for(&articles[0])?
    );

    Ok(())
}
