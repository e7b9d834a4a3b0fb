//! Pretty-print documents for logs and debugging.
//!
//! Run with: cargo run --example custom_options

use serde_json::json;
use serde_jsonapi::{meta, to_string_pretty, Document, Options, ResourceObject};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut doc = Document::new();
    doc.add_data(ResourceObject::with_type(
        "setting",
        "theme",
        &json!({ "value": "dark", "inherited": false }),
    )?);
    doc.add_meta(meta!({ "vendor": "demo" }));

    println!("Compact:\n{}\n", doc.to_string()?);
    println!("Pretty (2 spaces):\n{}\n", to_string_pretty(&doc)?);

    let wide = doc.to_vec_with_options(&Options::pretty().with_indent(4))?;
    println!("Pretty (4 spaces):\n{}", String::from_utf8(wide)?);

    Ok(())
}
