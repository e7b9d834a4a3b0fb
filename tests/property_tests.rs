//! Property-based tests for the envelope rules.
//!
//! Exact bytes are covered by the document tests; these check that the
//! structural rules hold for arbitrary ids, attribute values and meta.

use proptest::prelude::*;
use serde_json::Value;
use serde_jsonapi::{CollectionDocument, Document, ErrorDocument, ErrorObject, Meta, ResourceObject};

fn resource(id: &str, label: &str) -> ResourceObject {
    ResourceObject::with_type("item", id, &serde_json::json!({ "label": label })).unwrap()
}

fn meta_entries() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..6)
}

fn top_level_keys(bytes: &[u8]) -> Vec<String> {
    match serde_json::from_slice::<Value>(bytes).unwrap() {
        Value::Object(map) => map.keys().cloned().collect(),
        other => panic!("Expected object, got {}", other),
    }
}

proptest! {
    #[test]
    fn prop_serialization_is_idempotent(
        id in ".*",
        label in ".*",
        entries in meta_entries(),
    ) {
        let mut doc = Document::new();
        doc.add_data(resource(&id, &label));
        doc.add_meta(entries.into_iter().collect::<Meta>());

        prop_assert_eq!(doc.to_vec().unwrap(), doc.to_vec().unwrap());
    }

    #[test]
    fn prop_errors_suppress_data(
        ids in prop::collection::vec("[0-9]{1,4}", 0..4),
        titles in prop::collection::vec("[a-z ]{1,12}", 1..4),
        errors_first in any::<bool>(),
    ) {
        let mut doc = Document::new();
        if errors_first {
            for title in &titles {
                doc.add_error(ErrorObject::new(title.as_str()));
            }
        }
        for id in &ids {
            doc.add_data(resource(id, "x"));
        }
        if !errors_first {
            for title in &titles {
                doc.add_error(ErrorObject::new(title.as_str()));
            }
        }

        let keys = top_level_keys(&doc.to_vec().unwrap());
        prop_assert_eq!(keys, vec!["errors".to_string()]);
        prop_assert_eq!(doc.errors().len(), titles.len());
    }

    #[test]
    fn prop_collection_keeps_append_order(ids in prop::collection::vec("[a-z0-9]{0,6}", 0..10)) {
        let mut doc = CollectionDocument::new();
        for id in &ids {
            doc.add_data(resource(id, "x"));
        }

        let parsed: Value = serde_json::from_slice(&doc.to_vec().unwrap()).unwrap();
        let data = parsed["data"].as_array().unwrap();
        prop_assert_eq!(data.len(), ids.len());
        for (entry, id) in data.iter().zip(&ids) {
            prop_assert_eq!(entry["id"].as_str(), Some(id.as_str()));
        }
    }

    #[test]
    fn prop_meta_is_second_and_only_when_present(entries in meta_entries()) {
        let has_meta = !entries.is_empty();
        let meta: Meta = entries.into_iter().collect();

        let mut single = Document::new();
        single.add_meta(meta.clone());
        let mut collection = CollectionDocument::new();
        collection.add_meta(meta.clone());
        let mut errors = ErrorDocument::new();
        errors.add_meta(meta);

        for (bytes, primary) in [
            (single.to_vec().unwrap(), "data"),
            (collection.to_vec().unwrap(), "data"),
            (errors.to_vec().unwrap(), "errors"),
        ] {
            let mut expected = vec![primary.to_string()];
            if has_meta {
                expected.push("meta".to_string());
            }
            prop_assert_eq!(top_level_keys(&bytes), expected);
        }
    }
}
