use std::sync::Arc;
use std::thread;

use serde::Serialize;
use serde_jsonapi::{Document, Error, Registry, ResourceObject, TypeNames};

#[derive(Serialize)]
struct TestItem {
    name: String,
}

#[derive(Serialize)]
struct Person {
    name: String,
}

#[derive(Serialize)]
struct Address {
    street: String,
}

#[test]
fn test_registry_registers_arbitrary_types() {
    let mut registry = Registry::new();
    registry.register_value(&TestItem {
        name: String::new(),
    });

    assert_eq!(
        registry.names::<TestItem>(),
        Some(&TypeNames::new("testitem", "testitems"))
    );
    assert_eq!(
        registry
            .name_for(&TestItem {
                name: String::new()
            })
            .unwrap(),
        "testitem"
    );
}

#[test]
fn test_unregistered_then_registered() {
    let mut registry = Registry::new();
    assert!(matches!(
        registry.name_for_type::<Address>(),
        Err(Error::UnregisteredType { .. })
    ));

    registry.register::<Address>();
    assert_eq!(registry.name_for_type::<Address>().unwrap(), "address");
    assert_eq!(
        registry
            .plural_for(&Address {
                street: String::new()
            })
            .unwrap(),
        "addresses"
    );
}

#[test]
fn test_explicit_names_for_irregular_plurals() {
    let mut registry = Registry::new();
    assert_eq!(registry.register::<Person>().plural, "persons");

    registry.register_with_names::<Person>("person", "people");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.names::<Person>().unwrap().plural, "people");
}

#[test]
fn test_distinct_types_may_share_a_name() {
    mod other {
        pub struct TestItem;
    }

    let mut registry = Registry::new();
    registry.register::<TestItem>();
    registry.register::<other::TestItem>();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.name_for(&other::TestItem).unwrap(), "testitem");
}

#[test]
fn test_shared_registry_across_threads() {
    let mut registry = Registry::new();
    registry.register::<TestItem>();
    let registry = Arc::new(registry);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let item = TestItem {
                    name: format!("item {}", i),
                };
                let mut doc = Document::new();
                doc.add_data(ResourceObject::new(&registry, i.to_string(), &item).unwrap());
                doc.to_string().unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let payload = handle.join().unwrap();
        assert_eq!(
            payload,
            format!(
                r#"{{"data":{{"type":"testitem","id":"{i}","attributes":{{"name":"item {i}"}}}}}}"#
            )
        );
    }
}
