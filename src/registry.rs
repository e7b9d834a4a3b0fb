//! Type registry mapping Rust types to resource type names.
//!
//! Every resource object carries a `type` member. The [`Registry`] resolves it
//! from the Rust type of the domain value: each registered type maps to a
//! [`TypeNames`] pair holding the singular name (used as `type`) and the
//! plural name (used by collaborators such as routers for collection paths).
//!
//! Types are keyed by [`TypeId`], so only explicitly registered types resolve.
//! Names are derived from the type's own name unless given explicitly:
//!
//! ```rust
//! use serde_jsonapi::Registry;
//!
//! struct BlogPost;
//! struct Person;
//!
//! let mut registry = Registry::new();
//! registry.register::<BlogPost>();
//! registry.register_with_names::<Person>("person", "people");
//!
//! assert_eq!(registry.name_for(&BlogPost).unwrap(), "blogpost");
//! assert_eq!(registry.plural_for(&BlogPost).unwrap(), "blogposts");
//! assert_eq!(registry.plural_for(&Person).unwrap(), "people");
//! ```
//!
//! ## Sharing
//!
//! Registration needs `&mut self` and lookups need `&self`. Populate the
//! registry at start-up, then share it read-only (for example in an
//! [`Arc`](std::sync::Arc)) across request handlers.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use tracing::debug;

use crate::{Error, Result};

/// The singular and plural names registered for one type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeNames {
    pub singular: String,
    pub plural: String,
}

impl TypeNames {
    /// Creates a name pair from explicit names.
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        TypeNames {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Derives a name pair from a Rust type name.
    ///
    /// The singular is the identifier of the last path segment, with generic
    /// arguments and any surrounding `&`, `[`, `; N]` or `]` removed,
    /// lower-cased. Arrays, slices and references therefore take the name of
    /// their element type. The plural follows regular English suffix rules.
    ///
    /// Derivation is meant for named types (structs and enums). Tuples and
    /// other unnamed types have no sensible name; register them with
    /// [`Registry::register_with_names`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jsonapi::TypeNames;
    ///
    /// let names = TypeNames::derive("app::model::TestItem");
    /// assert_eq!(names, TypeNames::new("testitem", "testitems"));
    ///
    /// let names = TypeNames::derive("app::Page<app::Entry>");
    /// assert_eq!(names.singular, "page");
    ///
    /// let names = TypeNames::derive("[app::Foo; 3]");
    /// assert_eq!(names.singular, "foo");
    /// ```
    #[must_use]
    pub fn derive(rust_type_name: &str) -> Self {
        let base = rust_type_name
            .split('<')
            .next()
            .unwrap_or(rust_type_name);
        let singular = base
            .rsplit("::")
            .next()
            .unwrap_or(base)
            .trim_start_matches(|c: char| !is_name_char(c))
            .chars()
            .take_while(|&c| is_name_char(c))
            .collect::<String>()
            .to_lowercase();
        let plural = pluralize(&singular);
        TypeNames { singular, plural }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Pluralizes a lower-case noun with regular English suffix rules.
///
/// Irregular nouns (`person`, `child`, ...) are not handled; register those
/// with [`Registry::register_with_names`].
///
/// # Examples
///
/// ```rust
/// use serde_jsonapi::registry::pluralize;
///
/// assert_eq!(pluralize("testitem"), "testitems");
/// assert_eq!(pluralize("box"), "boxes");
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("day"), "days");
/// ```
#[must_use]
pub fn pluralize(singular: &str) -> String {
    if singular.is_empty() {
        return String::new();
    }

    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| singular.ends_with(suffix))
    {
        return format!("{}es", singular);
    }

    if let Some(stem) = singular.strip_suffix('y') {
        let after_consonant = stem
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphabetic() && !"aeiou".contains(c));
        if after_consonant {
            return format!("{}ies", stem);
        }
    }

    format!("{}s", singular)
}

/// Mapping from Rust types to their resource type names.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    types: HashMap<TypeId, TypeNames>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under names derived from its type name.
    ///
    /// See [`TypeNames::derive`] for how names are derived. Use
    /// [`register_with_names`](Self::register_with_names) for tuples and
    /// other unnamed types.
    ///
    /// Registering a type again replaces its previous names.
    pub fn register<T: ?Sized + 'static>(&mut self) -> &TypeNames {
        self.insert::<T>(TypeNames::derive(type_name::<T>()))
    }

    /// Registers the type of `value`; the value itself is not inspected.
    pub fn register_value<T: ?Sized + 'static>(&mut self, _value: &T) -> &TypeNames {
        self.register::<T>()
    }

    /// Registers `T` under explicit names.
    pub fn register_with_names<T: ?Sized + 'static>(
        &mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> &TypeNames {
        self.insert::<T>(TypeNames::new(singular, plural))
    }

    fn insert<T: ?Sized + 'static>(&mut self, names: TypeNames) -> &TypeNames {
        let rust_type = type_name::<T>();
        match self.types.insert(TypeId::of::<T>(), names) {
            Some(previous) => debug!(
                rust_type,
                previous = %previous.singular,
                "Re-registered type, replacing names"
            ),
            None => debug!(rust_type, "Registered type"),
        }
        &self.types[&TypeId::of::<T>()]
    }

    /// Returns the names registered for `T`, if any.
    #[must_use]
    pub fn names<T: ?Sized + 'static>(&self) -> Option<&TypeNames> {
        self.types.get(&TypeId::of::<T>())
    }

    /// Returns the singular name registered for the type of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredType`] if the type was never registered.
    pub fn name_for<T: ?Sized + 'static>(&self, _value: &T) -> Result<&str> {
        self.name_for_type::<T>()
    }

    /// Returns the singular name registered for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredType`] if `T` was never registered.
    pub fn name_for_type<T: ?Sized + 'static>(&self) -> Result<&str> {
        self.lookup::<T>().map(|names| names.singular.as_str())
    }

    /// Returns the plural name registered for the type of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnregisteredType`] if the type was never registered.
    pub fn plural_for<T: ?Sized + 'static>(&self, _value: &T) -> Result<&str> {
        self.lookup::<T>().map(|names| names.plural.as_str())
    }

    fn lookup<T: ?Sized + 'static>(&self) -> Result<&TypeNames> {
        self.names::<T>().ok_or_else(|| {
            debug!(rust_type = type_name::<T>(), "Lookup of unregistered type");
            Error::unregistered::<T>()
        })
    }

    /// Returns `true` if `T` has been registered.
    #[must_use]
    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        self.types.contains_key(&TypeId::of::<T>())
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem;
    struct Category;
    struct Wrapper<T>(T);

    #[test]
    fn test_register_derives_names() {
        let mut registry = Registry::new();
        let names = registry.register::<TestItem>().clone();

        assert_eq!(names, TypeNames::new("testitem", "testitems"));
        assert_eq!(registry.names::<TestItem>(), Some(&names));
        assert_eq!(registry.name_for(&TestItem).unwrap(), "testitem");
    }

    #[test]
    fn test_generic_type_drops_arguments() {
        let mut registry = Registry::new();
        registry.register::<Wrapper<TestItem>>();

        assert_eq!(registry.name_for(&Wrapper(TestItem)).unwrap(), "wrapper");
        // Each instantiation is its own type.
        assert!(!registry.contains::<Wrapper<Category>>());
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut registry = Registry::new();
        registry.register::<Category>();
        assert_eq!(registry.plural_for(&Category).unwrap(), "categories");

        registry.register_with_names::<Category>("tag", "tags");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.name_for(&Category).unwrap(), "tag");
        assert_eq!(registry.plural_for(&Category).unwrap(), "tags");
    }

    #[test]
    fn test_unregistered_lookup_is_an_error() {
        let registry = Registry::new();
        assert!(registry.is_empty());

        match registry.name_for(&TestItem) {
            Err(Error::UnregisteredType { type_name }) => assert!(type_name.ends_with("TestItem")),
            other => panic!("Expected UnregisteredType, got {:?}", other),
        }
    }

    #[test]
    fn test_pluralize_rules() {
        assert_eq!(pluralize("item"), "items");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("story"), "stories");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize(""), "");
        // Irregular nouns fall through to the regular rule.
        assert_eq!(pluralize("person"), "persons");
    }

    #[test]
    fn test_derive_strips_array_slice_and_reference_syntax() {
        assert_eq!(TypeNames::derive("[app::Foo; 3]"), TypeNames::new("foo", "foos"));
        assert_eq!(TypeNames::derive("&[app::Foo]").singular, "foo");
        assert_eq!(TypeNames::derive("&app::Foo").singular, "foo");
        assert_eq!(TypeNames::derive("[app::Page<app::Entry>; 2]").singular, "page");

        for name in ["[app::Foo; 3]", "&[app::Foo]", "(app::A, app::B)", "&mut app::Foo"] {
            let singular = TypeNames::derive(name).singular;
            assert!(
                singular.chars().all(is_name_char),
                "{:?} derived {:?}",
                name,
                singular
            );
        }
    }

    #[test]
    fn test_register_array_and_tuple_types() {
        let mut registry = Registry::new();
        registry.register::<[TestItem; 3]>();
        assert_eq!(registry.name_for(&[TestItem, TestItem, TestItem]).unwrap(), "testitem");

        registry.register_with_names::<(TestItem, Category)>("pair", "pairs");
        assert_eq!(registry.name_for(&(TestItem, Category)).unwrap(), "pair");
        assert_eq!(registry.plural_for(&(TestItem, Category)).unwrap(), "pairs");
    }
}
