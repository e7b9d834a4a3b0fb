//! Document Wire Format
//!
//! This module documents the exact bytes produced by this library. It holds
//! no code.
//!
//! # Overview
//!
//! Documents render as compact JSON: no whitespace is inserted between
//! tokens, and member order is fixed. A document has exactly one primary
//! member, `data` or `errors`, optionally followed by `meta`.
//!
//! # Top-Level Members
//!
//! | Document | Primary member | Default | Can switch to `errors` |
//! |----------|----------------|---------|------------------------|
//! | `Document` | `data` | `null` | yes, on first `add_error` |
//! | `CollectionDocument` | `data` | `[]` | no |
//! | `ErrorDocument` | `errors` | `[]` | always `errors` |
//!
//! **Rules**:
//! - The primary member is always first
//! - `meta` is second, and only present once a meta entry exists
//! - `data` of a `Document` is the only member ever rendered as `null`
//! - A `Document` holding errors has no `data` member at all, even if data
//!   was set before the first error
//!
//! ```text
//! {"data":null}
//! {"data":null,"meta":{"vendor":"x"}}
//! {"data":[]}
//! {"errors":[]}
//! {"errors":[],"meta":{"vendor":"x"}}
//! {"errors":[{"title":"test error"}]}
//! ```
//!
//! # Resource Objects
//!
//! ```text
//! {"type":"testitem","id":"0","attributes":{"name":"A Name"}}
//! ```
//!
//! - Member order is `type`, `id`, `attributes`
//! - `id` is always present, even when it is the empty string
//! - `type` is the singular name from the registry, or an explicit name
//! - `attributes` is the serde serialization of the domain value, which must
//!   be an object; its field order is kept, and domain fields named `id` or
//!   `type` are copied like any other field
//!
//! # Error Objects
//!
//! ```text
//! {"title":"Invalid","detail":"name is required","status":"422","code":"E42"}
//! ```
//!
//! - Member order is `title`, `detail`, `status`, `code`
//! - Only `title` is always present; unset members are omitted, never `null`
//!
//! # Meta
//!
//! - An object of arbitrary JSON values, in insertion order
//! - Meta built from a `HashMap` is taken in key order
//! - Adding meta again merges per key: a repeated key takes the new value and
//!   keeps its original position
//!
//! # Type Names
//!
//! | Rust type | Singular | Plural |
//! |-----------|----------|--------|
//! | `app::TestItem` | `testitem` | `testitems` |
//! | `app::Box` | `box` | `boxes` |
//! | `app::Category` | `category` | `categories` |
//! | `app::Page<app::Entry>` | `page` | `pages` |
//! | `[app::Entry; 3]`, `&[app::Entry]` | `entry` | `entries` |
//!
//! Irregular plurals are not recognised (`Person` becomes `persons`).
//! Tuples and other unnamed types have no derived name worth using.
//! Register such types with explicit names.
