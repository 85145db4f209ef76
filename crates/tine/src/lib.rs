// SPDX-License-Identifier: MIT OR Apache-2.0
//! # tine
//!
//! Guarded deep reads and coercing helpers for [`serde_json::Value`] trees.
//!
//! ## Reading nested values
//!
//! [`get`] walks a dotted string or a segment list through any mix of
//! objects and arrays. It never panics and never mutates: when anything is
//! missing along the way it hands back the caller's default.
//!
//! ```
//! use serde_json::json;
//!
//! let doc = json!({ "a": [{ "b": { "c": 3 } }] });
//! let fallback = json!("default");
//!
//! assert_eq!(tine::get(Some(&doc), "a.0.b.c", None), Some(&json!(3)));
//! assert_eq!(tine::get(Some(&doc), ["a", "0", "b", "c"], None), Some(&json!(3)));
//! assert_eq!(tine::get(Some(&doc), "a.b.c", Some(&fallback)), Some(&fallback));
//! ```
//!
//! Use [`try_get`] to learn why a path did not resolve, and
//! [`PathAccessor`] or [`PathCache`] to tokenize a path once.
//!
//! ## Helpers
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`to_number`] | ECMAScript-style numeric coercion |
//! | [`add`] | Coercing addition |
//! | [`ceil`] / [`ceil_value`] | Round up at a decimal precision |
//! | [`eq`] | SameValueZero equality |
//! | [`every`] / [`filter`] / [`map`] | Array predicates and transforms |
//! | [`reduce`] | Fold over array elements or object entries |
//! | [`is_empty`] | Emptiness of strings, arrays and objects |
//!
//! ## Crate Organization
//!
//! - [`tine_core`] - Path expressions, errors, and the accessor
//! - [`tine_ops`] - Coercion, arithmetic, equality and collection helpers

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Re-export of tine-core for path types and errors.
pub use tine_core as core;

/// Re-export of tine-ops for the value helpers.
pub use tine_ops as ops;

pub use tine_core::{
    ParsedPath, PathAccessor, PathCache, PathComponent, PathComponentRef, PathError, PathExpr,
    ResolveError, Shape, get, get_or, has, split_dotted, try_get,
};
pub use tine_ops::{
    EntryKey, NumberError, add, ceil, ceil_value, eq, every, filter, is_empty, is_truthy, map,
    parse_number, reduce, same_value_zero, to_number, try_map, try_reduce,
};

/// The JSON value type every operation works on
pub use serde_json::Value;
