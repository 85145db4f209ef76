// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and the guarded path accessor for tine
//!
//! This crate provides the foundational pieces used across the tine workspace:
//!
//! - [`error`] - Error types and Result alias
//! - [`path`] - Path expression parsing (dotted strings and segment lists)
//! - [`cache`] - Concurrent memo of parsed dotted paths
//! - [`access`] - Safe deep reads over [`serde_json::Value`] trees
//!
//! ```
//! use serde_json::json;
//! use tine_core::get;
//!
//! let doc = json!({ "a": [{ "b": { "c": 42 } }] });
//! assert_eq!(get(Some(&doc), "a.0.b.c", None), Some(&json!(42)));
//! ```

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Guarded path resolution
pub mod access;
/// Concurrent cache of parsed paths
pub mod cache;
/// Error types for path parsing and resolution
pub mod error;
/// Path expression parsing utilities
pub mod path;

// Re-exports for convenience
pub use access::{PathAccessor, Shape, get, get_or, has, try_get};
pub use cache::PathCache;
pub use error::{PathError, ResolveError, Result};
pub use path::{DottedSegments, ParsedPath, PathComponent, PathComponentRef, PathExpr, split_dotted};
