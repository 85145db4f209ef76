// SPDX-License-Identifier: MIT OR Apache-2.0
//! # tine-cli
//!
//! Command-line interface for tine: guarded deep reads and coercing helpers
//! for JSON documents.
//!
//! ## Installation
//!
//! ```bash
//! cargo install tine-cli
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Read a nested value, falling back to a default
//! tine get 'users.0.name' data.json
//! tine get 'users.9.name' data.json --default '"nobody"'
//!
//! # Segment lists as JSON, for keys that contain dots
//! tine get --json-path '["a.b", "c"]' data.json
//!
//! # Numeric coercion and arithmetic
//! echo '" 0xFF "' | tine number
//! tine add 6 '"4"'
//! tine ceil 6.004 2
//!
//! # Emptiness and equality
//! tine empty data.json
//! tine eq '"a"' '"a"'
//! ```
//!
//! ## Subcommands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `get` | Resolve a path, printing the value or the default |
//! | `number` | Coerce a JSON value to a number |
//! | `add` | Add two coerced values |
//! | `ceil` | Round up at a decimal precision |
//! | `empty` | Report whether a value is empty |
//! | `eq` | SameValueZero comparison of two values |
//!
//! Set `RUST_LOG=tine_core=trace` (or pass `-vv`) to see where a path stops
//! resolving.
//!
//! ## Library Usage
//!
//! For programmatic access use the library crates directly:
//!
//! - [`tine`](https://docs.rs/tine) - Umbrella crate with all functionality
//! - [`tine-core`](https://docs.rs/tine-core) - Paths, errors, and the accessor
//! - [`tine-ops`](https://docs.rs/tine-ops) - Coercion and collection helpers

#![doc(html_root_url = "https://docs.rs/tine-cli/0.1.0")]
#![warn(missing_docs)]

/// Re-export of tine-core for path resolution.
pub use tine_core as core;

/// Re-export of tine-ops for the value helpers.
pub use tine_ops as ops;
