// SPDX-License-Identifier: MIT OR Apache-2.0
//! Coercion, arithmetic, equality and collection helpers over JSON values
//!
//! Every helper takes `Option<&Value>` where a missing value is meaningful:
//! `None` stands for "absent" and is distinct from a present `null`.
//!
//! - [`coerce`] - Numeric coercion and truthiness
//! - [`math`] - Coercing addition and decimal-precision ceiling
//! - [`compare`] - SameValueZero equality
//! - [`collection`] - Array predicates, transforms and folds
//! - [`error`] - Strict number parsing errors

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::cargo)]

/// Array predicates, transforms and folds
pub mod collection;
/// Numeric coercion and truthiness
pub mod coerce;
/// SameValueZero equality
pub mod compare;
/// Error types for strict parsing
pub mod error;
/// Arithmetic helpers
pub mod math;

pub use coerce::{is_truthy, parse_number, to_number};
pub use collection::{EntryKey, every, filter, is_empty, map, reduce, try_map, try_reduce};
pub use compare::{eq, same_value_zero};
pub use error::NumberError;
pub use math::{add, ceil, ceil_value};
