// SPDX-License-Identifier: MIT OR Apache-2.0
//! Array predicates, transforms and folds
//!
//! Inputs are `Option<&Value>`. Anything that is not an array (absent,
//! `null`, scalars, objects) behaves as an empty array for [`every`],
//! [`filter`], [`map`] and [`try_map`]. [`reduce`] additionally folds over
//! object entries in map order.
//!
//! Callbacks receive the element, its index, and the whole slice, in that
//! order. Inputs are never modified.

use std::convert::Infallible;
use std::fmt;

use serde_json::Value;

fn elements(array: Option<&Value>) -> &[Value] {
    match array {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// True when every element passes `predicate`.
///
/// Stops at the first failure. Empty and non-array inputs are vacuously
/// true.
pub fn every<F>(array: Option<&Value>, mut predicate: F) -> bool
where
    F: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(array);
    items
        .iter()
        .enumerate()
        .all(|(index, item)| predicate(item, index, items))
}

/// Clone out the elements that pass `predicate`, preserving order
pub fn filter<F>(array: Option<&Value>, mut predicate: F) -> Vec<Value>
where
    F: FnMut(&Value, usize, &[Value]) -> bool,
{
    let items = elements(array);
    items
        .iter()
        .enumerate()
        .filter(|&(index, item)| predicate(item, index, items))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Transform every element, preserving order and length
pub fn map<T, F>(array: Option<&Value>, mut iteratee: F) -> Vec<T>
where
    F: FnMut(&Value, usize, &[Value]) -> T,
{
    let items = elements(array);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| iteratee(item, index, items))
        .collect()
}

/// [`map`] with a fallible iteratee.
///
/// # Errors
///
/// Returns the first error produced by `iteratee`; later elements are not
/// visited.
pub fn try_map<T, E, F>(array: Option<&Value>, mut iteratee: F) -> Result<Vec<T>, E>
where
    F: FnMut(&Value, usize, &[Value]) -> Result<T, E>,
{
    let items = elements(array);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| iteratee(item, index, items))
        .collect()
}

/// Position of an entry handed to a [`reduce`] iteratee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKey<'a> {
    /// Array position
    Index(usize),
    /// Object key
    Key(&'a str),
}

impl fmt::Display for EntryKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

enum Entries<'a> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
    Keyed(serde_json::map::Iter<'a>),
    Empty,
}

impl<'a> Entries<'a> {
    fn of(collection: Option<&'a Value>) -> Self {
        match collection {
            Some(Value::Array(items)) => Self::Sequence(items.iter().enumerate()),
            Some(Value::Object(map)) => Self::Keyed(map.iter()),
            _ => Self::Empty,
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = (EntryKey<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(inner) => inner
                .next()
                .map(|(index, item)| (EntryKey::Index(index), item)),
            Self::Keyed(inner) => inner.next().map(|(key, item)| (EntryKey::Key(key), item)),
            Self::Empty => None,
        }
    }
}

/// Left fold over array elements or object entries.
///
/// Without `initial`, the first entry seeds the accumulator and folding
/// starts from the second. An empty collection with no seed yields `None`.
///
/// ```
/// use serde_json::json;
/// use tine_ops::{reduce, to_number};
///
/// let total = reduce(
///     Some(&json!({ "a": 1, "b": 2, "c": 3 })),
///     |sum, value, _key| json!(to_number(Some(&sum)) + to_number(Some(value))),
///     Some(json!(0)),
/// );
/// assert_eq!(total, Some(json!(6.0)));
/// ```
pub fn reduce<F>(collection: Option<&Value>, mut iteratee: F, initial: Option<Value>) -> Option<Value>
where
    F: FnMut(Value, &Value, EntryKey<'_>) -> Value,
{
    let folded = try_reduce(
        collection,
        |acc, item, key| Ok::<_, Infallible>(iteratee(acc, item, key)),
        initial,
    );
    match folded {
        Ok(result) => result,
        Err(never) => match never {},
    }
}

/// [`reduce`] with a fallible iteratee.
///
/// # Errors
///
/// Returns the first error produced by `iteratee`.
pub fn try_reduce<F, E>(
    collection: Option<&Value>,
    mut iteratee: F,
    initial: Option<Value>,
) -> Result<Option<Value>, E>
where
    F: FnMut(Value, &Value, EntryKey<'_>) -> Result<Value, E>,
{
    let mut entries = Entries::of(collection);
    let mut acc = match initial {
        Some(seed) => seed,
        None => match entries.next() {
            Some((_, first)) => first.clone(),
            None => return Ok(None),
        },
    };
    for (key, item) in entries {
        acc = iteratee(acc, item, key)?;
    }
    Ok(Some(acc))
}

/// True for absent values, `null`, booleans, numbers, and zero-length
/// strings, arrays and objects.
#[must_use]
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null | Value::Bool(_) | Value::Number(_)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
    }
}
