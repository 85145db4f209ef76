// SPDX-License-Identifier: MIT OR Apache-2.0
//! Guarded path resolution over [`serde_json::Value`]
//!
//! [`get`] walks a root value one segment at a time and hands back the
//! caller's default the moment a step cannot be taken. An absent value
//! (`None`) and a present `null` are different things: a path may end on
//! a `null`, but it can never continue through one.
//!
//! Lookup rules per segment, after classifying the current value with
//! [`Shape::of`]:
//!
//! | Shape | `Field(s)` | `Index(n)` |
//! |-------|------------|------------|
//! | sequence | element `s` if `s` is a canonical index (`0`, `17`, not `01`) | element `n` |
//! | keyed | own entry `s` | own entry spelled `n` in decimal |
//! | scalar | not found | not found |
//!
//! Strings count as scalars on purpose: `"abc"` has no child `0`, and
//! arrays expose no named entries such as `length` (decision 6 in the
//! workspace DESIGN.md).
//!
//! A path with no segments never resolves, whatever the root.

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{PathError, ResolveError, Result};
use crate::path::{ParsedPath, PathComponent, PathComponentRef, PathExpr};

// =============================================================================
// Shape
// =============================================================================

/// Traversal class of a value, carrying a view of its contents
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Ordered elements, indexed by position
    Sequence(&'a [Value]),
    /// Own string-keyed entries
    Keyed(&'a Map<String, Value>),
    /// Anything without children, including `null`
    Scalar,
}

impl<'a> Shape<'a> {
    /// Classify a value
    #[must_use]
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Self::Sequence(items),
            Value::Object(map) => Self::Keyed(map),
            _ => Self::Scalar,
        }
    }

    /// Read the child named by `segment`, if it exists.
    ///
    /// `Some(&Value::Null)` means the entry exists and holds `null`.
    #[must_use]
    pub fn lookup(self, segment: PathComponentRef<'_>) -> Option<&'a Value> {
        match (self, segment) {
            (Self::Sequence(items), PathComponentRef::Index(index)) => items.get(index),
            (Self::Sequence(items), PathComponentRef::Field(name)) => {
                canonical_index(name).and_then(|index| items.get(index))
            }
            (Self::Keyed(map), PathComponentRef::Field(name)) => map.get(name),
            (Self::Keyed(map), PathComponentRef::Index(index)) => {
                map.get(itoa::Buffer::new().format(index))
            }
            (Self::Scalar, _) => None,
        }
    }
}

/// Parse `name` as an array index only if it is written the way an index
/// prints: ASCII digits with no sign and no leading zero.
fn canonical_index(name: &str) -> Option<usize> {
    match name.as_bytes() {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        digits if digits.iter().all(u8::is_ascii_digit) => name.parse().ok(),
        _ => None,
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Where a walk stopped, borrowing the failing segment
enum Stop<'s> {
    Invalid(PathError),
    AbsentRoot,
    Null { depth: usize },
    Missing { depth: usize, segment: PathComponentRef<'s> },
}

impl From<Stop<'_>> for ResolveError {
    fn from(stop: Stop<'_>) -> Self {
        match stop {
            Stop::Invalid(err) => Self::InvalidPath(err),
            Stop::AbsentRoot => Self::AbsentRoot,
            Stop::Null { depth } => Self::NullIntermediate { depth },
            Stop::Missing { depth, segment } => Self::Missing {
                depth,
                segment: segment.to_string(),
            },
        }
    }
}

fn walk<'a, 's>(
    root: Option<&'a Value>,
    path: &'s PathExpr<'_>,
) -> std::result::Result<&'a Value, Stop<'s>> {
    if let Err(err) = path.validate() {
        debug!(%err, "path rejected before traversal");
        return Err(Stop::Invalid(err));
    }
    let mut current = root.ok_or(Stop::AbsentRoot)?;

    for (depth, segment) in path.segments().enumerate() {
        if current.is_null() {
            trace!(depth, %segment, "cannot descend through null");
            return Err(Stop::Null { depth });
        }
        current = Shape::of(current).lookup(segment).ok_or_else(|| {
            trace!(depth, %segment, "segment not found");
            Stop::Missing { depth, segment }
        })?;
    }

    Ok(current)
}

/// Resolve `path` against `root`, falling back to `default`.
///
/// Never fails and never mutates `root`. The default is returned as the
/// same reference that was passed in. Paths with no segments (the empty
/// dotted path, `[]`) and [`PathExpr::Invalid`] paths return `default`
/// without looking at `root`.
///
/// ```
/// use serde_json::json;
/// use tine_core::get;
///
/// let doc = json!({ "a": { "b": { "c": 42 } } });
/// let fallback = json!("X");
///
/// assert_eq!(get(Some(&doc), "a.b.c", None), Some(&json!(42)));
/// assert_eq!(get(Some(&doc), ["a", "b", "c"], None), Some(&json!(42)));
/// assert_eq!(get(Some(&doc), "a.b.d", Some(&fallback)), Some(&fallback));
/// ```
#[must_use]
pub fn get<'a, 'p>(
    root: Option<&'a Value>,
    path: impl Into<PathExpr<'p>>,
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    walk(root, &path.into()).ok().or(default)
}

/// [`get`] for callers that always have a root and a default
#[must_use]
pub fn get_or<'a, 'p>(
    root: &'a Value,
    path: impl Into<PathExpr<'p>>,
    default: &'a Value,
) -> &'a Value {
    walk(Some(root), &path.into()).unwrap_or(default)
}

/// Resolve `path` against `root`, reporting why it failed.
///
/// Succeeds exactly when [`get`] would return something other than its
/// default.
///
/// # Errors
///
/// - [`ResolveError::InvalidPath`] for a path with no segments or a non-path
/// - [`ResolveError::AbsentRoot`] when `root` is `None`
/// - [`ResolveError::NullIntermediate`] when a `null` is reached with segments left
/// - [`ResolveError::Missing`] when a segment names nothing
pub fn try_get<'a, 'p>(root: Option<&'a Value>, path: impl Into<PathExpr<'p>>) -> Result<&'a Value> {
    let path = path.into();
    walk(root, &path).map_err(ResolveError::from)
}

/// Whether `path` resolves against `root`
#[must_use]
pub fn has<'p>(root: Option<&Value>, path: impl Into<PathExpr<'p>>) -> bool {
    walk(root, &path.into()).is_ok()
}

// =============================================================================
// PathAccessor
// =============================================================================

/// A path parsed once and resolved against many roots
///
/// ```
/// use serde_json::json;
/// use tine_core::PathAccessor;
///
/// let name = PathAccessor::parse("users.0.name").unwrap();
/// let doc = json!({ "users": [{ "name": "ada" }] });
/// assert_eq!(name.resolve(Some(&doc), None), Some(&json!("ada")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAccessor {
    path: ParsedPath,
}

impl PathAccessor {
    /// Tokenize a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for the empty string.
    pub fn parse(path: &str) -> std::result::Result<Self, PathError> {
        ParsedPath::parse(path).map(Self::from)
    }

    /// Build from already-separated segments
    pub fn from_segments<I, C>(segments: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<PathComponent>,
    {
        Self::from(ParsedPath::from_segments(segments))
    }

    /// The parsed path
    #[must_use]
    pub const fn path(&self) -> &ParsedPath {
        &self.path
    }

    /// Resolve against `root`, falling back to `default`
    #[must_use]
    pub fn resolve<'a>(
        &self,
        root: Option<&'a Value>,
        default: Option<&'a Value>,
    ) -> Option<&'a Value> {
        get(root, &self.path, default)
    }

    /// Resolve against `root`, reporting why it failed
    ///
    /// # Errors
    ///
    /// Same as [`try_get`].
    pub fn try_resolve<'a>(&self, root: Option<&'a Value>) -> Result<&'a Value> {
        try_get(root, &self.path)
    }
}

impl From<ParsedPath> for PathAccessor {
    fn from(path: ParsedPath) -> Self {
        Self { path }
    }
}

impl FromStr for PathAccessor {
    type Err = PathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}
