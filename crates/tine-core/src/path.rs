// SPDX-License-Identifier: MIT OR Apache-2.0
//! Path expression parsing
//!
//! A path is either a dotted string (`a.0.b`) or an already-segmented list
//! of components. In dotted form a backslash immediately before a dot
//! keeps that dot inside the segment: `a\.b.c` splits into `a\.b` and `c`.
//! The backslash is NOT removed, so `a\.b` never matches a key spelled
//! `a.b`. Keys containing a literal dot are reachable only through the
//! segment-list form.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;

use crate::error::PathError;

/// Segment separator in dotted paths
const SEPARATOR: u8 = b'.';
/// Escape byte that suppresses a split on the following separator
const ESCAPE: u8 = b'\\';

// =============================================================================
// Components
// =============================================================================

/// A single owned path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathComponent {
    /// Positional segment, matches array elements and decimal object keys
    Index(usize),
    /// Named segment, used exactly as written
    Field(String),
}

impl PathComponent {
    /// Borrow this component
    #[must_use]
    pub fn as_borrowed(&self) -> PathComponentRef<'_> {
        match self {
            Self::Index(index) => PathComponentRef::Index(*index),
            Self::Field(name) => PathComponentRef::Field(name),
        }
    }
}

impl From<&str> for PathComponent {
    fn from(name: &str) -> Self {
        Self::Field(name.to_owned())
    }
}

impl From<String> for PathComponent {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl From<usize> for PathComponent {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_borrowed(), f)
    }
}

/// A single borrowed path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathComponentRef<'a> {
    /// Positional segment
    Index(usize),
    /// Named segment
    Field(&'a str),
}

impl PathComponentRef<'_> {
    /// Copy into an owned component
    #[must_use]
    pub fn to_component(self) -> PathComponent {
        match self {
            Self::Index(index) => PathComponent::Index(index),
            Self::Field(name) => PathComponent::Field(name.to_owned()),
        }
    }
}

impl fmt::Display for PathComponentRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Field(name) => f.write_str(name),
        }
    }
}

impl<'a> From<&'a PathComponent> for PathComponentRef<'a> {
    fn from(component: &'a PathComponent) -> Self {
        component.as_borrowed()
    }
}

// =============================================================================
// Dotted tokenizer
// =============================================================================

/// Split a dotted path on its unescaped separators.
///
/// The empty string yields a single empty segment, as does every pair of
/// adjacent separators.
#[must_use]
pub const fn split_dotted(path: &str) -> DottedSegments<'_> {
    DottedSegments { rest: Some(path) }
}

/// Zero-allocation iterator over the segments of a dotted path
#[derive(Debug, Clone)]
pub struct DottedSegments<'a> {
    rest: Option<&'a str>,
}

impl<'a> Iterator for DottedSegments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let bytes = rest.as_bytes();
        let split = memchr::memchr_iter(SEPARATOR, bytes)
            .find(|&pos| pos == 0 || bytes[pos - 1] != ESCAPE);

        if let Some(pos) = split {
            self.rest = Some(&rest[pos + 1..]);
            Some(&rest[..pos])
        } else {
            self.rest = None;
            Some(rest)
        }
    }
}

impl std::iter::FusedIterator for DottedSegments<'_> {}

// =============================================================================
// ParsedPath
// =============================================================================

/// An owned, pre-tokenized path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedPath {
    components: SmallVec<[PathComponent; 8]>,
}

impl ParsedPath {
    /// Tokenize a dotted path.
    ///
    /// Every segment becomes a [`PathComponent::Field`]; numeric-looking
    /// segments are not converted.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for the empty string, which can never
    /// resolve.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self {
            components: split_dotted(path).map(PathComponent::from).collect(),
        })
    }

    /// Build a path from already-separated segments
    pub fn from_segments<I, C>(segments: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<PathComponent>,
    {
        Self {
            components: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the path components
    #[must_use]
    pub fn components(&self) -> &[PathComponent] {
        &self.components
    }

    /// Number of segments
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the path has no segments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterate over borrowed components
    pub fn iter(&self) -> impl Iterator<Item = PathComponentRef<'_>> + '_ {
        self.components.iter().map(PathComponent::as_borrowed)
    }
}

impl fmt::Display for ParsedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ParsedPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// PathExpr
// =============================================================================

/// Any accepted shape of path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr<'p> {
    /// `.`-separated string, tokenized lazily
    Dotted(&'p str),
    /// Already-segmented keys, used as given
    Segments(Cow<'p, [PathComponent]>),
    /// One key used directly, never split
    Key(PathComponentRef<'p>),
    /// Pre-tokenized path
    Parsed(&'p ParsedPath),
    /// A value that is not a path; carries its JSON type name
    Invalid(&'static str),
}

impl<'p> PathExpr<'p> {
    /// Interpret a JSON value as a path.
    ///
    /// Strings are dotted paths and arrays are segment lists. Array elements
    /// that are non-negative integers become [`PathComponent::Index`],
    /// strings become fields, and anything else becomes a field spelled as
    /// its JSON text. Numbers, booleans, `null` and objects are
    /// [`PathExpr::Invalid`].
    #[must_use]
    pub fn from_value(value: &'p Value) -> Self {
        match value {
            Value::String(path) => Self::Dotted(path),
            Value::Array(items) => Self::Segments(Cow::Owned(
                items.iter().map(component_from_value).collect(),
            )),
            other => Self::Invalid(json_type_name(other)),
        }
    }

    /// Check that the expression can resolve at all
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for an empty dotted path or a path with
    /// no segments, and [`PathError::InvalidShape`] for [`PathExpr::Invalid`].
    pub fn validate(&self) -> Result<(), PathError> {
        match self {
            Self::Dotted(path) if path.is_empty() => Err(PathError::Empty),
            Self::Segments(components) if components.is_empty() => Err(PathError::Empty),
            Self::Parsed(parsed) if parsed.is_empty() => Err(PathError::Empty),
            Self::Invalid(found) => Err(PathError::InvalidShape { found: *found }),
            _ => Ok(()),
        }
    }

    /// Iterate over the segments in traversal order.
    ///
    /// Invalid expressions yield nothing.
    pub fn segments(&self) -> impl Iterator<Item = PathComponentRef<'_>> + '_ {
        match self {
            Self::Dotted(path) => Segments::Dotted(split_dotted(path)),
            Self::Segments(components) => Segments::Slice(components.iter()),
            Self::Key(key) => Segments::Single(Some(*key)),
            Self::Parsed(parsed) => Segments::Slice(parsed.components.iter()),
            Self::Invalid(_) => Segments::Single(None),
        }
    }
}

enum Segments<'a> {
    Dotted(DottedSegments<'a>),
    Slice(std::slice::Iter<'a, PathComponent>),
    Single(Option<PathComponentRef<'a>>),
}

impl<'a> Iterator for Segments<'a> {
    type Item = PathComponentRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Dotted(inner) => inner.next().map(PathComponentRef::Field),
            Self::Slice(inner) => inner.next().map(PathComponent::as_borrowed),
            Self::Single(slot) => slot.take(),
        }
    }
}

fn component_from_value(value: &Value) -> PathComponent {
    match value {
        Value::String(name) => PathComponent::Field(name.clone()),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map_or_else(|| PathComponent::Field(n.to_string()), PathComponent::Index),
        other => PathComponent::Field(other.to_string()),
    }
}

/// JSON type name used in diagnostics
#[must_use]
pub const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'p> From<&'p str> for PathExpr<'p> {
    fn from(path: &'p str) -> Self {
        Self::Dotted(path)
    }
}

impl<'p> From<&'p String> for PathExpr<'p> {
    fn from(path: &'p String) -> Self {
        Self::Dotted(path)
    }
}

impl<'p> From<&'p [PathComponent]> for PathExpr<'p> {
    fn from(components: &'p [PathComponent]) -> Self {
        Self::Segments(Cow::Borrowed(components))
    }
}

impl<'p> From<&'p Vec<PathComponent>> for PathExpr<'p> {
    fn from(components: &'p Vec<PathComponent>) -> Self {
        Self::Segments(Cow::Borrowed(components))
    }
}

impl From<Vec<PathComponent>> for PathExpr<'_> {
    fn from(components: Vec<PathComponent>) -> Self {
        Self::Segments(Cow::Owned(components))
    }
}

impl From<&[&str]> for PathExpr<'_> {
    fn from(names: &[&str]) -> Self {
        Self::Segments(names.iter().map(|name| PathComponent::from(*name)).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathExpr<'_> {
    fn from(names: [&str; N]) -> Self {
        Self::from(&names[..])
    }
}

impl<'p> From<PathComponentRef<'p>> for PathExpr<'p> {
    fn from(key: PathComponentRef<'p>) -> Self {
        Self::Key(key)
    }
}

impl<'p> From<&'p PathComponent> for PathExpr<'p> {
    fn from(key: &'p PathComponent) -> Self {
        Self::Key(key.as_borrowed())
    }
}

impl<'p> From<&'p ParsedPath> for PathExpr<'p> {
    fn from(parsed: &'p ParsedPath) -> Self {
        Self::Parsed(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn split(path: &str) -> Vec<&str> {
        split_dotted(path).collect()
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(split("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(split("name"), vec!["name"]);
        assert_eq!(split("a.0.b"), vec!["a", "0", "b"]);
    }

    #[test]
    fn test_split_empty_segments() {
        assert_eq!(split(""), vec![""]);
        assert_eq!(split("a..b"), vec!["a", "", "b"]);
        assert_eq!(split(".a"), vec!["", "a"]);
        assert_eq!(split("a."), vec!["a", ""]);
    }

    #[test]
    fn test_split_keeps_escape_verbatim() {
        assert_eq!(split("a\\.b.c"), vec!["a\\.b", "c"]);
        assert_eq!(split("a\\.b\\.c"), vec!["a\\.b\\.c"]);
        assert_eq!(split("\\.a"), vec!["\\.a"]);
        // a backslash elsewhere is ordinary text
        assert_eq!(split("a\\b.c"), vec!["a\\b", "c"]);
    }

    #[test]
    fn test_parsed_path_parse() {
        let path = ParsedPath::parse("users.0.name").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(
            path.components(),
            &[
                PathComponent::Field("users".into()),
                PathComponent::Field("0".into()),
                PathComponent::Field("name".into()),
            ]
        );
        assert_eq!(path.to_string(), "users.0.name");
    }

    #[test]
    fn test_parsed_path_rejects_empty() {
        assert_eq!(ParsedPath::parse(""), Err(PathError::Empty));
        assert!("".parse::<ParsedPath>().is_err());
    }

    #[test]
    fn test_parsed_path_from_segments() {
        let path = ParsedPath::from_segments([
            PathComponent::from("a.b"),
            PathComponent::Index(2),
        ]);
        assert_eq!(path.len(), 2);
        assert!(!path.is_empty());
        let borrowed: Vec<_> = path.iter().collect();
        assert_eq!(
            borrowed,
            vec![PathComponentRef::Field("a.b"), PathComponentRef::Index(2)]
        );
        assert!(ParsedPath::from_segments(Vec::<PathComponent>::new()).is_empty());
    }

    #[test]
    fn test_parsed_path_serde() {
        let path: ParsedPath = serde_json::from_value(json!(["a", 0, "b"])).unwrap();
        assert_eq!(
            path.components(),
            &[
                PathComponent::Field("a".into()),
                PathComponent::Index(0),
                PathComponent::Field("b".into()),
            ]
        );
        assert_eq!(serde_json::to_value(&path).unwrap(), json!(["a", 0, "b"]));
    }

    #[test]
    fn test_expr_from_value() {
        let dotted = json!("a.b");
        assert_eq!(PathExpr::from_value(&dotted), PathExpr::Dotted("a.b"));

        let list = json!(["a", 1, -1, 1.5, true, null]);
        let PathExpr::Segments(components) = PathExpr::from_value(&list) else {
            panic!("array should become a segment list");
        };
        assert_eq!(
            components.as_ref(),
            &[
                PathComponent::Field("a".into()),
                PathComponent::Index(1),
                PathComponent::Field("-1".into()),
                PathComponent::Field("1.5".into()),
                PathComponent::Field("true".into()),
                PathComponent::Field("null".into()),
            ]
        );

        assert_eq!(PathExpr::from_value(&json!(123)), PathExpr::Invalid("number"));
        assert_eq!(PathExpr::from_value(&json!(null)), PathExpr::Invalid("null"));
        assert_eq!(PathExpr::from_value(&json!(true)), PathExpr::Invalid("boolean"));
        assert_eq!(PathExpr::from_value(&json!({"a": 1})), PathExpr::Invalid("object"));
    }

    #[test]
    fn test_expr_validate() {
        assert_eq!(PathExpr::from("").validate(), Err(PathError::Empty));
        assert_eq!(
            PathExpr::Invalid("number").validate(),
            Err(PathError::InvalidShape { found: "number" })
        );
        assert!(PathExpr::from("a").validate().is_ok());
        assert_eq!(
            PathExpr::from(Vec::<PathComponent>::new()).validate(),
            Err(PathError::Empty)
        );
        let no_segments = ParsedPath::from_segments(Vec::<PathComponent>::new());
        assert_eq!(PathExpr::from(&no_segments).validate(), Err(PathError::Empty));
        assert_eq!(PathExpr::from(["a"; 0]).validate(), Err(PathError::Empty));
    }

    #[test]
    fn test_expr_segments() {
        let expr = PathExpr::from("a.0");
        let segments: Vec<_> = expr.segments().collect();
        assert_eq!(
            segments,
            vec![PathComponentRef::Field("a"), PathComponentRef::Field("0")]
        );

        let key = PathComponent::Field("a.b".into());
        let expr = PathExpr::from(&key);
        assert_eq!(expr.segments().collect::<Vec<_>>(), vec![PathComponentRef::Field("a.b")]);

        let expr = PathExpr::from(["x", "y"]);
        assert_eq!(expr.segments().count(), 2);

        assert_eq!(PathExpr::Invalid("number").segments().count(), 0);
    }

    #[test]
    fn test_component_display() {
        assert_eq!(PathComponent::Index(3).to_string(), "3");
        assert_eq!(PathComponent::from("a\\.b").to_string(), "a\\.b");
        assert_eq!(PathComponentRef::Field("x").to_component(), PathComponent::from("x"));
    }

    mod props {
        use crate::path::split_dotted;
        use proptest::prelude::*;

        proptest! {
            /// Escape-free segments joined with dots split back apart
            #[test]
            fn prop_split_inverts_join(segments in prop::collection::vec("[a-z0-9]{0,5}", 1..6)) {
                let joined = segments.join(".");
                let split: Vec<&str> = split_dotted(&joined).collect();
                let expected: Vec<&str> = segments.iter().map(String::as_str).collect();
                prop_assert_eq!(split, expected);
            }

            /// One more segment than there are unescaped dots
            #[test]
            fn prop_segment_count(path in "[ab.\\\\]{0,16}") {
                let bytes = path.as_bytes();
                let splits = (0..bytes.len())
                    .filter(|&i| bytes[i] == b'.' && (i == 0 || bytes[i - 1] != b'\\'))
                    .count();
                prop_assert_eq!(split_dotted(&path).count(), splits + 1);
                prop_assert_eq!(split_dotted(&path).collect::<Vec<_>>().concat().len()
                    + splits, path.len());
            }
        }
    }
}
