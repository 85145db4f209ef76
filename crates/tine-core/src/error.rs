// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for path parsing and resolution
//!
//! [`crate::get`] never surfaces these: every failure degrades to the
//! caller's default. They exist for [`crate::try_get`] and
//! [`crate::PathExpr::validate`], which report why a lookup failed.

use thiserror::Error;

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, ResolveError>;

/// A path expression that can never resolve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no segments (including the empty dotted path)
    #[error("empty path")]
    Empty,

    /// The path was neither a string, a segment list, nor a single key
    #[error("invalid path shape: expected string or array, found {found}")]
    InvalidShape {
        /// JSON type name of the rejected path value
        found: &'static str,
    },
}

/// Why a path did not resolve against a root
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The path itself is unusable
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    /// There was no root value to traverse
    #[error("root value is absent")]
    AbsentRoot,

    /// A `null` was reached while segments remained
    #[error("null value at depth {depth} cannot be traversed")]
    NullIntermediate {
        /// Number of segments consumed before the null was hit
        depth: usize,
    },

    /// The segment at `depth` named nothing in the current value
    #[error("no own entry '{segment}' at depth {depth}")]
    Missing {
        /// Zero-based index of the failing segment
        depth: usize,
        /// The failing segment as written
        segment: String,
    },
}

impl ResolveError {
    /// Depth at which traversal stopped, if it started at all
    #[must_use]
    pub const fn depth(&self) -> Option<usize> {
        match self {
            Self::NullIntermediate { depth } | Self::Missing { depth, .. } => Some(*depth),
            Self::InvalidPath(_) | Self::AbsentRoot => None,
        }
    }
}
