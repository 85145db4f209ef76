// SPDX-License-Identifier: MIT OR Apache-2.0
//! Concurrent memo of parsed dotted paths
//!
//! Callers that resolve the same handful of dotted paths against many
//! documents can keep a [`PathCache`] around and skip re-tokenizing. The
//! cache is owned by the caller; nothing in this crate holds one globally.

use std::sync::Arc;

use ahash::RandomState;
use dashmap::DashMap;

use crate::error::PathError;
use crate::path::ParsedPath;

/// Thread-safe cache from dotted path strings to their parsed form
#[derive(Debug, Default)]
pub struct PathCache {
    entries: DashMap<Box<str>, Arc<ParsedPath>, RandomState>,
}

impl PathCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the parsed form of `path`, parsing it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] for the empty string. Failures are not
    /// cached.
    pub fn get_or_parse(&self, path: &str) -> Result<Arc<ParsedPath>, PathError> {
        if let Some(hit) = self.entries.get(path) {
            return Ok(Arc::clone(hit.value()));
        }
        let parsed = Arc::new(ParsedPath::parse(path)?);
        let entry = self.entries.entry(path.into()).or_insert(parsed);
        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached paths
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached path
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathComponent;

    #[test]
    fn test_cache_reuses_entries() {
        let cache = PathCache::new();
        assert!(cache.is_empty());

        let first = cache.get_or_parse("a.b.c").unwrap();
        let second = cache.get_or_parse("a.b.c").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.components()[2], PathComponent::from("c"));
    }

    #[test]
    fn test_cache_does_not_store_failures() {
        let cache = PathCache::new();
        assert_eq!(cache.get_or_parse("").unwrap_err(), PathError::Empty);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_clear() {
        let cache = PathCache::new();
        cache.get_or_parse("x").unwrap();
        cache.get_or_parse("y.z").unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_shared_across_threads() {
        let cache = Arc::new(PathCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_parse("shared.path").unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
        assert_eq!(cache.len(), 1);
    }
}
