#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for guarded path resolution.
//!
//! Input is a path on the first line followed by a JSON document. Checks
//! that `get` never panics, that every path present in the document
//! resolves to that exact node, that an empty segment list never
//! resolves, and that `try_get` agrees with `get`.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_get

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use tine_core::{PathAccessor, PathComponent, get, has, try_get};

/// Collect the segment list of every node together with the node itself
fn collect_paths<'a>(
    value: &'a Value,
    prefix: &mut Vec<PathComponent>,
    out: &mut Vec<(Vec<PathComponent>, &'a Value)>,
) {
    out.push((prefix.clone(), value));
    match value {
        Value::Object(obj) => {
            for (key, val) in obj {
                prefix.push(PathComponent::Field(key.clone()));
                collect_paths(val, prefix, out);
                prefix.pop();
            }
        }
        Value::Array(arr) => {
            for (i, val) in arr.iter().enumerate() {
                prefix.push(PathComponent::Index(i));
                collect_paths(val, prefix, out);
                prefix.pop();
            }
        }
        _ => {}
    }
}

/// Dotted spelling, when one exists for these segments
fn dotted(segments: &[PathComponent]) -> Option<String> {
    if segments.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            PathComponent::Index(i) => parts.push(i.to_string()),
            PathComponent::Field(f) if !f.is_empty() && !f.contains(['.', '\\']) => {
                parts.push(f.clone());
            }
            PathComponent::Field(_) => return None,
        }
    }
    Some(parts.join("."))
}

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 50_000 {
        return;
    }
    let (path, json_str) = input.split_once('\n').unwrap_or((input, ""));

    let value: Option<Value> = serde_json::from_str(json_str).ok();
    let root = value.as_ref();
    let fallback = Value::Bool(false);

    // Arbitrary paths: no panics, and both entry points agree
    let found = get(root, path, Some(&fallback));
    match try_get(root, path) {
        Ok(hit) => assert!(std::ptr::eq(found.unwrap(), hit)),
        Err(_) => assert!(std::ptr::eq(found.unwrap(), &fallback)),
    }
    assert_eq!(has(root, path), try_get(root, path).is_ok());
    if let Ok(accessor) = PathAccessor::parse(path) {
        let by_accessor = accessor.resolve(root, Some(&fallback));
        assert!(std::ptr::eq(by_accessor.unwrap(), found.unwrap()));
    }

    let Some(doc) = root else {
        return;
    };

    // Every node in the document is reachable by its own segments
    let mut paths = Vec::new();
    collect_paths(doc, &mut Vec::new(), &mut paths);
    for (segments, node) in &paths {
        let hit = get(root, segments, None);
        if segments.is_empty() {
            assert!(hit.is_none(), "empty segment list resolved");
            continue;
        }
        assert!(
            hit.is_some_and(|v| std::ptr::eq(v, *node)),
            "segments {segments:?} did not resolve"
        );
        if let Some(spelled) = dotted(segments) {
            let hit = get(root, spelled.as_str(), None);
            assert!(
                hit.is_some_and(|v| std::ptr::eq(v, *node)),
                "dotted path {spelled} did not resolve"
            );
        }
    }
});
