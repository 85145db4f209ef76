#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz target for numeric coercion.
//!
//! Checks that string coercion never panics, that `to_number` and the
//! strict `parse_number` agree, and that `ceil` never turns a finite
//! number into NaN.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_to_number

use libfuzzer_sys::fuzz_target;
use serde_json::Value;
use tine_ops::{ceil, parse_number, to_number};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    if input.len() > 4_096 {
        return;
    }

    let coerced = to_number(Some(&Value::String(input.to_owned())));
    match parse_number(input) {
        Ok(n) => assert!(n == coerced || (n.is_nan() && coerced.is_nan())),
        Err(_) => assert!(coerced.is_nan(), "{input:?} coerced to {coerced}"),
    }

    if coerced.is_finite() {
        for precision in [-3, -1, 0, 1, 2, 5, 300] {
            assert!(!ceil(coerced, precision).is_nan(), "ceil({coerced}, {precision})");
        }
    }
});
