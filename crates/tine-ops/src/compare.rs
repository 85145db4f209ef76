// SPDX-License-Identifier: MIT OR Apache-2.0
//! SameValueZero equality
//!
//! Scalars compare by value; arrays and objects compare by identity only.
//! Two separately built `[1, 2, 3]` are not equal, but a value is always
//! equal to itself.

use serde_json::{Number, Value};

/// Numeric SameValueZero: NaN equals NaN and `0` equals `-0`
#[must_use]
pub fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => same_value_zero(a, b),
        _ => a == b,
    }
}

/// Compare two values with SameValueZero semantics.
///
/// Absent equals only absent, so `eq(None, Some(&Value::Null))` is false.
///
/// ```
/// use serde_json::json;
/// use tine_ops::eq;
///
/// let list = json!([1, 2, 3]);
/// assert!(eq(Some(&list), Some(&list)));
/// assert!(!eq(Some(&list), Some(&json!([1, 2, 3]))));
/// assert!(eq(Some(&json!(0.0)), Some(&json!(-0.0))));
/// ```
#[must_use]
pub fn eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    let (a, b) = match (a, b) {
        (None, None) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            std::ptr::eq(a, b)
        }
        _ => false,
    }
}
