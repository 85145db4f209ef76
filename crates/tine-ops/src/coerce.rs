// SPDX-License-Identifier: MIT OR Apache-2.0
//! Numeric coercion and truthiness
//!
//! [`to_number`] follows the ECMAScript `ToNumber` rules restricted to the
//! values JSON can express. Coercion never fails: anything that is not a
//! number becomes NaN.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::NumberError;

/// Decimal literal grammar: optional sign, then `Infinity` or digits with
/// an optional fraction and exponent. ASCII digits only.
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$")
        .expect("decimal grammar is a valid pattern")
});

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Split a `0x`/`0b`/`0o` literal into its radix and digits
fn radix_literal(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'b' | b'B' => 2,
        b'o' | b'O' => 8,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc.mul_add(f64::from(radix), f64::from(d)))
    })
}

/// Parse a string the way `Number(string)` does.
///
/// Surrounding whitespace is ignored and the empty string is zero. Radix
/// prefixes are case-insensitive and may not be signed.
///
/// ```
/// use tine_ops::parse_number;
///
/// assert_eq!(parse_number("  0xFF "), Ok(255.0));
/// assert_eq!(parse_number("-1e-2"), Ok(-0.01));
/// assert!(parse_number("42abc").is_err());
/// ```
///
/// # Errors
///
/// - [`NumberError::InvalidDigits`] for a prefix with missing or bad digits
/// - [`NumberError::SignedRadix`] for `+0x1`, `-0b1` and friends
/// - [`NumberError::Malformed`] for everything else that is not a number
pub fn parse_number(input: &str) -> Result<f64, NumberError> {
    let trimmed = input.trim_matches(is_space);
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    if let Some((radix, digits)) = radix_literal(trimmed) {
        return parse_radix(digits, radix).ok_or_else(|| NumberError::InvalidDigits {
            radix,
            input: trimmed.to_owned(),
        });
    }
    if let Some(unsigned) = trimmed.strip_prefix(['+', '-'])
        && radix_literal(unsigned).is_some()
    {
        return Err(NumberError::SignedRadix {
            input: trimmed.to_owned(),
        });
    }

    if !DECIMAL.is_match(trimmed) {
        return Err(NumberError::Malformed {
            input: trimmed.to_owned(),
        });
    }
    match trimmed.trim_start_matches(['+', '-']) {
        "Infinity" if trimmed.starts_with('-') => Ok(f64::NEG_INFINITY),
        "Infinity" => Ok(f64::INFINITY),
        _ => trimmed.parse().map_err(|_| NumberError::Malformed {
            input: trimmed.to_owned(),
        }),
    }
}

/// Coerce a value to a number.
///
/// | Input | Result |
/// |-------|--------|
/// | absent | NaN |
/// | `null` | 0 |
/// | `true` / `false` | 1 / 0 |
/// | number | itself |
/// | string | [`parse_number`], NaN on failure |
/// | `[]` | 0 |
/// | `[x]` | `x` through its string form (`[null]` is 0, `[true]` is NaN) |
/// | longer arrays, objects | NaN |
#[must_use]
pub fn to_number(value: Option<&Value>) -> f64 {
    let Some(value) = value else {
        return f64::NAN;
    };
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s).unwrap_or(f64::NAN),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [only] => sole_element_to_number(only),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// A one-element array stringifies to its element, so booleans and
/// objects stop being numeric here.
fn sole_element_to_number(element: &Value) -> f64 {
    match element {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => to_number(Some(other)),
    }
}

/// ECMAScript truthiness: `false`, `0`, `""` and `null` are falsy; every
/// array and object is truthy, even when empty.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
