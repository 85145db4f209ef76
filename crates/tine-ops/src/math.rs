// SPDX-License-Identifier: MIT OR Apache-2.0
//! Arithmetic helpers
//!
//! Decimal rounding shifts the exponent of the shortest decimal
//! representation instead of multiplying by a power of ten, so `4.1` at
//! five places stays `4.1` rather than picking up binary error.

use serde_json::Value;

use crate::coerce::to_number;

/// Precisions beyond this push every finite `f64` out of range
const MAX_PRECISION: i32 = 292;

/// Add two values after coercing each with [`to_number`].
///
/// Follows IEEE 754: `-0 + -0` is `-0` and `inf + -inf` is NaN.
#[must_use]
pub fn add(augend: Option<&Value>, addend: Option<&Value>) -> f64 {
    to_number(augend) + to_number(addend)
}

/// Round `number` up at `precision` decimal places.
///
/// Negative precision rounds to tens, hundreds and so on. Precision is
/// clamped to ±292. Non-finite input is returned unchanged.
///
/// ```
/// use tine_ops::ceil;
///
/// assert_eq!(ceil(4.006, 0), 5.0);
/// assert_eq!(ceil(6.004, 2), 6.01);
/// assert_eq!(ceil(6040.0, -2), 6100.0);
/// ```
#[must_use]
pub fn ceil(number: f64, precision: i32) -> f64 {
    let precision = precision.clamp(-MAX_PRECISION, MAX_PRECISION);
    if precision == 0 || !number.is_finite() {
        return number.ceil();
    }

    let shifted = shift_exponent(number, precision);
    if !shifted.is_finite() {
        return number;
    }
    let rounded = shift_exponent(shifted.ceil(), -precision);
    // the shortest form of -0 prints as 0
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Multiply by `10^by` by rewriting the decimal exponent
fn shift_exponent(value: f64, by: i32) -> f64 {
    let repr = format!("{value:e}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };
    format!("{mantissa}e{}", exponent + by)
        .parse()
        .unwrap_or(f64::NAN)
}

/// [`ceil`] over JSON values.
///
/// `number` is coerced with [`to_number`]. An absent precision means zero;
/// a numeric precision is truncated toward zero; any other precision
/// (`null`, booleans, strings, collections) yields NaN.
#[must_use]
pub fn ceil_value(number: Option<&Value>, precision: Option<&Value>) -> f64 {
    let precision = match precision {
        None => 0,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(p) if p.is_finite() => clamp_precision(p),
            _ => return f64::NAN,
        },
        Some(_) => return f64::NAN,
    };
    ceil(to_number(number), precision)
}

#[allow(clippy::cast_possible_truncation)] // clamped into i32 range first
fn clamp_precision(precision: f64) -> i32 {
    let limit = f64::from(MAX_PRECISION);
    precision.trunc().clamp(-limit, limit) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_numbers() {
        assert_eq!(add(Some(&json!(6)), Some(&json!(4))), 10.0);
        assert_eq!(add(Some(&json!(6)), Some(&json!(-4))), 2.0);
        assert_eq!(add(Some(&json!(-6)), Some(&json!(-4))), -10.0);
        assert_eq!(add(Some(&json!(0)), Some(&json!(4))), 4.0);
        assert!((add(Some(&json!(0.1)), Some(&json!(0.2))) - 0.3).abs() < 1e-10);
        assert_eq!(add(Some(&json!(1e-10)), Some(&json!(1e-10))), 2e-10);
        assert_eq!(add(Some(&json!(1e10)), Some(&json!(1e10))), 2e10);
    }

    #[test]
    fn test_add_extremes() {
        assert_eq!(add(Some(&json!(f64::MAX)), Some(&json!(1))), f64::MAX);
        assert_eq!(add(Some(&json!(-f64::MAX)), Some(&json!(-1))), -f64::MAX);
    }

    #[test]
    fn test_add_signed_zero() {
        let zero = add(Some(&json!(0.0)), Some(&json!(-0.0)));
        assert!(zero == 0.0 && zero.is_sign_positive());
        let neg = add(Some(&json!(-0.0)), Some(&json!(-0.0)));
        assert!(neg == 0.0 && neg.is_sign_negative());
    }

    #[test]
    fn test_add_coerces() {
        assert_eq!(add(Some(&json!("6")), Some(&json!("4"))), 10.0);
        assert_eq!(add(Some(&json!("6")), Some(&json!(4))), 10.0);
        assert_eq!(add(Some(&json!(true)), Some(&json!(1))), 2.0);
        assert_eq!(add(Some(&json!(false)), Some(&json!(1))), 1.0);
    }

    #[test]
    fn test_add_not_a_number() {
        assert!(add(Some(&json!("a")), Some(&json!(4))).is_nan());
        assert!(add(Some(&json!(6)), Some(&json!("b"))).is_nan());
        assert!(add(Some(&json!({})), Some(&json!([]))).is_nan());
        assert!(add(Some(&Value::Null), None).is_nan());
        assert!(add(Some(&json!("Infinity")), Some(&json!("-Infinity"))).is_nan());
        assert_eq!(add(Some(&json!("Infinity")), Some(&json!(10))), f64::INFINITY);
    }

    #[test]
    fn test_ceil_integer_precision() {
        assert_eq!(ceil(4.006, 0), 5.0);
        assert_eq!(ceil(-4.006, 0), -4.0);
        assert_eq!(ceil(5.0, 0), 5.0);
        assert_eq!(ceil(-3.0, 0), -3.0);
        assert_eq!(ceil(0.0, 0), 0.0);
    }

    #[test]
    fn test_ceil_positive_precision() {
        assert_eq!(ceil(6.004, 2), 6.01);
        assert_eq!(ceil(4.1234, 3), 4.124);
        assert_eq!(ceil(4.1, 5), 4.1);
        assert_eq!(ceil(-4.1, 5), -4.1);
        assert_eq!(ceil(0.0004, 3), 0.001);
        assert_eq!(ceil(1_234_567.891_23, 3), 1_234_567.892);
        assert_eq!(ceil(-1_234_567.891_23, 3), -1_234_567.891);
    }

    #[test]
    fn test_ceil_negative_precision() {
        assert_eq!(ceil(6040.0, -2), 6100.0);
        assert_eq!(ceil(1234.0, -1), 1240.0);
        assert_eq!(ceil(4567.0, -3), 5000.0);
        assert_eq!(ceil(-4567.0, -3), -4000.0);
    }

    #[test]
    fn test_ceil_zero_result_is_positive() {
        let rounded = ceil(-0.0004, 3);
        assert!(rounded == 0.0 && rounded.is_sign_positive());
    }

    #[test]
    fn test_ceil_non_finite() {
        assert_eq!(ceil(f64::INFINITY, 0), f64::INFINITY);
        assert_eq!(ceil(f64::NEG_INFINITY, 2), f64::NEG_INFINITY);
        assert!(ceil(f64::NAN, 2).is_nan());
        assert_eq!(ceil(1e300, 100), 1e300);
    }

    #[test]
    fn test_ceil_value_coerces_number() {
        assert!(ceil_value(Some(&json!("string")), None).is_nan());
        assert!(ceil_value(None, None).is_nan());
        assert_eq!(ceil_value(Some(&Value::Null), None), 0.0);
        assert_eq!(ceil_value(Some(&json!(true)), None), 1.0);
        assert_eq!(ceil_value(Some(&json!(false)), None), 0.0);
        assert_eq!(ceil_value(Some(&json!("4.006")), Some(&json!(2))), 4.01);
    }

    #[test]
    fn test_ceil_value_rejects_non_numeric_precision() {
        let n = json!(4.006);
        for bad in [json!(null), json!("string"), json!(true), json!([2])] {
            assert!(ceil_value(Some(&n), Some(&bad)).is_nan(), "precision {bad}");
        }
    }

    #[test]
    fn test_ceil_value_truncates_precision() {
        assert_eq!(ceil_value(Some(&json!(6.004)), Some(&json!(2.9))), 6.01);
        assert_eq!(ceil_value(Some(&json!(6040)), Some(&json!(-2.5))), 6100.0);
        assert_eq!(ceil_value(Some(&json!(4.5)), Some(&json!(1e9))), 4.5);
    }

    mod props {
        use crate::math::ceil;
        use proptest::prelude::*;

        proptest! {
            /// Rounding up never lands below the input or a full step above it
            #[test]
            fn prop_ceil_bounds(x in -1.0e6f64..1.0e6, precision in 0i32..5) {
                let step = 10f64.powi(-precision);
                let rounded = ceil(x, precision);
                prop_assert!(rounded >= x - 1e-9, "ceil({}, {}) = {}", x, precision, rounded);
                prop_assert!(rounded - x < step + 1e-9, "ceil({}, {}) = {}", x, precision, rounded);
            }

            /// Whole numbers are fixed points at every non-negative precision
            #[test]
            fn prop_ceil_integers_fixed(n in -1_000_000i32..1_000_000, precision in 0i32..10) {
                prop_assert_eq!(ceil(f64::from(n), precision), f64::from(n));
            }
        }
    }
}
