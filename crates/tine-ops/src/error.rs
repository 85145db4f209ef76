// SPDX-License-Identifier: MIT OR Apache-2.0
//! Errors from strict number parsing
//!
//! The lenient helpers never return these; they map every failure to NaN.

use thiserror::Error;

/// Why a string is not a number
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Not a decimal, exponent, or prefixed radix literal
    #[error("not a number: {input:?}")]
    Malformed {
        /// The trimmed input
        input: String,
    },

    /// `0x`, `0b` or `0o` literal carrying a sign
    #[error("signed radix literal: {input:?}")]
    SignedRadix {
        /// The trimmed input
        input: String,
    },

    /// Prefix present but digits missing or out of range for the radix
    #[error("invalid base-{radix} digits: {input:?}")]
    InvalidDigits {
        /// Radix implied by the prefix
        radix: u32,
        /// The trimmed input
        input: String,
    },
}
