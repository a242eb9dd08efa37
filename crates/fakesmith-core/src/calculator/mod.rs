//! Deterministic check-digit algorithms used by identifier formatters.

pub mod iban;
pub mod luhn;
pub mod tcno;

use crate::error::{Error, Result};

/// Decodes an ASCII decimal string into its digits.
pub(crate) fn decimal_digits(value: &str, ctx: &'static str) -> Result<Vec<u32>> {
    value
        .chars()
        .map(|ch| {
            ch.to_digit(10).ok_or_else(|| {
                Error::InvalidInput(format!("{ctx}: '{value}' contains non-digit character '{ch}'"))
            })
        })
        .collect()
}
