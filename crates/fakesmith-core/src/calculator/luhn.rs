//! Luhn (mod 10) checksum, as used by payment card numbers and IMEIs.

use super::decimal_digits;
use crate::error::{Error, Result};

/// Luhn sum of `number` modulo 10; zero means the number is valid.
pub fn checksum(number: &str) -> Result<u32> {
    let digits = decimal_digits(number, "luhn")?;
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, &digit)| {
            if idx % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    Ok(sum % 10)
}

/// Check digit the caller appends to `digits` to make it Luhn-valid.
pub fn check_digit(digits: &str) -> Result<u32> {
    let sum = checksum(&format!("{digits}0"))?;
    Ok((10 - sum) % 10)
}

pub fn is_valid(number: &str) -> bool {
    !number.is_empty() && matches!(checksum(number), Ok(0))
}

/// Appends the Luhn check digit to `partial`.
pub fn generate(partial: &str) -> Result<String> {
    if partial.is_empty() {
        return Err(Error::InvalidInput(
            "luhn: partial number must not be empty".to_string(),
        ));
    }
    let digit = check_digit(partial)?;
    Ok(format!("{partial}{digit}"))
}
