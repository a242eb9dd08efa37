//! Turkish identification number (T.C. Kimlik No) check digits.

use super::decimal_digits;
use crate::error::{Error, Result};

const PREFIX_LEN: usize = 9;

/// Computes the 10th and 11th digits for a 9-digit identity prefix.
pub fn checksum(identity_prefix: &str) -> Result<String> {
    if identity_prefix.chars().count() != PREFIX_LEN {
        return Err(Error::InvalidInput(format!(
            "tcno: prefix must be exactly {PREFIX_LEN} digits, got '{identity_prefix}'"
        )));
    }
    let digits = decimal_digits(identity_prefix, "tcno")?;

    let (mut even_sum, mut odd_sum) = (0_i64, 0_i64);
    for (idx, digit) in digits.into_iter().enumerate() {
        if idx % 2 == 0 {
            even_sum += i64::from(digit);
        } else {
            odd_sum += i64::from(digit);
        }
    }

    let tenth = (7 * even_sum - odd_sum).rem_euclid(10);
    let eleventh = (even_sum + odd_sum + tenth).rem_euclid(10);
    Ok(format!("{tenth}{eleventh}"))
}

pub fn is_valid(tc_no: &str) -> bool {
    if tc_no.len() != PREFIX_LEN + 2 || !tc_no.chars().all(|ch| ch.is_ascii_digit()) {
        return false;
    }
    let (prefix, check) = tc_no.split_at(PREFIX_LEN);
    checksum(prefix).is_ok_and(|expected| expected == check)
}
