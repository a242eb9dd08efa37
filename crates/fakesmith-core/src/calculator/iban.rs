//! ISO 13616 IBAN check digits (ISO 7064 mod 97-10).

use crate::error::{Error, Result};

/// Digits folded into the running remainder per step of [`mod97`].
const MOD97_CHUNK: usize = 9;

/// Maps `A..=Z` to `10..=35`. Lowercase letters map like their uppercase form.
pub fn alpha_to_number(letter: char) -> Result<u32> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Ok(upper as u32 - 'A' as u32 + 10)
    } else {
        Err(Error::InvalidInput(format!(
            "iban: '{letter}' is not an ASCII letter"
        )))
    }
}

/// Remainder of an arbitrarily long decimal string modulo 97.
pub fn mod97(number: &str) -> Result<u32> {
    if number.is_empty() {
        return Err(Error::InvalidInput(
            "iban: mod97 input must not be empty".to_string(),
        ));
    }
    if let Some(ch) = number.chars().find(|ch| !ch.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "iban: mod97 input contains non-digit character '{ch}'"
        )));
    }

    let mut remainder = 0_u64;
    for chunk in number.as_bytes().chunks(MOD97_CHUNK) {
        let mut value = remainder;
        for byte in chunk {
            value = value * 10 + u64::from(byte - b'0');
        }
        remainder = value % 97;
    }
    Ok(remainder as u32)
}

/// Computes the two check digits for `iban`, ignoring the ones it carries.
pub fn checksum(iban: &str) -> Result<String> {
    let iban = normalize(iban)?;
    let rearranged = format!("{}{}00", &iban[4..], &iban[..2]);

    let mut digits = String::with_capacity(rearranged.len() * 2);
    for ch in rearranged.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else {
            digits.push_str(&alpha_to_number(ch)?.to_string());
        }
    }

    let checksum = 98 - mod97(&digits)?;
    Ok(format!("{checksum:02}"))
}

pub fn is_valid(iban: &str) -> bool {
    let Ok(normalized) = normalize(iban) else {
        return false;
    };
    checksum(&normalized).is_ok_and(|expected| expected == normalized[2..4])
}

fn normalize(iban: &str) -> Result<String> {
    if iban.len() < 4 {
        return Err(Error::InvalidInput(format!(
            "iban: '{iban}' is shorter than 4 characters"
        )));
    }
    if let Some(ch) = iban.chars().find(|ch| !ch.is_ascii_alphanumeric()) {
        return Err(Error::InvalidInput(format!(
            "iban: '{iban}' contains invalid character '{ch}'"
        )));
    }
    Ok(iban.to_ascii_uppercase())
}
