//! Luhn (mod 10) check digits.

use crate::errors::GenerationError;

/// Compute the Luhn check digit to append to `digits`.
///
/// Counting from the right, the rightmost input digit and every second
/// digit after it are doubled, since each shifts one place left once the
/// check digit is appended. The empty string yields `'0'`.
pub fn luhn_check_digit(digits: &str) -> Result<char, GenerationError> {
    let values = parse_digits(digits)
        .ok_or_else(|| GenerationError::InvalidDigits(format!("'{digits}' is not all digits")))?;
    Ok(char::from(b'0' + check_digit(&values)))
}

/// Standard Luhn validity: the rightmost digit is left as is.
pub fn is_luhn_valid(value: &str) -> bool {
    match parse_digits(value) {
        Some(values) if !values.is_empty() => luhn_sum(&values, false) % 10 == 0,
        _ => false,
    }
}

pub(crate) fn check_digit(digits: &[u8]) -> u8 {
    let sum = luhn_sum(digits, true);
    ((10 - sum % 10) % 10) as u8
}

fn luhn_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(idx, digit)| {
            let doubled = (idx % 2 == 0) == double_rightmost;
            let value = if doubled { digit * 2 } else { *digit };
            u32::from(if value > 9 { value - 9 } else { value })
        })
        .sum()
}

fn parse_digits(value: &str) -> Option<Vec<u8>> {
    value
        .bytes()
        .map(|byte| byte.is_ascii_digit().then(|| byte - b'0'))
        .collect()
}
