//! CPF (Brazilian individual taxpayer number) check digit validation
//!
//! A CPF has nine base digits followed by two check digits. Each check digit
//! is a weighted sum of the digits before it, reduced modulo 11:
//!
//! - first: weights 10..=2 over the nine base digits
//! - second: weights 11..=2 over the base digits plus the first check digit
//!
//! `11 - (sum % 11)` is the check digit, with 10 and 11 mapping to 0.

use super::pattern::{all_same_digit, strip_non_digits};

const CPF_LENGTH: usize = 11;

/// Check digit for `digits`, weighting the first one with `digits.len() + 1`
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, digit)| digit * (top_weight - i as u32))
        .sum();

    match 11 - sum % 11 {
        10 | 11 => 0,
        digit => digit,
    }
}

/// The two check digits for a nine digit CPF base.
///
/// Returns `None` unless `base` is exactly nine ASCII digits.
pub fn cpf_check_digits(base: &str) -> Option<(u32, u32)> {
    if base.len() != 9 {
        return None;
    }

    let mut digits = base
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()?;

    let first = check_digit(&digits);
    digits.push(first);
    let second = check_digit(&digits);

    Some((first, second))
}

/// Validate a CPF. Formatting characters are ignored (`111.444.777-35`).
///
/// Anything other than exactly eleven digits is invalid. Repeated-digit
/// numbers such as `000.000.000-00` satisfy the check digit arithmetic and
/// pass here; use [`is_valid_cpf_strict`] to reject them.
pub fn is_valid_cpf(value: &str) -> bool {
    let digits = strip_non_digits(value);
    if digits.len() != CPF_LENGTH {
        tracing::trace!(length = digits.len(), "cpf rejected: wrong digit count");
        return false;
    }

    let (base, check) = digits.split_at(9);
    let Some((first, second)) = cpf_check_digits(base) else {
        return false;
    };

    let expected = format!("{first}{second}");
    if check != expected {
        tracing::trace!(expected = %expected, found = check, "cpf rejected: check digit mismatch");
        return false;
    }

    true
}

/// [`is_valid_cpf`], also rejecting numbers made of one repeated digit
pub fn is_valid_cpf_strict(value: &str) -> bool {
    is_valid_cpf(value) && !all_same_digit(&strip_non_digits(value))
}
