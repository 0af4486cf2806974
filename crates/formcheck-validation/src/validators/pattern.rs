//! Pattern-based validators: email, free text and Brazilian phone numbers

use super::primitive::is_number;
use once_cell::sync::Lazy;
use regex::Regex;

// Both letter cases are spelled out, so the match is case-insensitive
// without Unicode case folding.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-0-9a-zA-Z.+_]+@[-0-9a-zA-Z.+_]+\.[a-zA-Z]{2,4}$")
        .expect("email pattern is valid")
});

// `\w` is Unicode-aware, so accented letters count as word characters.
static TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\w{2,}\s?.+$").expect("text pattern is valid"));

static LANDLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9]{2}[2-5][0-9]{3}[0-9]{4}$").expect("landline pattern is valid")
});

static CELL_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9]{2}[6-9][0-9]{8}$").expect("cell phone pattern is valid"));

/// Validate an email address after trimming surrounding whitespace.
///
/// The domain must end in a 2 to 4 letter suffix; anything before it may
/// contain further dots (`user@mail.co.uk` passes).
pub fn email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// True if `value` looks like free-form text rather than a number.
///
/// The value must not read as an integer (blank, `42`, `1e3`, `0x1F`) and,
/// once trimmed with inner whitespace runs collapsed, must start with two
/// word characters and carry at least one more character after them.
pub fn text(value: &str) -> bool {
    if coerces_to_integer(value) {
        return false;
    }

    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    TEXT.is_match(&collapsed)
}

/// Brazilian fixed-line number: area code, line digit 2-5, then seven digits.
///
/// Formatting characters are ignored: `(11) 3333-4444` passes.
pub fn is_landline(value: &str) -> bool {
    phone_digits(value).is_some_and(|digits| LANDLINE.is_match(&digits))
}

/// Brazilian mobile number: area code, prefix digit 6-9, then eight digits.
pub fn is_cell_phone(value: &str) -> bool {
    phone_digits(value).is_some_and(|digits| CELL_PHONE.is_match(&digits))
}

/// Either a landline or a cell phone number
pub fn is_phone(value: &str) -> bool {
    is_landline(value) || is_cell_phone(value)
}

/// Digits of a phone number, or `None` when there are no digits or every
/// digit is the same one (`1111111111`).
fn phone_digits(value: &str) -> Option<String> {
    let digits = strip_non_digits(value);

    if !is_number(&digits) {
        return None;
    }

    if all_same_digit(&digits) {
        tracing::trace!(digits = %digits, "phone number rejected: repeated digit");
        return None;
    }

    Some(digits)
}

pub(crate) fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub(crate) fn all_same_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Whether `value`, read as a number the way a browser form would, is an integer.
///
/// Blank input reads as zero. `0x`, `0o` and `0b` prefixes are integers in
/// that radix. Anything else goes through a decimal float parse; unparseable
/// input and infinities are not integers.
fn coerces_to_integer(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }

    const RADIX_PREFIXES: [(&str, u32); 6] = [
        ("0x", 16),
        ("0X", 16),
        ("0o", 8),
        ("0O", 8),
        ("0b", 2),
        ("0B", 2),
    ];

    for (prefix, radix) in RADIX_PREFIXES {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
        }
    }

    trimmed
        .parse::<f64>()
        .map_or(false, |number| number.is_finite() && number.fract() == 0.0)
}
