//! Presence checks and the numeric-string check

use crate::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGITS_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits pattern is valid"));

/// True iff `value` is an explicit null
pub fn is_null(value: &FieldValue) -> bool {
    value.is_null()
}

/// True iff `value` was never provided
pub fn is_undefined(value: &FieldValue) -> bool {
    value.is_undefined()
}

/// True if any of `values` is the empty string, null or undefined.
///
/// Whitespace-only strings count as initialized.
pub fn not_initialized<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a FieldValue>,
{
    values.into_iter().any(|value| {
        is_null(value) || is_undefined(value) || matches!(value, FieldValue::Text(s) if s.is_empty())
    })
}

/// True iff `value` is one or more ASCII digits and nothing else.
///
/// This is a format check: `"007"` passes, `"-1"` and `"1.5"` do not.
pub fn is_number(value: &str) -> bool {
    DIGITS_ONLY.is_match(value)
}

/// [`is_number`] over the string form of a field value
pub fn is_number_value(value: &FieldValue) -> bool {
    value.as_text().is_some_and(|text| is_number(&text))
}
