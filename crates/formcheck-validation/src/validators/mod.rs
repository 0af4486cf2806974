//! Built-in validators and the [`Validators`] set that groups them

pub mod cpf;
pub mod date;
pub mod pattern;
pub mod primitive;

pub use cpf::{cpf_check_digits, is_valid_cpf, is_valid_cpf_strict};
pub use date::{date, date_at, format_en_date_to_pt_br, format_pt_br_date_to_en, is_date, DateFormat};
pub use pattern::{email, is_cell_phone, is_landline, is_phone, text};
pub use primitive::{is_null, is_number, is_number_value, is_undefined, not_initialized};

use crate::error::FormatError;
use crate::options::ValidatorOptions;
use crate::value::FieldValue;
use chrono::NaiveDateTime;

/// The full validator set behind one value.
///
/// Every method delegates to the free function of the same name; the set
/// only adds [`ValidatorOptions`] on top (strict CPF checking, default date
/// format).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validators {
    options: ValidatorOptions,
}

impl Validators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn is_null(&self, value: &FieldValue) -> bool {
        is_null(value)
    }

    pub fn is_undefined(&self, value: &FieldValue) -> bool {
        is_undefined(value)
    }

    pub fn not_initialized<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a FieldValue>,
    {
        not_initialized(values)
    }

    pub fn is_number(&self, value: &str) -> bool {
        is_number(value)
    }

    pub fn email(&self, value: &str) -> bool {
        email(value)
    }

    pub fn text(&self, value: &str) -> bool {
        text(value)
    }

    pub fn is_landline(&self, value: &str) -> bool {
        is_landline(value)
    }

    pub fn is_cell_phone(&self, value: &str) -> bool {
        is_cell_phone(value)
    }

    pub fn is_phone(&self, value: &str) -> bool {
        is_phone(value)
    }

    pub fn is_date(&self, value: &str) -> bool {
        is_date(value)
    }

    /// Not-in-the-future check; `None` uses the configured default format
    pub fn date(&self, value: &str, format: Option<DateFormat>) -> bool {
        date(value, format.unwrap_or(self.options.default_date_format))
    }

    pub fn date_at(&self, value: &str, format: Option<DateFormat>, now: NaiveDateTime) -> bool {
        date_at(value, format.unwrap_or(self.options.default_date_format), now)
    }

    pub fn format_pt_br_date_to_en(&self, value: &str) -> Result<String, FormatError> {
        format_pt_br_date_to_en(value)
    }

    pub fn format_en_date_to_pt_br(&self, value: &str) -> Result<String, FormatError> {
        format_en_date_to_pt_br(value)
    }

    /// CPF check, strict when [`ValidatorOptions::strict_cpf`] is set
    pub fn is_valid_cpf(&self, value: &str) -> bool {
        if self.options.strict_cpf {
            is_valid_cpf_strict(value)
        } else {
            is_valid_cpf(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default_set_delegates() {
        let validators = Validators::new();

        assert!(validators.is_null(&FieldValue::Null));
        assert!(validators.is_undefined(&FieldValue::Undefined));
        assert!(validators.not_initialized(&[FieldValue::from("")]));
        assert!(validators.is_number("123"));
        assert!(validators.email("a@b.co"));
        assert!(validators.text("Maria"));
        assert!(validators.is_landline("1133334444"));
        assert!(validators.is_cell_phone("11988887777"));
        assert!(validators.is_phone("11988887777"));
        assert!(validators.is_date("2024-01-01"));
        assert!(validators.date("2000-01-01", None));
        assert_eq!(validators.format_pt_br_date_to_en("01/02/2024").unwrap(), "2024-02-01");
        assert_eq!(validators.format_en_date_to_pt_br("2024-02-01").unwrap(), "01/02/2024");
        assert!(validators.is_valid_cpf("000.000.000-00"));
    }

    #[test]
    fn test_strict_cpf_option() {
        let validators = Validators::with_options(ValidatorOptions::new().strict_cpf(true));

        assert!(validators.options().strict_cpf);
        assert!(!validators.is_valid_cpf("000.000.000-00"));
        assert!(validators.is_valid_cpf("111.444.777-35"));
    }

    #[test]
    fn test_default_date_format_option() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let db = Validators::new();
        assert!(db.date_at("2024-06-01", None, now));
        assert!(!db.date_at("2024-06-01", Some(DateFormat::Pt), now));

        let pt = Validators::with_options(ValidatorOptions::new().default_date_format(DateFormat::Pt));
        assert!(pt.date_at("01/06/2024", None, now));
        assert!(!pt.date_at("2024-06-01", None, now));
        assert!(pt.date_at("2024-06-01", Some(DateFormat::Db), now));
    }
}
