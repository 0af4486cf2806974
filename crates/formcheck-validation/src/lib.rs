//! # formcheck-validation
//!
//! Validators for Brazilian form fields: presence checks, numeric strings,
//! email, free text, landline and cell phone numbers, dates (ISO and
//! `DD/MM/YYYY`) and CPF check digits.
//!
//! Every validator is a pure function returning `bool`. [`Validators`] groups
//! them behind one value with a few options, and [`Rules`] applies them to the
//! fields of a submitted form.
//!
//! ```
//! use formcheck_validation::{is_valid_cpf, is_cell_phone, Rule, Rules};
//!
//! assert!(is_valid_cpf("111.444.777-35"));
//! assert!(is_cell_phone("(11) 98888-7777"));
//!
//! let rules = Rules::new()
//!     .required("cpf", Rule::Cpf)
//!     .field("phone", Rule::Phone);
//! let form = serde_json::json!({"cpf": "111.444.777-35"});
//! assert!(rules.validate(form.as_object().unwrap()).is_ok());
//! ```

pub mod error;
pub mod options;
pub mod rules;
pub mod validators;
pub mod value;

// Re-exports for easy access
pub use error::{ConfigError, FormatError, ValidationError, ValidationErrors, ValidationResult};
pub use options::ValidatorOptions;
pub use rules::{Rule, Rules};
pub use value::FieldValue;

pub use validators::{
    cpf_check_digits, date, date_at, email, format_en_date_to_pt_br, format_pt_br_date_to_en,
    is_cell_phone, is_date, is_landline, is_null, is_number, is_number_value, is_phone,
    is_undefined, is_valid_cpf, is_valid_cpf_strict, not_initialized, text, DateFormat,
    Validators,
};
