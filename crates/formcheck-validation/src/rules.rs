//! Field rules: built-in validators attached to form field names

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::options::ValidatorOptions;
use crate::validators::{not_initialized, DateFormat, Validators};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A built-in check that can be attached to a form field.
///
/// Every rule except [`Rule::Required`] lets absent values (null or
/// undefined) through, so optional fields only need the format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Present and not the empty string
    Required,
    /// Digits only
    Number,
    Email,
    /// Free-form text, not a number
    Text,
    Landline,
    CellPhone,
    /// Landline or cell phone
    Phone,
    /// Real date, not in the future; `None` uses the configured default format
    Date {
        #[serde(default)]
        format: Option<DateFormat>,
    },
    Cpf,
}

impl Rule {
    /// Date rule using the default format of the validator set
    pub fn date() -> Self {
        Rule::Date { format: None }
    }

    /// Date rule in an explicit format
    pub fn date_as(format: DateFormat) -> Self {
        Rule::Date {
            format: Some(format),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Number => "number",
            Rule::Email => "email",
            Rule::Text => "text",
            Rule::Landline => "landline",
            Rule::CellPhone => "cell_phone",
            Rule::Phone => "phone",
            Rule::Date { .. } => "date",
            Rule::Cpf => "cpf",
        }
    }

    /// Error code reported when the rule fails
    pub fn code(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Number => "invalid_number",
            Rule::Email => "invalid_email",
            Rule::Text => "invalid_text",
            Rule::Landline => "invalid_landline",
            Rule::CellPhone => "invalid_cell_phone",
            Rule::Phone => "invalid_phone",
            Rule::Date { .. } => "invalid_date",
            Rule::Cpf => "invalid_cpf",
        }
    }

    fn message(&self, field: &str) -> String {
        match self {
            Rule::Required => format!("{} is required", field),
            Rule::Number => format!("{} must contain only digits", field),
            Rule::Email => format!("{} must be a valid email address", field),
            Rule::Text => format!("{} must be text, not a number", field),
            Rule::Landline => format!("{} must be a valid landline number", field),
            Rule::CellPhone => format!("{} must be a valid cell phone number", field),
            Rule::Phone => format!("{} must be a valid phone number", field),
            Rule::Date { .. } => format!("{} must be a valid date that is not in the future", field),
            Rule::Cpf => format!("{} must be a valid CPF", field),
        }
    }

    /// Whether `value` passes, or `None` when a format rule gets a value
    /// with no string form
    fn accepts(&self, validators: &Validators, value: &FieldValue) -> Option<bool> {
        let text = || value.as_text();

        Some(match self {
            Rule::Required => !not_initialized([value]),
            Rule::Number => validators.is_number(&text()?),
            Rule::Email => validators.email(&text()?),
            Rule::Text => validators.text(&text()?),
            Rule::Landline => validators.is_landline(&text()?),
            Rule::CellPhone => validators.is_cell_phone(&text()?),
            Rule::Phone => validators.is_phone(&text()?),
            Rule::Date { format } => validators.date(&text()?, *format),
            Rule::Cpf => validators.is_valid_cpf(&text()?),
        })
    }

    /// Extra detail attached to a failure: the date format that was applied
    fn failure_context(&self, validators: &Validators) -> Option<Value> {
        match self {
            Rule::Date { format } => {
                let format = format.unwrap_or(validators.options().default_date_format);
                Some(serde_json::json!({ "format": format }))
            }
            _ => None,
        }
    }

    /// Check one field value against this rule.
    ///
    /// Text and numbers are validated through their string form; booleans,
    /// arrays and objects fail with `invalid_type`.
    pub fn check(&self, validators: &Validators, field: &str, value: &FieldValue) -> Result<(), ValidationError> {
        if *self != Rule::Required && value.is_absent() {
            return Ok(());
        }

        match self.accepts(validators, value) {
            Some(true) => Ok(()),
            Some(false) => {
                let error = ValidationError::with_code(field, self.message(field), self.code());
                Err(match self.failure_context(validators) {
                    Some(context) => error.context(context),
                    None => error,
                })
            }
            None => Err(ValidationError::with_code(
                field,
                format!("{} must be a string for {} validation", field, self.name()),
                "invalid_type",
            )),
        }
    }
}

/// Rules for the fields of one form
#[derive(Debug, Clone, Default)]
pub struct Rules {
    field_rules: HashMap<String, Vec<Rule>>,
    validators: Validators,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a validator set configured with `options`
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.validators = Validators::with_options(options);
        self
    }

    /// Add a validation rule for a specific field
    pub fn field(mut self, field: impl Into<String>, rule: Rule) -> Self {
        self.field_rules.entry(field.into()).or_default().push(rule);
        self
    }

    /// Add [`Rule::Required`] followed by `rule`
    pub fn required(self, field: impl Into<String>, rule: Rule) -> Self {
        let field = field.into();
        self.field(field.clone(), Rule::Required).field(field, rule)
    }

    pub fn get_field_rules(&self, field: &str) -> Option<&Vec<Rule>> {
        self.field_rules.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.field_rules.is_empty()
    }

    /// Number of fields with rules
    pub fn field_rule_count(&self) -> usize {
        self.field_rules.len()
    }

    pub fn validated_fields(&self) -> Vec<&String> {
        self.field_rules.keys().collect()
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// Run every rule of `field` against `value`, collecting all failures
    pub fn validate_field(&self, field: &str, value: &FieldValue) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();

        if let Some(rules) = self.field_rules.get(field) {
            for rule in rules {
                if let Err(error) = rule.check(&self.validators, field, value) {
                    tracing::debug!(field, rule = rule.name(), code = %error.code, "field failed validation");
                    errors.add(error);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate a submitted form. Fields missing from `data` are checked as undefined.
    pub fn validate(&self, data: &Map<String, Value>) -> ValidationResult<()> {
        let mut errors = ValidationErrors::new();

        for field in self.field_rules.keys() {
            let value = FieldValue::from_field(data, field);
            if let Err(field_errors) = self.validate_field(field, &value) {
                errors.merge(field_errors);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                fields = errors.len(),
                total = errors.total_errors(),
                "form failed validation"
            );
            Err(errors)
        }
    }
}
