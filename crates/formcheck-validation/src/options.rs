//! Options for the validator set

use crate::error::ConfigError;
use crate::validators::DateFormat;
use serde::{Deserialize, Serialize};

/// Knobs accepted by [`Validators::with_options`](crate::Validators::with_options).
///
/// Every field has a default, so a partial JSON object such as
/// `{"strict_cpf": true}` is a complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Reject CPFs made of a single repeated digit
    pub strict_cpf: bool,
    /// Format used by date rules that do not name one
    pub default_date_format: DateFormat,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict_cpf(mut self, strict: bool) -> Self {
        self.strict_cpf = strict;
        self
    }

    pub fn default_date_format(mut self, format: DateFormat) -> Self {
        self.default_date_format = format;
        self
    }

    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
