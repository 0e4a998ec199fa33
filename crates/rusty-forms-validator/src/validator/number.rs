//! `validateNumber`

use super::{check_presence, record, warn_unknown_keys, Validator, ValidatorKind};
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "min", "max", "integer"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberConfig {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Reject fractional values
    pub integer: bool,
}

impl NumberConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        let bound = |key: &str| -> Result<Option<f64>, ConfigValueError> {
            config
                .get(key)
                .map(|raw| rules::parse_number(raw).map_err(|reason| ConfigValueError::new(key, raw, reason)))
                .transpose()
        };

        let parsed = Self {
            required: config.flag("required", false)?,
            min: bound("min")?,
            max: bound("max")?,
            integer: config.flag("integer", false)?,
        };

        if let (Some(min), Some(max)) = (parsed.min, parsed.max) {
            if min > max {
                return Err(ConfigValueError::new("min", min.to_string(), "greater than max"));
            }
        }

        Ok(parsed)
    }
}

#[derive(Debug, Default)]
pub struct NumberValidator {
    config: NumberConfig,
    last_error: Option<String>,
}

impl NumberValidator {
    pub fn config(&self) -> &NumberConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Number, config, KNOWN_KEYS);
        self.config = NumberConfig::from_field_config(config)?;
        self.last_error = None;
        Ok(())
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let number = rules::parse_number(value)?;
        if self.config.integer {
            rules::validate_integer(number)?;
        }
        rules::validate_range(number, self.config.min, self.config.max)
    }
}

impl Validator<str> for NumberValidator {
    fn is_valid(&mut self, value: &str) -> bool {
        if let Some(verdict) = check_presence(value, self.config.required, &mut self.last_error) {
            return verdict;
        }
        let outcome = self.check(value);
        record(outcome, &mut self.last_error)
    }

    fn message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
