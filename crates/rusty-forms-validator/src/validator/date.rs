//! `validateDate`

use super::{check_presence, record, warn_unknown_keys, Validator, ValidatorKind};
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use chrono::NaiveDate;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "format", "min", "max"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateConfig {
    pub required: bool,
    /// chrono format of the field value; bounds are always ISO `YYYY-MM-DD`
    pub format: String,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            required: false,
            format: rules::DEFAULT_DATE_FORMAT.to_string(),
            min: None,
            max: None,
        }
    }
}

impl DateConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        let bound = |key: &str| -> Result<Option<NaiveDate>, ConfigValueError> {
            config
                .get(key)
                .map(|raw| {
                    rules::parse_date(raw, rules::DEFAULT_DATE_FORMAT)
                        .map_err(|reason| ConfigValueError::new(key, raw, reason))
                })
                .transpose()
        };

        let parsed = Self {
            required: config.flag("required", false)?,
            format: config
                .get("format")
                .unwrap_or(rules::DEFAULT_DATE_FORMAT)
                .to_string(),
            min: bound("min")?,
            max: bound("max")?,
        };

        if let (Some(min), Some(max)) = (parsed.min, parsed.max) {
            if min > max {
                return Err(ConfigValueError::new("min", min.to_string(), "later than max"));
            }
        }

        Ok(parsed)
    }
}

#[derive(Debug, Default)]
pub struct DateValidator {
    config: DateConfig,
    last_error: Option<String>,
}

impl DateValidator {
    pub fn config(&self) -> &DateConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Date, config, KNOWN_KEYS);
        self.config = DateConfig::from_field_config(config)?;
        self.last_error = None;
        Ok(())
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let date = rules::parse_date(value, &self.config.format)?;
        rules::validate_date_between(date, self.config.min, self.config.max)
    }
}

impl Validator<str> for DateValidator {
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
