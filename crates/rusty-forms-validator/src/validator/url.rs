//! `validateUrl`

use super::{check_presence, record, warn_unknown_keys, Validator, ValidatorKind};
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "https_only"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlConfig {
    pub required: bool,
    pub https_only: bool,
}

impl UrlConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        Ok(Self {
            required: config.flag("required", false)?,
            https_only: config.flag("https_only", false)?,
        })
    }
}

#[derive(Debug, Default)]
pub struct UrlValidator {
    config: UrlConfig,
    last_error: Option<String>,
}

impl UrlValidator {
    pub fn config(&self) -> &UrlConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Url, config, KNOWN_KEYS);
        self.config = UrlConfig::from_field_config(config)?;
        self.last_error = None;
        Ok(())
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if !rules::is_valid_url(value) {
            return Err("Invalid URL".to_string());
        }
        if self.config.https_only && !value.starts_with("https://") {
            return Err("URL must use https".to_string());
        }
        Ok(())
    }
}

impl Validator<str> for UrlValidator {
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
