//! `validateEmail`

use super::{check_presence, record, warn_unknown_keys, Validator, ValidatorKind};
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "allow_public_domains", "blocked_domains"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub required: bool,
    /// Accept gmail.com and friends
    pub allow_public_domains: bool,
    pub blocked_domains: Vec<String>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            required: false,
            allow_public_domains: true,
            blocked_domains: Vec::new(),
        }
    }
}

impl EmailConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        Ok(Self {
            required: config.flag("required", false)?,
            allow_public_domains: config.flag("allow_public_domains", true)?,
            blocked_domains: config.list("blocked_domains"),
        })
    }
}

#[derive(Debug, Default)]
pub struct EmailValidator {
    config: EmailConfig,
    last_error: Option<String>,
}

impl EmailValidator {
    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Email, config, KNOWN_KEYS);
        self.config = EmailConfig::from_field_config(config)?;
        self.last_error = None;
        Ok(())
    }

    fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        if !rules::is_valid_email(value) {
            return Err("Invalid email address".to_string());
        }
        if !self.config.allow_public_domains && rules::is_public_domain(value) {
            return Err("Public email domains are not allowed".to_string());
        }
        if rules::is_blocked_domain(value, &self.config.blocked_domains) {
            return Err("This email domain is blocked".to_string());
        }
        Ok(())
    }
}

impl Validator<str> for EmailValidator {
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
