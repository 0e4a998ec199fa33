//! `validatePassword`

use super::{check_presence, record, warn_unknown_keys, Validator, ValidatorKind};
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules::{self as rules, PasswordStrength};

const KNOWN_KEYS: &[&str] = &["required", "strength"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordConfig {
    pub required: bool,
    pub strength: PasswordStrength,
}

impl PasswordConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        Ok(Self {
            required: config.flag("required", false)?,
            strength: config.parse("strength")?.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default)]
pub struct PasswordValidator {
    config: PasswordConfig,
    last_error: Option<String>,
}

impl PasswordValidator {
    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Password, config, KNOWN_KEYS);
        self.config = PasswordConfig::from_field_config(config)?;
        self.last_error = None;
        Ok(())
    }
}

impl Validator<str> for PasswordValidator {
    fn is_valid(&mut self, value: &str) -> bool {
        // Passwords are not trimmed: leading spaces are part of the secret
        if value.is_empty() {
            return check_presence(value, self.config.required, &mut self.last_error)
                .unwrap_or(true);
        }
        let outcome = rules::validate_password(value, self.config.strength);
        record(outcome, &mut self.last_error)
    }

    fn message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
