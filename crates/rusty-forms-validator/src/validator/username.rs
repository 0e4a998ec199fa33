//! `validateUsername`

use super::{check_presence, warn_unknown_keys, Check, Validator, ValidatorKind};
use crate::chain::ValidatorChain;
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "min_length", "max_length", "reserved"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsernameConfig {
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    /// Names rejected on top of the built-in reserved list
    pub reserved: Vec<String>,
}

impl Default for UsernameConfig {
    fn default() -> Self {
        Self {
            required: false,
            min_length: 3,
            max_length: 20,
            reserved: Vec::new(),
        }
    }
}

impl UsernameConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        let defaults = Self::default();
        let parsed = Self {
            required: config.flag("required", defaults.required)?,
            min_length: config.parse("min_length")?.unwrap_or(defaults.min_length),
            max_length: config.parse("max_length")?.unwrap_or(defaults.max_length),
            reserved: config.list("reserved"),
        };

        if parsed.min_length > parsed.max_length {
            return Err(ConfigValueError::new(
                "min_length",
                parsed.min_length.to_string(),
                format!("greater than max_length {}", parsed.max_length),
            ));
        }

        Ok(parsed)
    }

    fn rules(&self) -> ValidatorChain<str> {
        let (min, max) = (self.min_length, self.max_length);
        let reserved = self.reserved.clone();

        let mut chain = ValidatorChain::<str>::new();
        chain
            .add(Check::new(move |v: &str| rules::validate_username_shape(v, min, max)))
            .add(Check::new(move |v: &str| {
                if rules::is_reserved(v, &reserved) {
                    Err(format!("The username '{}' is not available", v))
                } else {
                    Ok(())
                }
            }));
        chain
    }
}

#[derive(Debug)]
pub struct UsernameValidator {
    config: UsernameConfig,
    rules: ValidatorChain<str>,
    last_error: Option<String>,
}

impl Default for UsernameValidator {
    fn default() -> Self {
        let config = UsernameConfig::default();
        Self {
            rules: config.rules(),
            config,
            last_error: None,
        }
    }
}

impl UsernameValidator {
    pub fn config(&self) -> &UsernameConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::Username, config, KNOWN_KEYS);
        let parsed = UsernameConfig::from_field_config(config)?;
        self.rules = parsed.rules();
        self.config = parsed;
        self.last_error = None;
        Ok(())
    }
}

impl Validator<str> for UsernameValidator {
    fn is_valid(&mut self, value: &str) -> bool {
        if let Some(verdict) = check_presence(value, self.config.required, &mut self.last_error) {
            return verdict;
        }
        let valid = self.rules.is_valid(value.trim());
        self.last_error = self.rules.message().map(str::to_string);
        valid
    }

    fn message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
