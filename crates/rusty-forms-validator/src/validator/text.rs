//! `validateString`: free text with optional length limits and a pattern

use super::{check_presence, warn_unknown_keys, Check, Validator, ValidatorKind};
use crate::chain::ValidatorChain;
use crate::error::ConfigValueError;
use crate::field::FieldConfig;
use rusty_forms_rules as rules;

const KNOWN_KEYS: &[&str] = &["required", "min_length", "max_length", "pattern"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringConfig {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regex the whole value must match
    pub pattern: Option<String>,
}

impl StringConfig {
    pub fn from_field_config(config: &FieldConfig) -> Result<Self, ConfigValueError> {
        let parsed = Self {
            required: config.flag("required", false)?,
            min_length: config.parse("min_length")?,
            max_length: config.parse("max_length")?,
            pattern: config.get("pattern").map(str::to_string),
        };

        if let (Some(min), Some(max)) = (parsed.min_length, parsed.max_length) {
            if min > max {
                return Err(ConfigValueError::new(
                    "min_length",
                    min.to_string(),
                    format!("greater than max_length {}", max),
                ));
            }
        }

        Ok(parsed)
    }
}

/// Length and pattern rules run as a [`ValidatorChain`], so the recorded
/// message is the first rule that failed.
#[derive(Debug, Default)]
pub struct StringValidator {
    config: StringConfig,
    rules: ValidatorChain<str>,
    last_error: Option<String>,
}

impl StringValidator {
    pub fn config(&self) -> &StringConfig {
        &self.config
    }

    pub fn configure(&mut self, config: &FieldConfig) -> Result<(), ConfigValueError> {
        warn_unknown_keys(ValidatorKind::String, config, KNOWN_KEYS);
        let parsed = StringConfig::from_field_config(config)?;

        let mut chain = ValidatorChain::<str>::new();
        if let Some(min) = parsed.min_length {
            chain.add(Check::new(move |v: &str| rules::validate_min_length(v, min)));
        }
        if let Some(max) = parsed.max_length {
            chain.add(Check::new(move |v: &str| rules::validate_max_length(v, max)));
        }
        if let Some(pattern) = &parsed.pattern {
            let regex = rules::anchored_pattern(pattern)
                .map_err(|e| ConfigValueError::new("pattern", pattern.as_str(), e))?;
            chain.add(Check::new(move |v: &str| {
                if regex.is_match(v) {
                    Ok(())
                } else {
                    Err("Does not match the expected format".to_string())
                }
            }));
        }

        self.config = parsed;
        self.rules = chain;
        self.last_error = None;
        Ok(())
    }
}

impl Validator<str> for StringValidator {
    fn is_valid(&mut self, value: &str) -> bool {
        if let Some(verdict) = check_presence(value, self.config.required, &mut self.last_error) {
            return verdict;
        }
        let valid = self.rules.is_valid(value);
        self.last_error = self.rules.message().map(str::to_string);
        valid
    }

    fn message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
