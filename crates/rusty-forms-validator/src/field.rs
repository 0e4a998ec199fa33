// File: src/field.rs
// Purpose: Field descriptors and their string-keyed validator config

use crate::error::ConfigValueError;
use crate::ui::UiField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Validator-specific settings for one field, e.g. `min_length = "3"`
///
/// Keys are unique. Values are kept as strings; each validator kind parses the
/// keys it understands into its own typed config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, ConfigScalar>", into = "BTreeMap<String, String>")]
pub struct FieldConfig {
    entries: BTreeMap<String, String>,
}

/// Scalar accepted in a TOML `config` table
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ConfigScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    List(Vec<String>),
}

impl From<ConfigScalar> for String {
    fn from(scalar: ConfigScalar) -> Self {
        match scalar {
            ConfigScalar::Text(s) => s,
            ConfigScalar::Integer(i) => i.to_string(),
            ConfigScalar::Float(f) => f.to_string(),
            ConfigScalar::Flag(b) => b.to_string(),
            ConfigScalar::List(items) => items.join(","),
        }
    }
}

impl From<BTreeMap<String, ConfigScalar>> for FieldConfig {
    fn from(map: BTreeMap<String, ConfigScalar>) -> Self {
        Self {
            entries: map.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl From<FieldConfig> for BTreeMap<String, String> {
    fn from(config: FieldConfig) -> Self {
        config.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated key replaces the earlier value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses `key` with `FromStr`; absent keys yield `Ok(None)`
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, ConfigValueError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| ConfigValueError::new(key, raw, e)),
        }
    }

    /// Reads a boolean flag, accepting true/false, yes/no, on/off and 1/0
    pub fn flag(&self, key: &str, default: bool) -> Result<bool, ConfigValueError> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(ConfigValueError::new(key, raw, "expected true or false")),
        }
    }

    /// Reads a comma separated list, dropping blank items
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Describes one form field to validate
///
/// The UI field is borrowed: the widget belongs to the caller and outlives the
/// descriptor.
#[derive(Clone)]
pub struct FieldDescriptor<'a> {
    /// Which validator kind checks this field, e.g. `validateEmail`
    pub validator_reference_name: String,
    pub ui_field: &'a dyn UiField,
    pub config: FieldConfig,
    /// Key into the message catalog; absent means the fallback message
    pub message_locale_key: Option<String>,
    /// Style class applied to the widget while the field is invalid
    pub error_style_name: Option<String>,
}

impl<'a> FieldDescriptor<'a> {
    pub fn new(validator_reference_name: impl Into<String>, ui_field: &'a dyn UiField) -> Self {
        Self {
            validator_reference_name: validator_reference_name.into(),
            ui_field,
            config: FieldConfig::default(),
            message_locale_key: None,
            error_style_name: None,
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_locale_key = Some(key.into());
        self
    }

    pub fn with_error_style(mut self, style: impl Into<String>) -> Self {
        self.error_style_name = Some(style.into());
        self
    }
}

impl fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("validator_reference_name", &self.validator_reference_name)
            .field("config", &self.config)
            .field("message_locale_key", &self.message_locale_key)
            .field("error_style_name", &self.error_style_name)
            .finish_non_exhaustive()
    }
}
