// File: src/config.rs
// Purpose: Validation settings and TOML form definitions

use crate::constants::DEFAULT_FALLBACK_MESSAGE;
use crate::field::{FieldConfig, FieldDescriptor};
use crate::form::FormValidator;
use crate::ui::UiField;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form-wide validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Message for failing fields without a usable locale key
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Style applied to failing fields that name no style of their own
    #[serde(default)]
    pub default_error_style: Option<String>,
}

fn default_fallback_message() -> String {
    DEFAULT_FALLBACK_MESSAGE.to_string()
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            fallback_message: default_fallback_message(),
            default_error_style: None,
        }
    }
}

/// One `[[fields]]` entry of a form definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Name of the UI field, resolved by the host when building the form
    pub name: String,

    /// Validator reference name, e.g. `validateEmail`
    pub validator: String,

    #[serde(default)]
    pub config: FieldConfig,

    #[serde(default)]
    pub message_key: Option<String>,

    #[serde(default)]
    pub error_style: Option<String>,
}

/// A whole form described in TOML:
///
/// ```toml
/// [settings]
/// fallback_message = "Please check this field"
///
/// [[fields]]
/// name = "email"
/// validator = "validateEmail"
/// message_key = "email.invalid"
/// error_style = "err"
/// config = { required = true, allow_public_domains = false }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub settings: ValidationSettings,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // An empty definition is a form without fields
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(content).context("Failed to parse form definition")
    }

    /// Load a form definition; a missing or empty file yields an empty form
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "form definition not found, using empty form");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form definition: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load form definition: {:?}", path))
    }

    /// Builds a form validator, binding each field name to a UI field via `resolve`
    ///
    /// Fails when a name cannot be resolved. Validator names are checked at
    /// validation time, like fields added by hand.
    pub fn build<'a, F>(&self, mut resolve: F) -> Result<FormValidator<'a>>
    where
        F: FnMut(&str) -> Option<&'a dyn UiField>,
    {
        let mut form = FormValidator::new().with_settings(self.settings.clone());

        for definition in &self.fields {
            let Some(ui_field) = resolve(&definition.name) else {
                bail!("No UI field named '{}' for form definition", definition.name);
            };

            let mut descriptor = FieldDescriptor::new(definition.validator.as_str(), ui_field)
                .with_config(definition.config.clone());
            if let Some(key) = &definition.message_key {
                descriptor = descriptor.with_message_key(key.as_str());
            }
            if let Some(style) = &definition.error_style {
                descriptor = descriptor.with_error_style(style.as_str());
            }
            form.add_field(descriptor);
        }

        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::TextField;

    #[test]
    fn test_default_settings() {
        let settings = ValidationSettings::default();
        assert_eq!(settings.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(settings.default_error_style, None);
    }

    #[test]
    fn test_empty_definition() {
        let definition = FormDefinition::from_toml_str("").unwrap();
        assert!(definition.fields.is_empty());
        assert_eq!(definition.settings, ValidationSettings::default());
    }

    #[test]
    fn test_parse_definition() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [settings]
            default_error_style = "invalid"

            [[fields]]
            name = "username"
            validator = "validateUsername"
            config = { min_length = 4, reserved = ["bob"] }

            [[fields]]
            name = "email"
            validator = "validateEmail"
            message_key = "email.invalid"
            error_style = "err"
            "#,
        )
        .unwrap();

        assert_eq!(definition.settings.fallback_message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(definition.settings.default_error_style.as_deref(), Some("invalid"));
        assert_eq!(definition.fields.len(), 2);
        assert_eq!(definition.fields[0].config.get("min_length"), Some("4"));
        assert_eq!(definition.fields[0].config.get("reserved"), Some("bob"));
        assert_eq!(definition.fields[1].error_style.as_deref(), Some("err"));
    }

    #[test]
    fn test_build_resolves_fields() {
        let definition = FormDefinition::from_toml_str(
            r#"
            [[fields]]
            name = "email"
            validator = "validateEmail"
            message_key = "email.invalid"
            "#,
        )
        .unwrap();

        let email = TextField::new("good@example.com");
        let form = definition
            .build(|name| (name == "email").then_some(&email as &dyn UiField))
            .unwrap();
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.fields()[0].message_locale_key.as_deref(), Some("email.invalid"));

        let err = definition.build(|_| None).unwrap_err();
        assert!(err.to_string().contains("email"));
    }
}
