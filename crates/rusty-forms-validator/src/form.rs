// File: src/form.rs
// Purpose: Form-level validation pass over registered field descriptors

use crate::config::ValidationSettings;
use crate::error::Result;
use crate::field::{FieldConfig, FieldDescriptor};
use crate::locale::{MessageCatalog, NoCatalog};
use crate::registry::ValidatorRegistry;
use crate::ui::UiField;
use crate::validator::Validator;

/// Where a failure message came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSource {
    /// Looked up through the field's message locale key
    Localized,
    /// The key was absent or the catalog had no entry for it
    Fallback,
}

/// One field that failed during the last validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Position of the field in insertion order
    pub index: usize,
    pub reference_name: String,
    /// User-facing message (localized or fallback)
    pub message: String,
    /// The validator's own reason, e.g. "Must be at least 3 characters"
    pub detail: Option<String>,
    pub source: MessageSource,
}

/// Validates every registered field of one form
///
/// Fields are checked in insertion order. Each pass styles every failing
/// field but reports a single message, the one of the first failing field,
/// which suits inline forms that show one error at a time.
///
/// ```
/// use rusty_forms_validator::{FieldConfig, FormValidator, TextField};
///
/// let email = TextField::new("bad@");
/// let mut form = FormValidator::new();
/// form.add_rule_with_style("validateEmail", &email, FieldConfig::new(), "email.invalid", "err");
///
/// assert!(form.do_validation().unwrap().is_some());
/// assert!(email.has_style("err"));
///
/// email.set_value("good@example.com");
/// assert_eq!(form.do_validation().unwrap(), None);
/// assert!(!email.has_style("err"));
/// ```
pub struct FormValidator<'a> {
    fields: Vec<FieldDescriptor<'a>>,
    registry: ValidatorRegistry,
    catalog: Box<dyn MessageCatalog + 'a>,
    settings: ValidationSettings,
    // (field index, style) pairs applied by the previous pass
    applied_styles: Vec<(usize, String)>,
    failures: Vec<FieldFailure>,
}

impl<'a> FormValidator<'a> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            registry: ValidatorRegistry::with_defaults(),
            catalog: Box::new(NoCatalog),
            settings: ValidationSettings::default(),
            applied_styles: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn with_catalog(mut self, catalog: impl MessageCatalog + 'a) -> Self {
        self.catalog = Box::new(catalog);
        self
    }

    pub fn with_settings(mut self, settings: ValidationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the validator registry, e.g. one with a custom constructor set
    pub fn with_registry(mut self, registry: ValidatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn settings(&self) -> &ValidationSettings {
        &self.settings
    }

    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    pub fn fields(&self) -> &[FieldDescriptor<'a>] {
        &self.fields
    }

    /// Appends a field; it is validated after every field added before it
    pub fn add_field(&mut self, descriptor: FieldDescriptor<'a>) -> &mut Self {
        tracing::trace!(
            validator = %descriptor.validator_reference_name,
            position = self.fields.len(),
            "field added"
        );
        self.fields.push(descriptor);
        self
    }

    /// Adds a field with no message key (fallback message) and no error style
    pub fn add_rule(
        &mut self,
        reference_name: impl Into<String>,
        ui_field: &'a dyn UiField,
        config: FieldConfig,
    ) -> &mut Self {
        self.add_field(FieldDescriptor::new(reference_name, ui_field).with_config(config))
    }

    /// Adds a field with a message key and no error style
    pub fn add_rule_with_message(
        &mut self,
        reference_name: impl Into<String>,
        ui_field: &'a dyn UiField,
        config: FieldConfig,
        message_locale_key: impl Into<String>,
    ) -> &mut Self {
        self.add_field(
            FieldDescriptor::new(reference_name, ui_field)
                .with_config(config)
                .with_message_key(message_locale_key),
        )
    }

    /// Adds a field with a message key and an error style
    pub fn add_rule_with_style(
        &mut self,
        reference_name: impl Into<String>,
        ui_field: &'a dyn UiField,
        config: FieldConfig,
        message_locale_key: impl Into<String>,
        error_style_name: impl Into<String>,
    ) -> &mut Self {
        self.add_field(
            FieldDescriptor::new(reference_name, ui_field)
                .with_config(config)
                .with_message_key(message_locale_key)
                .with_error_style(error_style_name),
        )
    }

    /// Runs one validation pass over every field
    ///
    /// Clears the error styles of the previous pass, then checks each field in
    /// insertion order, styling every failure. Returns the message of the first
    /// failing field, or `None` when the whole form is valid.
    ///
    /// Fails only on configuration mistakes: an unknown validator reference
    /// name or a config the validator cannot use. Such a failure stops the
    /// pass at the offending field and undoes the styles and failures the
    /// pass had already recorded.
    #[tracing::instrument(level = "debug", skip(self), fields(fields = self.fields.len()))]
    pub fn do_validation(&mut self) -> Result<Option<String>> {
        self.clear_styles();
        self.failures.clear();

        if let Err(err) = self.check_fields() {
            self.clear_styles();
            self.failures.clear();
            return Err(err);
        }

        Ok(self.failures.first().map(|failure| failure.message.clone()))
    }

    fn check_fields(&mut self) -> Result<()> {
        for (index, field) in self.fields.iter().enumerate() {
            let value = field.ui_field.value();
            let shared = self.registry.get(&field.validator_reference_name)?;
            let mut validator = shared.borrow_mut();

            // configure and validate back to back: the instance is shared by
            // every field of the same kind
            validator.configure(&field.config)?;
            if validator.is_valid(value.as_str()) {
                continue;
            }

            let style = field
                .error_style_name
                .as_deref()
                .or(self.settings.default_error_style.as_deref());
            if let Some(style) = style {
                field.ui_field.add_style(style);
                self.applied_styles.push((index, style.to_string()));
            }

            let (message, source) =
                resolve_message(self.catalog.as_ref(), &self.settings, field.message_locale_key.as_deref());
            tracing::debug!(
                index,
                validator = %field.validator_reference_name,
                detail = validator.message().unwrap_or_default(),
                "field failed validation"
            );
            self.failures.push(FieldFailure {
                index,
                reference_name: field.validator_reference_name.clone(),
                message,
                detail: validator.message().map(str::to_string),
                source,
            });
        }

        Ok(())
    }

    /// Every failure recorded by the most recent pass, in field order
    pub fn last_failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Removes every error style this validator has applied
    pub fn clear_styles(&mut self) {
        for (index, style) in self.applied_styles.drain(..) {
            if let Some(field) = self.fields.get(index) {
                field.ui_field.remove_style(&style);
            }
        }
    }
}

impl Default for FormValidator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormValidator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.fields)
            .field("registry", &self.registry)
            .field("settings", &self.settings)
            .field("failures", &self.failures)
            .finish_non_exhaustive()
    }
}

fn resolve_message(
    catalog: &dyn MessageCatalog,
    settings: &ValidationSettings,
    key: Option<&str>,
) -> (String, MessageSource) {
    match key.map(|key| (key, catalog.lookup(key))) {
        Some((_, Some(text))) => (text, MessageSource::Localized),
        Some((key, None)) => {
            tracing::debug!(key, "no message for locale key, using fallback");
            (settings.fallback_message.clone(), MessageSource::Fallback)
        }
        None => (settings.fallback_message.clone(), MessageSource::Fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_FALLBACK_MESSAGE;
    use crate::error::FormError;
    use crate::locale::LocaleCatalog;
    use crate::ui::TextField;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_form_is_valid() {
        let mut form = FormValidator::new();
        assert_eq!(form.do_validation(), Ok(None));
        assert!(form.last_failures().is_empty());
    }

    #[test]
    fn test_overloads_build_descriptors() {
        let field = TextField::new("");
        let mut form = FormValidator::new();
        form.add_rule("validateString", &field, FieldConfig::new())
            .add_rule_with_message("validateEmail", &field, FieldConfig::new(), "email.invalid")
            .add_rule_with_style("validateDate", &field, FieldConfig::new(), "date.invalid", "err");

        let fields = form.fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].message_locale_key, None);
        assert_eq!(fields[0].error_style_name, None);
        assert_eq!(fields[1].message_locale_key.as_deref(), Some("email.invalid"));
        assert_eq!(fields[1].error_style_name, None);
        assert_eq!(fields[2].validator_reference_name, "validateDate");
        assert_eq!(fields[2].error_style_name.as_deref(), Some("err"));
    }

    #[test]
    fn test_localized_and_fallback_messages() {
        let first = TextField::new("x");
        let second = TextField::new("y");
        let third = TextField::new("z");
        let catalog = LocaleCatalog::new("en").with_message("name.short", "Name is too short");

        let config = FieldConfig::new().with("min_length", "2");
        let mut form = FormValidator::new().with_catalog(catalog);
        form.add_rule_with_message("validateString", &first, config.clone(), "name.short")
            .add_rule_with_message("validateString", &second, config.clone(), "missing.key")
            .add_rule("validateString", &third, config);

        assert_eq!(form.do_validation(), Ok(Some("Name is too short".to_string())));

        let failures = form.last_failures();
        assert_eq!(failures.len(), 3);
        assert_eq!(failures[0].source, MessageSource::Localized);
        assert_eq!(failures[0].detail.as_deref(), Some("Must be at least 2 characters"));
        assert_eq!(failures[1].message, DEFAULT_FALLBACK_MESSAGE);
        assert_eq!(failures[1].source, MessageSource::Fallback);
        assert_eq!(failures[2].source, MessageSource::Fallback);
    }

    #[test]
    fn test_unknown_kind_aborts_pass() {
        let field = TextField::new("value");
        let mut form = FormValidator::new();
        form.add_rule("validateColour", &field, FieldConfig::new());
        assert_eq!(
            form.do_validation(),
            Err(FormError::unknown_kind("validateColour"))
        );
    }

    #[test]
    fn test_aborted_pass_leaves_no_styles_or_failures() {
        let bad = TextField::new("bad@");
        let other = TextField::new("value");
        let mut form = FormValidator::new();
        form.add_rule_with_style("validateEmail", &bad, FieldConfig::new(), "email.invalid", "err")
            .add_rule("validateColour", &other, FieldConfig::new());

        assert_eq!(
            form.do_validation(),
            Err(FormError::unknown_kind("validateColour"))
        );
        assert!(bad.styles().is_empty());
        assert!(form.last_failures().is_empty());
    }

    #[test]
    fn test_aborted_pass_clears_previous_pass_styles() {
        let age = TextField::new("abc");
        let mut form = FormValidator::new();
        form.add_rule_with_style(
            "validateNumber",
            &age,
            FieldConfig::new().with("min", "18"),
            "age.invalid",
            "err",
        );
        assert!(form.do_validation().unwrap().is_some());
        assert!(age.has_style("err"));

        form.fields[0].config = FieldConfig::new().with("min", "eighteen");
        assert!(matches!(
            form.do_validation(),
            Err(FormError::InvalidConfig { .. })
        ));
        assert!(!age.has_style("err"));
        assert!(form.last_failures().is_empty());
    }

    #[test]
    fn test_default_error_style_from_settings() {
        let field = TextField::new("bad@");
        let settings = ValidationSettings {
            default_error_style: Some("invalid".to_string()),
            ..ValidationSettings::default()
        };
        let mut form = FormValidator::new().with_settings(settings);
        form.add_rule("validateEmail", &field, FieldConfig::new());

        assert!(form.do_validation().unwrap().is_some());
        assert!(field.has_style("invalid"));

        form.clear_styles();
        assert!(!field.has_style("invalid"));
    }

    #[test]
    fn test_config_is_reset_between_fields_of_same_kind() {
        let strict = TextField::new("abcdef");
        let loose = TextField::new("abcdef");
        let mut form = FormValidator::new();
        form.add_rule_with_style(
            "validateString",
            &strict,
            FieldConfig::new().with("max_length", "3"),
            "too.long",
            "err",
        )
        .add_rule_with_style("validateString", &loose, FieldConfig::new(), "too.long", "err");

        assert!(form.do_validation().unwrap().is_some());
        assert!(strict.has_style("err"));
        assert!(!loose.has_style("err"));
        assert_eq!(form.last_failures().len(), 1);
        assert_eq!(form.registry().cached_len(), 1);
    }
}
