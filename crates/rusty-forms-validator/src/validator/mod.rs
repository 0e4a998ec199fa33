// File: src/validator/mod.rs
// Purpose: Validator trait, validator kinds and the per-kind tagged union

use crate::constants::{
    REQUIRED_MESSAGE, VALIDATE_DATE, VALIDATE_EMAIL, VALIDATE_NUMBER, VALIDATE_PASSWORD,
    VALIDATE_STRING, VALIDATE_URL, VALIDATE_USERNAME,
};
use crate::error::{FormError, Result};
use crate::field::FieldConfig;
use std::fmt;
use std::str::FromStr;

mod date;
mod email;
mod number;
mod password;
mod text;
mod url;
mod username;

pub use date::{DateConfig, DateValidator};
pub use email::{EmailConfig, EmailValidator};
pub use number::{NumberConfig, NumberValidator};
pub use password::{PasswordConfig, PasswordValidator};
pub use text::{StringConfig, StringValidator};
pub use url::{UrlConfig, UrlValidator};
pub use username::{UsernameConfig, UsernameValidator};

/// Checks single values of type `T`
///
/// `is_valid` takes `&mut self` so a validator can remember why the last value
/// failed; [`message`](Validator::message) exposes that reason.
pub trait Validator<T: ?Sized> {
    fn is_valid(&mut self, value: &T) -> bool;

    /// Reason the most recent `is_valid` call failed, if it did
    fn message(&self) -> Option<&str> {
        None
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    fn is_valid(&mut self, value: &T) -> bool {
        (**self).is_valid(value)
    }

    fn message(&self) -> Option<&str> {
        (**self).message()
    }
}

/// Adapts a `Fn(&T) -> Result<(), String>` rule into a [`Validator`]
///
/// ```
/// use rusty_forms_validator::{Check, Validator};
///
/// let mut no_spaces = Check::new(|v: &str| {
///     if v.contains(' ') { Err("No spaces allowed".to_string()) } else { Ok(()) }
/// });
/// assert!(!no_spaces.is_valid("a b"));
/// assert_eq!(no_spaces.message(), Some("No spaces allowed"));
/// ```
pub struct Check<F> {
    rule: F,
    last_error: Option<String>,
}

impl<F> Check<F> {
    pub fn new(rule: F) -> Self {
        Self {
            rule,
            last_error: None,
        }
    }
}

impl<T: ?Sized, F> Validator<T> for Check<F>
where
    F: Fn(&T) -> std::result::Result<(), String>,
{
    fn is_valid(&mut self, value: &T) -> bool {
        self.last_error = (self.rule)(value).err();
        self.last_error.is_none()
    }

    fn message(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl<F> fmt::Debug for Check<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}

/// The built-in validator kinds, one per reference name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValidatorKind {
    Date,
    Email,
    String,
    Username,
    Password,
    Url,
    Number,
}

impl ValidatorKind {
    pub const ALL: [ValidatorKind; 7] = [
        ValidatorKind::Date,
        ValidatorKind::Email,
        ValidatorKind::String,
        ValidatorKind::Username,
        ValidatorKind::Password,
        ValidatorKind::Url,
        ValidatorKind::Number,
    ];

    /// Name used in field descriptors and form definitions
    pub fn reference_name(self) -> &'static str {
        match self {
            Self::Date => VALIDATE_DATE,
            Self::Email => VALIDATE_EMAIL,
            Self::String => VALIDATE_STRING,
            Self::Username => VALIDATE_USERNAME,
            Self::Password => VALIDATE_PASSWORD,
            Self::Url => VALIDATE_URL,
            Self::Number => VALIDATE_NUMBER,
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reference_name())
    }
}

impl FromStr for ValidatorKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.reference_name() == s)
            .ok_or_else(|| FormError::unknown_kind(s))
    }
}

/// A configured-per-use validator of any built-in kind
///
/// Call [`configure`](FieldValidator::configure) before every
/// [`is_valid`](Validator::is_valid): configuring replaces the whole typed
/// config, so nothing set for one field leaks into the next field that shares
/// the instance.
#[derive(Debug)]
pub enum FieldValidator {
    Date(DateValidator),
    Email(EmailValidator),
    String(StringValidator),
    Username(UsernameValidator),
    Password(PasswordValidator),
    Url(UrlValidator),
    Number(NumberValidator),
}

impl FieldValidator {
    /// Fresh, default-configured validator for `kind`
    pub fn for_kind(kind: ValidatorKind) -> Self {
        match kind {
            ValidatorKind::Date => Self::Date(DateValidator::default()),
            ValidatorKind::Email => Self::Email(EmailValidator::default()),
            ValidatorKind::String => Self::String(StringValidator::default()),
            ValidatorKind::Username => Self::Username(UsernameValidator::default()),
            ValidatorKind::Password => Self::Password(PasswordValidator::default()),
            ValidatorKind::Url => Self::Url(UrlValidator::default()),
            ValidatorKind::Number => Self::Number(NumberValidator::default()),
        }
    }

    pub fn kind(&self) -> ValidatorKind {
        match self {
            Self::Date(_) => ValidatorKind::Date,
            Self::Email(_) => ValidatorKind::Email,
            Self::String(_) => ValidatorKind::String,
            Self::Username(_) => ValidatorKind::Username,
            Self::Password(_) => ValidatorKind::Password,
            Self::Url(_) => ValidatorKind::Url,
            Self::Number(_) => ValidatorKind::Number,
        }
    }

    /// Replaces the current config with one built from `config`
    pub fn configure(&mut self, config: &FieldConfig) -> Result<()> {
        let kind = self.kind();
        let applied = match self {
            Self::Date(v) => v.configure(config),
            Self::Email(v) => v.configure(config),
            Self::String(v) => v.configure(config),
            Self::Username(v) => v.configure(config),
            Self::Password(v) => v.configure(config),
            Self::Url(v) => v.configure(config),
            Self::Number(v) => v.configure(config),
        };
        applied.map_err(|source| {
            tracing::warn!(validator = %kind, error = %source, "rejected field config");
            FormError::invalid_config(kind, source)
        })
    }

    fn inner(&self) -> &dyn Validator<str> {
        match self {
            Self::Date(v) => v,
            Self::Email(v) => v,
            Self::String(v) => v,
            Self::Username(v) => v,
            Self::Password(v) => v,
            Self::Url(v) => v,
            Self::Number(v) => v,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Validator<str> {
        match self {
            Self::Date(v) => v,
            Self::Email(v) => v,
            Self::String(v) => v,
            Self::Username(v) => v,
            Self::Password(v) => v,
            Self::Url(v) => v,
            Self::Number(v) => v,
        }
    }
}

impl Validator<str> for FieldValidator {
    fn is_valid(&mut self, value: &str) -> bool {
        self.inner_mut().is_valid(value)
    }

    fn message(&self) -> Option<&str> {
        self.inner().message()
    }
}

/// Logs config keys the kind does not read
fn warn_unknown_keys(kind: ValidatorKind, config: &FieldConfig, known: &[&str]) {
    for key in config.keys().filter(|key| !known.contains(key)) {
        tracing::warn!(validator = %kind, key, "ignoring unknown config key");
    }
}

/// Handles empty input for every kind
///
/// Returns `Some(verdict)` when the value is blank and no further rule should
/// run, `None` when there is content to check.
fn check_presence(value: &str, required: bool, last_error: &mut Option<String>) -> Option<bool> {
    if !value.trim().is_empty() {
        return None;
    }
    if required {
        *last_error = Some(REQUIRED_MESSAGE.to_string());
        Some(false)
    } else {
        *last_error = None;
        Some(true)
    }
}

/// Stores the outcome of a rule in `last_error` and returns the verdict
fn record(outcome: std::result::Result<(), String>, last_error: &mut Option<String>) -> bool {
    *last_error = outcome.err();
    last_error.is_none()
}
