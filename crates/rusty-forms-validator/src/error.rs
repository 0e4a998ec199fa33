//! Error types
//!
//! Only configuration mistakes are errors. A value that fails its validator is
//! an ordinary outcome and is reported through [`FieldFailure`](crate::FieldFailure).

use crate::validator::ValidatorKind;
use thiserror::Error;

/// A single config entry that could not be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for '{key}': {reason}")]
pub struct ConfigValueError {
    pub key: String,
    pub value: String,
    pub reason: String,
}

impl ConfigValueError {
    pub fn new(key: impl Into<String>, value: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

/// Hard failures raised while validating a form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The reference name does not match a registered validator kind
    #[error("unknown validator kind '{name}'")]
    UnknownValidatorKind { name: String },

    /// The field config could not be applied to its validator
    #[error("{validator} config rejected: {source}")]
    InvalidConfig {
        validator: ValidatorKind,
        #[source]
        source: ConfigValueError,
    },

    /// A registered constructor built a validator of another kind
    #[error("constructor registered for {expected} built a {actual} validator")]
    KindMismatch {
        expected: ValidatorKind,
        actual: ValidatorKind,
    },
}

impl FormError {
    pub fn unknown_kind(name: impl Into<String>) -> Self {
        Self::UnknownValidatorKind { name: name.into() }
    }

    pub fn invalid_config(validator: ValidatorKind, source: ConfigValueError) -> Self {
        Self::InvalidConfig { validator, source }
    }
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
