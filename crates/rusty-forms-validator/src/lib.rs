//! # rusty-forms-validator
//!
//! Field validation for client-side forms.
//!
//! A [`FormValidator`] holds an ordered list of [`FieldDescriptor`]s. Each
//! descriptor names a validator kind (`validateEmail`, `validateString`, ...),
//! borrows the UI field to read from and carries the validator config, an
//! optional message locale key and an optional error style. On submit,
//! [`FormValidator::do_validation`] checks every field, styles the failing
//! ones and returns the message of the first failure.
//!
//! ```rust
//! use rusty_forms_validator::{FieldConfig, FormValidator, LocaleCatalog, TextField};
//!
//! let username = TextField::new("al");
//! let email = TextField::new("al@example.com");
//!
//! let catalog = LocaleCatalog::new("en")
//!     .with_message("username.invalid", "Pick a username of 3 to 20 characters");
//!
//! let mut form = FormValidator::new().with_catalog(catalog);
//! form.add_rule_with_style("validateUsername", &username, FieldConfig::new(), "username.invalid", "err")
//!     .add_rule_with_style("validateEmail", &email, FieldConfig::new(), "email.invalid", "err");
//!
//! let message = form.do_validation().unwrap();
//! assert_eq!(message.as_deref(), Some("Pick a username of 3 to 20 characters"));
//! assert!(username.has_style("err"));
//! assert!(!email.has_style("err"));
//! ```
//!
//! ## Layout
//!
//! - [`validator`] - the [`Validator`] trait, [`ValidatorKind`] and the typed
//!   per-kind validators
//! - [`chain`] - [`ValidatorChain`], AND-composition that runs every member
//! - [`registry`] - [`ValidatorRegistry`], one cached instance per kind
//! - [`form`] - [`FormValidator`] orchestration
//! - [`config`] - settings and TOML form definitions
//! - [`locale`] - message catalogs
//!
//! Value predicates live in the `rusty-forms-rules` crate.

pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod form;
pub mod locale;
pub mod registry;
pub mod ui;
pub mod validator;

pub use chain::ValidatorChain;
pub use config::{FieldDefinition, FormDefinition, ValidationSettings};
pub use error::{ConfigValueError, FormError};
pub use field::{FieldConfig, FieldDescriptor};
pub use form::{FieldFailure, FormValidator, MessageSource};
pub use locale::{LocaleCatalog, MessageCatalog, NoCatalog};
pub use registry::{SharedValidator, ValidatorConstructor, ValidatorRegistry};
pub use ui::{TextField, UiField};
pub use validator::{Check, FieldValidator, Validator, ValidatorKind};
