// File: src/constants.rs
// Purpose: Validator reference names and shared defaults

/// Calendar date in a configurable format
pub const VALIDATE_DATE: &str = "validateDate";
/// Email address
pub const VALIDATE_EMAIL: &str = "validateEmail";
/// Free text with length and pattern limits
pub const VALIDATE_STRING: &str = "validateString";
/// Account name
pub const VALIDATE_USERNAME: &str = "validateUsername";
/// Password strength tier
pub const VALIDATE_PASSWORD: &str = "validatePassword";
/// http(s) URL
pub const VALIDATE_URL: &str = "validateUrl";
/// Number with optional bounds
pub const VALIDATE_NUMBER: &str = "validateNumber";

/// Message shown when a failing field has no locale key, or the key is missing
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Please correct the highlighted field";

/// Detail recorded when an empty value fails a `required` field
pub const REQUIRED_MESSAGE: &str = "This field is required";
