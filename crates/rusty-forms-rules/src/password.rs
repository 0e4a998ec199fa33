//! Password strength rules

use std::fmt;
use std::str::FromStr;

const SPECIAL_CHARS: &str = "@$!%*?&#-_+=.,";

/// Password strength tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStrength {
    /// 6+ characters
    #[default]
    Basic,
    /// 8+ chars with uppercase, lowercase and digit
    Medium,
    /// 8+ chars with uppercase, lowercase, digit and special character
    Strong,
}

impl FromStr for PasswordStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "medium" => Ok(Self::Medium),
            "strong" => Ok(Self::Strong),
            other => Err(format!(
                "unknown password strength '{}' (expected basic, medium or strong)",
                other
            )),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Basic => "basic",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Validates `password` against a strength tier
///
/// The first unmet requirement is reported.
pub fn validate_password(password: &str, strength: PasswordStrength) -> Result<(), String> {
    let len = password.chars().count();

    if strength == PasswordStrength::Basic {
        return if len >= 6 {
            Ok(())
        } else {
            Err("Password must be at least 6 characters".to_string())
        };
    }

    if len < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(char::is_uppercase) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(char::is_lowercase) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }
    if strength == PasswordStrength::Strong && !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(format!(
            "Password must contain at least one special character ({})",
            SPECIAL_CHARS
        ));
    }

    Ok(())
}
