//! Username rules

/// Names nobody may register regardless of form configuration
pub const RESERVED_USERNAMES: &[&str] = &["admin", "administrator", "root", "system", "support"];

/// Checks length and character set of a username
///
/// A username starts with an ASCII letter and continues with ASCII
/// alphanumerics, `_`, `-` or `.`. Length is inclusive on both ends.
pub fn validate_username_shape(value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!("Username must be {} to {} characters", min, max));
    }

    let mut chars = value.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err("Username must start with a letter".to_string());
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) {
        return Err("Username may only contain letters, digits, '_', '-' and '.'".to_string());
    }

    Ok(())
}

/// Checks `value` against the built-in reserved names and `extra` (case-insensitive)
pub fn is_reserved<S: AsRef<str>>(value: &str, extra: &[S]) -> bool {
    RESERVED_USERNAMES.iter().any(|r| r.eq_ignore_ascii_case(value))
        || extra.iter().any(|r| r.as_ref().eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_shape() {
        assert!(validate_username_shape("alice", 3, 20).is_ok());
        assert!(validate_username_shape("a.b-c_9", 3, 20).is_ok());
        assert!(validate_username_shape("al", 3, 20).is_err());
        assert!(validate_username_shape("9lives", 3, 20).is_err());
        assert!(validate_username_shape("bad name", 3, 20).is_err());
        assert!(validate_username_shape("", 0, 20).is_err());
    }

    #[test]
    fn test_reserved() {
        assert!(is_reserved("Admin", &[] as &[&str]));
        assert!(is_reserved("webmaster", &["webmaster"]));
        assert!(!is_reserved("alice", &["webmaster"]));
    }
}
