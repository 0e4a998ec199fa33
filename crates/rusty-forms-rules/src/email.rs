//! Email address rules

/// Free mail providers rejected when a form asks for a work address
pub const PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "aol.com",
    "mail.com",
    "protonmail.com",
    "yandex.com",
    "zoho.com",
];

// Characters a domain may not start or end with
const EDGE_CHARS: &[char] = &['.', '-'];

/// Checks the shape of an email address
///
/// Accepts `local@domain.tld` where:
/// - there is exactly one `@`
/// - the local part is 1..=64 chars of alphanumerics and `._-+`
/// - the domain is 1..=255 chars of alphanumerics, `.` and `-`, contains a dot,
///   does not start or end with `.`/`-` and has no empty labels
/// - the top level label is at least two characters
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.chars().count() > 64 {
        return false;
    }

    if domain.is_empty() || domain.chars().count() > 255 {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'));
    let domain_ok = domain
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-'));
    if !local_ok || !domain_ok {
        return false;
    }

    if domain.starts_with(EDGE_CHARS) || domain.ends_with(EDGE_CHARS) || domain.contains("..") {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.chars().count() >= 2,
        None => false,
    }
}

/// Returns the domain part of an address, if it has one
pub fn email_domain(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Checks if the address belongs to a public mail provider (case-insensitive)
pub fn is_public_domain(email: &str) -> bool {
    email_domain(email)
        .map(|domain| PUBLIC_DOMAINS.iter().any(|d| d.eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}

/// Checks if the address domain appears in `blocked` (case-insensitive)
pub fn is_blocked_domain<S: AsRef<str>>(email: &str, blocked: &[S]) -> bool {
    email_domain(email)
        .map(|domain| blocked.iter().any(|b| b.as_ref().eq_ignore_ascii_case(domain)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("test.user@example.co.uk")]
    #[case("user+tag@example.com")]
    #[case("user_name@example-domain.com")]
    #[case("good@example.com")]
    fn test_valid_emails(#[case] email: &str) {
        assert!(is_valid_email(email));
    }

    #[rstest]
    #[case("")]
    #[case("@")]
    #[case("bad@")]
    #[case("@example.com")]
    #[case("user@@example.com")]
    #[case("user@example")]
    #[case("user@.com")]
    #[case("user@example..com")]
    #[case("user@example.c")]
    #[case("us er@example.com")]
    fn test_invalid_emails(#[case] email: &str) {
        assert!(!is_valid_email(email));
    }

    #[test]
    fn test_public_domains() {
        assert!(is_public_domain("user@gmail.com"));
        assert!(is_public_domain("user@GMAIL.COM"));
        assert!(!is_public_domain("user@company.com"));
        assert!(!is_public_domain("no-at-sign"));
    }

    #[test]
    fn test_blocked_domains() {
        let blocked = ["spam.com", "Blocked.net"];
        assert!(is_blocked_domain("user@spam.com", &blocked));
        assert!(is_blocked_domain("user@blocked.NET", &blocked));
        assert!(!is_blocked_domain("user@allowed.com", &blocked));
    }
}
