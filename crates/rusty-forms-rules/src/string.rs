//! String rules
//!
//! Lengths are counted in `char`s, not bytes, so "héllo" is five long.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

// Compiled patterns, keyed by source. Field configs repeat the same handful of
// patterns on every submit; the cache is emptied once it holds
// PATTERN_CACHE_LIMIT entries so generated patterns cannot grow it forever.
const PATTERN_CACHE_LIMIT: usize = 256;

static PATTERN_CACHE: Lazy<Mutex<HashMap<String, Regex>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s/]*\.[^\s/]+(/[^\s]*)?$").expect("static url regex")
});

pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Compiles `pattern`, reusing an earlier compilation when there is one
///
/// The process-wide cache is bounded: when it is full it is emptied before
/// the new pattern is stored.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERN_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }
    let regex = Regex::new(pattern)?;
    if cache.len() >= PATTERN_CACHE_LIMIT {
        cache.clear();
    }
    cache.insert(pattern.to_string(), regex.clone());
    Ok(regex)
}

/// Compiles `pattern` anchored on both ends, so `[a-z]+` rejects "abc1"
pub fn anchored_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    compile_pattern(&format!("^(?:{})$", pattern))
}

/// Whole-value regex match
pub fn matches_pattern(value: &str, pattern: &str) -> Result<bool, regex::Error> {
    Ok(anchored_pattern(pattern)?.is_match(value))
}

/// Basic http(s) URL check: scheme, a dotted host, optional path
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());
        assert!(validate_min_length("héllo", 5).is_ok());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());
        assert!(validate_max_length("héllo", 5).is_ok());
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            validate_min_length("a", 2).unwrap_err(),
            "Must be at least 2 characters"
        );
        assert_eq!(
            validate_max_length("abc", 2).unwrap_err(),
            "Must be at most 2 characters"
        );
    }

    #[test]
    fn test_pattern_matching() {
        assert!(matches_pattern("abc", "[a-z]+").unwrap());
        assert!(!matches_pattern("abc1", "[a-z]+").unwrap());
        assert!(matches_pattern("2024", r"\d{4}").unwrap());
        assert!(matches_pattern("x", "(").is_err());
    }

    #[test]
    fn test_pattern_cache_is_bounded() {
        for n in 0..PATTERN_CACHE_LIMIT + 10 {
            let regex = compile_pattern(&format!("bounded{}", n)).unwrap();
            assert!(regex.is_match(&format!("bounded{}", n)));
            let len = PATTERN_CACHE.lock().unwrap().len();
            assert!(len <= PATTERN_CACHE_LIMIT);
        }
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://test.co.uk"));
        assert!(is_valid_url("https://example.com/path?q=1"));

        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("http://nodomain"));
    }
}
