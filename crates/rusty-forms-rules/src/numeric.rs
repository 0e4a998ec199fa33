//! Numeric rules

use std::fmt::Display;

/// Parses a form value as a number, tolerating surrounding whitespace
pub fn parse_number(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("'{}' is not a number", trimmed))
}

/// Checks that `value` has no fractional part
pub fn validate_integer(value: f64) -> Result<(), String> {
    if value.fract() == 0.0 {
        Ok(())
    } else {
        Err("Must be a whole number".to_string())
    }
}

pub fn validate_min<T: PartialOrd + Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

pub fn validate_max<T: PartialOrd + Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Inclusive range check; either bound may be absent
pub fn validate_range<T: PartialOrd + Display>(
    value: T,
    min: Option<T>,
    max: Option<T>,
) -> Result<(), String> {
    match (min, max) {
        (Some(min), Some(max)) if value < min || value > max => {
            Err(format!("Must be between {} and {}", min, max))
        }
        (Some(min), None) => validate_min(value, min),
        (None, Some(max)) => validate_max(value, max),
        _ => Ok(()),
    }
}
