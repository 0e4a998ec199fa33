//! Calendar date rules

use chrono::NaiveDate;

/// Default input format for date fields (ISO 8601 calendar date)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `value` with a chrono `format` string
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), format)
        .map_err(|_| format!("'{}' is not a valid date (expected {})", value.trim(), format))
}

/// Inclusive bounds check; either bound may be absent
pub fn validate_date_between(
    date: NaiveDate,
    earliest: Option<NaiveDate>,
    latest: Option<NaiveDate>,
) -> Result<(), String> {
    if let Some(earliest) = earliest {
        if date < earliest {
            return Err(format!("Date must be on or after {}", earliest));
        }
    }
    if let Some(latest) = latest {
        if date > latest {
            return Err(format!("Date must be on or before {}", latest));
        }
    }
    Ok(())
}
