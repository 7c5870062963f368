//! Form-field validators shared by every repository.
//!
//! Inputs arrive as raw text from a form. Each validator either returns the cleaned
//! value or a validation error naming the field, so callers can reject the input
//! before touching the database.

use crate::errors::{Error, Result};

/// Trims `text` and rejects it when nothing is left.
///
/// # Errors
/// Returns `Error::MissingField` for empty or whitespace-only input.
pub fn require_non_empty(field: &'static str, text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::MissingField { field });
    }
    Ok(trimmed.to_string())
}

/// Parses a number that must be present.
///
/// # Errors
/// Returns `Error::MissingField` for empty input and `Error::InvalidNumber` when the
/// text is not a finite number.
pub fn parse_required_number(field: &'static str, text: &str) -> Result<f64> {
    let trimmed = require_non_empty(field, text)?;
    parse_finite(field, &trimmed)
}

/// Parses a number, substituting `default` for empty input.
///
/// # Errors
/// Returns `Error::InvalidNumber` when non-empty text is not a finite number.
pub fn parse_number_or_default(field: &'static str, text: &str, default: f64) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(default);
    }
    parse_finite(field, trimmed)
}

/// Trims optional text; empty input is stored as NULL.
#[must_use]
pub fn optional_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Trims text, substituting `default` for empty input.
#[must_use]
pub fn text_or_default(text: &str, default: &str) -> String {
    optional_text(text).unwrap_or_else(|| default.to_string())
}

fn parse_finite(field: &'static str, text: &str) -> Result<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber {
            field,
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty("Name", "  Acme ").unwrap(), "Acme");
        assert!(matches!(
            require_non_empty("Name", "   ").unwrap_err(),
            Error::MissingField { field: "Name" }
        ));
        assert!(matches!(
            require_non_empty("Name", "").unwrap_err(),
            Error::MissingField { field: "Name" }
        ));
    }

    #[test]
    fn test_parse_required_number() {
        assert_eq!(parse_required_number("Amount", " 1500.5 ").unwrap(), 1500.5);
        assert!(matches!(
            parse_required_number("Amount", "").unwrap_err(),
            Error::MissingField { field: "Amount" }
        ));
        assert!(matches!(
            parse_required_number("Amount", "12k").unwrap_err(),
            Error::InvalidNumber { field: "Amount", value: _ }
        ));
    }

    #[test]
    fn test_parse_number_or_default() {
        assert_eq!(parse_number_or_default("Salary", "", 0.0).unwrap(), 0.0);
        assert_eq!(parse_number_or_default("Salary", "  ", 0.0).unwrap(), 0.0);
        assert_eq!(parse_number_or_default("Salary", "45000", 0.0).unwrap(), 45000.0);

        let err = parse_number_or_default("Salary", "abc", 0.0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidNumber { field: "Salary", ref value } if value == "abc"
        ));
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        assert!(parse_required_number("Cost", "NaN").is_err());
        assert!(parse_required_number("Cost", "inf").is_err());
        assert!(parse_number_or_default("Cost", "-infinity", 0.0).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  555 "), Some("555".to_string()));
        assert_eq!(optional_text("   "), None);
        assert_eq!(text_or_default("", "ongoing"), "ongoing");
        assert_eq!(text_or_default(" completed ", "ongoing"), "completed");
    }
}
