//! Validation utilities for TUI forms
//!
//! The swap form itself accepts amount text as-is; format enforcement is
//! the input widget's job and lives here.

use std::sync::OnceLock;

use regex::Regex;

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Same shape a numeric form field accepts: digits with at most one
    // decimal point.
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("valid amount pattern"))
}

/// Validate a numeric amount
pub fn validate_amount(amount: &str) -> Result<f64, String> {
    if !amount_pattern().is_match(amount) {
        return Err("Invalid number format".to_string());
    }

    match amount.parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(value),
        Ok(_) => Err("Amount must be positive".to_string()),
        Err(_) => Err("Invalid number format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount("10"), Ok(10.0));
        assert_eq!(validate_amount("0.5"), Ok(0.5));
        assert_eq!(validate_amount("10."), Ok(10.0));
        assert!(validate_amount("abc").is_err());
        assert!(validate_amount("-1").is_err());
        assert!(validate_amount("1.2.3").is_err());
        assert!(validate_amount(".").is_err());
        assert!(validate_amount("").is_err());
    }
}
