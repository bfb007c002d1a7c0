//! # Validation Utilities
//!
//! Input validation helpers. Each helper returns the message to show next to
//! the offending field.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}

/// Validate maximum length, counted in characters after trimming.
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> Result<(), String> {
    if value.trim().chars().count() > max {
        Err(format!("{} must be {} characters or less", field_name, max))
    } else {
        Ok(())
    }
}

/// Coerce text to a number strictly greater than zero.
pub fn parse_positive_number(value: &str, field_name: &str) -> Result<f64, String> {
    let number: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a number", field_name))?;

    if !number.is_finite() || number <= 0.0 {
        return Err(format!("{} must be greater than 0", field_name));
    }

    Ok(number)
}

/// Coerce text to a whole number strictly greater than zero.
pub fn parse_whole_number(value: &str, field_name: &str) -> Result<u64, String> {
    let number = parse_positive_number(value, field_name)?;

    if number.fract() != 0.0 || number > u64::MAX as f64 {
        return Err(format!("{} must be a whole number", field_name));
    }

    Ok(number as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("AAPL", "Symbol is required").is_ok());
        assert_eq!(
            validate_not_empty("   ", "Symbol is required"),
            Err("Symbol is required".to_string())
        );
    }

    #[test]
    fn test_max_length() {
        assert!(validate_max_length("ABCDEFGHIJ", 10, "Symbol").is_ok());
        assert_eq!(
            validate_max_length("ABCDEFGHIJK", 10, "Symbol"),
            Err("Symbol must be 10 characters or less".to_string())
        );
    }

    #[test]
    fn test_positive_number() {
        assert_eq!(parse_positive_number("150.50", "Price"), Ok(150.5));
        assert_eq!(parse_positive_number(" 2 ", "Price"), Ok(2.0));
        assert!(parse_positive_number("0", "Price").is_err());
        assert!(parse_positive_number("-3", "Price").is_err());
        assert!(parse_positive_number("abc", "Price").is_err());
        assert!(parse_positive_number("NaN", "Price").is_err());
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(parse_whole_number("1000", "Amount"), Ok(1000));
        assert_eq!(parse_whole_number("1e3", "Amount"), Ok(1000));
        assert_eq!(
            parse_whole_number("10.5", "Amount"),
            Err("Amount must be a whole number".to_string())
        );
        assert_eq!(
            parse_whole_number("0", "Amount"),
            Err("Amount must be greater than 0".to_string())
        );
    }
}
