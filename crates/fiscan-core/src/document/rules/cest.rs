//! CEST (tax-segment) code helpers.

use super::patterns::CEST_PATTERN;

/// Sentinel for a line item whose CEST the source document does not inform.
/// Distinct from the empty string so "omitted" and "present but empty" stay
/// distinguishable downstream.
pub const CEST_NOT_INFORMED: &str = "not informed";

/// Strip the dot separators used in registry listings (12.345.67 -> 1234567).
pub fn normalize_cest(code: &str) -> String {
    code.trim().replace('.', "")
}

/// Check that a code has the 7-digit CEST shape, dotted or plain.
pub fn is_valid_cest(code: &str) -> bool {
    CEST_PATTERN.is_match(code.trim())
}

/// Format a CEST with the conventional dots (12.345.67).
///
/// Returns the input unchanged when it does not carry exactly 7 digits.
pub fn format_cest(code: &str) -> String {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 7 {
        return code.to_string();
    }

    format!("{}.{}.{}", &digits[0..2], &digits[2..5], &digits[5..7])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cest() {
        assert_eq!(normalize_cest("12.345.67"), "1234567");
        assert_eq!(normalize_cest("1234567"), "1234567");
        assert_eq!(normalize_cest(" 06.001.00 "), "0600100");
    }

    #[test]
    fn test_is_valid_cest() {
        assert!(is_valid_cest("12.345.67"));
        assert!(is_valid_cest("1234567"));
        assert!(!is_valid_cest("123456")); // too short
        assert!(!is_valid_cest(CEST_NOT_INFORMED));
    }

    #[test]
    fn test_format_cest() {
        assert_eq!(format_cest("1234567"), "12.345.67");
        assert_eq!(format_cest("12.345.67"), "12.345.67");
        assert_eq!(format_cest(CEST_NOT_INFORMED), CEST_NOT_INFORMED);
    }

    #[test]
    fn test_sentinel_is_not_empty() {
        assert!(!CEST_NOT_INFORMED.is_empty());
    }
}
