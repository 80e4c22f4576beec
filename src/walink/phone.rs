//! Phone number sanitizing and validation.
//!
//! Numbers are reduced to ASCII digits before anything else looks at them:
//! spaces, dashes, parentheses and a leading `+` are all dropped. Validation is
//! a digit-count heuristic only, it does not try to conform to any numbering
//! plan.

/// Fewest digits a number may have and still produce an actionable link.
pub const MIN_DIGITS: usize = 8;

/// Most digits a number may have (the E.164 maximum).
pub const MAX_DIGITS: usize = 15;

/// Strips everything that is not an ASCII digit. A missing input is empty.
pub fn sanitize(raw: Option<&str>) -> String {
    raw.map(sanitize_str).unwrap_or_default()
}

/// Same as [`sanitize`] for an input that is known to be present.
pub fn sanitize_str(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True iff `digits` has between [`MIN_DIGITS`] and [`MAX_DIGITS`] characters.
///
/// Expects an already sanitized value; anything else is counted as-is.
pub fn is_valid(digits: &str) -> bool {
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_plus() {
        assert_eq!(sanitize_str("+62 812-3456-7890"), "6281234567890");
        assert_eq!(sanitize_str("(021) 555.0199"), "0215550199");
    }

    #[test]
    fn missing_input_is_empty() {
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("")), "");
    }

    #[test]
    fn drops_non_ascii_digits() {
        // Arabic-Indic and full-width digits are not ASCII digits
        assert_eq!(sanitize_str("٠١٢３4"), "4");
    }

    #[test]
    fn sanitized_output_is_digits_only_and_idempotent() {
        let samples = [
            "",
            "abc",
            "+1 (555) 010-9999",
            "  62 812 3456 7890  ",
            "tel:+44-20-7946-0958",
            "📞 0812\t3456\n7890",
        ];
        for s in samples {
            let once = sanitize_str(s);
            assert!(once.chars().all(|c| c.is_ascii_digit()), "{:?}", once);
            assert_eq!(sanitize_str(&once), once);
        }
    }

    #[test]
    fn validity_boundaries() {
        let digits = "1234567890123456789";
        for len in 0..=digits.len() {
            let expected = (8..=15).contains(&len);
            assert_eq!(is_valid(&digits[..len]), expected, "len {}", len);
        }
    }

    #[test]
    fn validity_examples() {
        assert!(!is_valid("1234567"));
        assert!(is_valid("12345678"));
        assert!(is_valid("123456789012345"));
        assert!(!is_valid("1234567890123456"));
        assert!(!is_valid(""));
    }
}
