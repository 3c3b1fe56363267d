//! Boundary parsing of user-supplied integers.

use crate::error::{SpellerError, SpellerResult};

/// Parse an integer as typed by a user
///
/// Surrounding whitespace is ignored, one leading `+` or `-` is accepted and
/// `_` may separate digits (`1_000_000`). Anything else is rejected.
///
/// # Errors
///
/// Returns [`SpellerError::InvalidInput`] for empty input, stray characters,
/// misplaced separators or values that do not fit in an `i128`.
pub fn parse_integer(input: &str) -> SpellerResult<i128> {
    let trimmed = input.trim();
    let (negative, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if body.is_empty() {
        return Err(SpellerError::invalid_input(format!(
            "'{input}' contains no digits"
        )));
    }
    if body.starts_with('_') || body.ends_with('_') || body.contains("__") {
        return Err(SpellerError::invalid_input(format!(
            "'{input}' has a misplaced digit separator"
        )));
    }
    if let Some(bad) = body.chars().find(|c| !c.is_ascii_digit() && *c != '_') {
        return Err(SpellerError::invalid_input(format!(
            "'{input}' is not an integer (unexpected '{bad}')"
        )));
    }

    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    let signed = if negative { format!("-{digits}") } else { digits };
    signed
        .parse::<i128>()
        .map_err(|e| SpellerError::invalid_input(format!("'{input}' is out of bounds: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_integer("0").unwrap(), 0);
        assert_eq!(parse_integer("42").unwrap(), 42);
        assert_eq!(parse_integer("-42").unwrap(), -42);
        assert_eq!(parse_integer("+7").unwrap(), 7);
        assert_eq!(parse_integer("  15\n").unwrap(), 15);
    }

    #[test]
    fn test_separators() {
        assert_eq!(parse_integer("1_000_000").unwrap(), 1_000_000);
        assert!(parse_integer("_1").is_err());
        assert!(parse_integer("1_").is_err());
        assert!(parse_integer("1__0").is_err());
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            parse_integer("-170141183460469231731687303715884105728").unwrap(),
            i128::MIN
        );
        assert!(parse_integer("170141183460469231731687303715884105728").is_err());
    }

    #[test]
    fn test_malformed() {
        for input in ["", "   ", "-", "+", "abc", "1.5", "1e3", "--1", "12a", "١٢"] {
            let err = parse_integer(input).unwrap_err();
            assert_eq!(err.category(), "input", "{input:?} should be rejected");
        }
    }
}
