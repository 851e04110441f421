//! Numeric input parsing.

use thiserror::Error;

/// Reasons a line could not be read as a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line was empty or whitespace only.
    #[error("expected a number, got an empty line")]
    Empty,

    /// Line was not a whole number that fits in 64 bits.
    #[error("{input:?} is not a whole number")]
    NotANumber {
        /// The trimmed line.
        input: String,
    },
}

/// Parse a line as a signed whole number.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
pub fn parse_integer(line: &str) -> Result<i64, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    trimmed.parse().map_err(|_| InputError::NotANumber { input: trimmed.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_numbers() {
        assert_eq!(parse_integer("7"), Ok(7));
        assert_eq!(parse_integer("  42\r"), Ok(42));
        assert_eq!(parse_integer("+3"), Ok(3));
        assert_eq!(parse_integer("-1"), Ok(-1));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_integer(""), Err(InputError::Empty));
        assert_eq!(parse_integer(" \t "), Err(InputError::Empty));
    }

    #[test]
    fn rejects_words_and_decimals() {
        assert_eq!(parse_integer("two"), Err(InputError::NotANumber { input: "two".into() }));
        assert_eq!(parse_integer("1.5"), Err(InputError::NotANumber { input: "1.5".into() }));
        assert_eq!(parse_integer("1 2"), Err(InputError::NotANumber { input: "1 2".into() }));
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            parse_integer("99999999999999999999"),
            Err(InputError::NotANumber { .. })
        ));
    }
}
