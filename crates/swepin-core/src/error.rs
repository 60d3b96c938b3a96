//! # Error Types — Parse and Validation Failures
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. The three variants mirror the three pipeline stages that
//! can reject input: grammar recognition, checksum verification, and
//! calendar-date validation. Every failure is terminal for the call that
//! raised it; no partial record is ever returned.

use thiserror::Error;

/// Failure modes when parsing or validating a personal identity number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinError {
    /// The input does not match the number grammar: wrong length, a
    /// non-digit where a digit is required, or a misplaced/illegal separator.
    #[error("could not parse {input:?} as a Swedish personal identity number: {reason}")]
    Format {
        /// The rejected input, verbatim.
        input: String,
        /// What the grammar expected at the point of rejection.
        reason: String,
    },

    /// The grammar matched but the final digit does not equal the mod-10
    /// check digit computed over the other nine.
    #[error("check digit mismatch: expected {expected}, got {found}")]
    Checksum {
        /// The digit the checksum engine computed.
        expected: u8,
        /// The digit the input carried.
        found: u8,
    },

    /// The grammar and checksum matched but year, month and day (after
    /// removing a coordination offset) do not name a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a real calendar date")]
    InvalidDate {
        /// The resolved four-digit year.
        year: i32,
        /// The month as written.
        month: u32,
        /// The day with any coordination offset already removed.
        day: u32,
    },
}

impl PinError {
    /// Build a [`PinError::Format`] for the given input.
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Self::Format {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_display_names_input() {
        let err = PinError::format("abc", "expected 10 to 13 characters");
        let msg = err.to_string();
        assert!(msg.contains("\"abc\""));
        assert!(msg.contains("expected 10 to 13 characters"));
    }

    #[test]
    fn test_checksum_display_carries_both_digits() {
        let err = PinError::Checksum {
            expected: 1,
            found: 4,
        };
        assert_eq!(err.to_string(), "check digit mismatch: expected 1, got 4");
    }

    #[test]
    fn test_invalid_date_display_is_iso_shaped() {
        let err = PinError::InvalidDate {
            year: 1980,
            month: 2,
            day: 30,
        };
        assert_eq!(
            err.to_string(),
            "1980-02-30 is not a real calendar date"
        );
    }
}
