//! # Grammar Parser — Fixed-Width Field Recognition
//!
//! Recognizes the two accepted shapes of a personal identity number and
//! peels the raw fields out of the input. No regexes: the grammar is
//! fixed-width, so the total length determines where every field (and the
//! optional separator) must sit.
//!
//! Accepted loose shapes, by total length:
//!
//! ```text
//! 10  YYMMDDBBGX
//! 11  YYMMDD[-+]BBGX
//! 12  CCYYMMDDBBGX
//! 13  CCYYMMDD[-+]BBGX
//! ```
//!
//! The strict shape is exactly `CCYYMMDD-BBGX` (13 characters, `-` only).
//!
//! ## Invariants
//!
//! - Every non-separator position must be an ASCII digit.
//! - The parser performs **no** semantic interpretation: month and day are
//!   not range checked here, and the checksum is not verified. That is the
//!   record builder's job.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::PinError;

/// The character between the birth date and the birth number.
///
/// `-` for people under 100 years of age, `+` from the hundredth birthday
/// on. The distinction only matters in the short (century-less) forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `-`, the ordinary separator.
    Dash,
    /// `+`, the centenarian separator.
    Plus,
}

impl Separator {
    /// The separator as it appears in a formatted number.
    pub fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Plus => '+',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Separator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Raw fields peeled from the input, before any semantic checks.
///
/// Digits are stored as values `0..=9` in fixed-width arrays; the century
/// and separator are `None` when the input omitted them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPin {
    /// Explicit century digits, if the input carried them.
    pub century: Option<[u8; 2]>,
    /// Two-digit year.
    pub year: [u8; 2],
    /// Two-digit month, not yet range checked.
    pub month: [u8; 2],
    /// Two-digit day, possibly carrying a +60 coordination offset.
    pub day: [u8; 2],
    /// The separator as typed, if any.
    pub separator: Option<Separator>,
    /// Three-digit birth number: birth place (2) and gender digit (1).
    pub birth_number: [u8; 3],
    /// The claimed check digit.
    pub check_digit: u8,
}

impl RawPin {
    /// The nine checksum-relevant digits `YYMMDDBBG`.
    pub fn checksum_digits(&self) -> [u8; 9] {
        [
            self.year[0],
            self.year[1],
            self.month[0],
            self.month[1],
            self.day[0],
            self.day[1],
            self.birth_number[0],
            self.birth_number[1],
            self.birth_number[2],
        ]
    }

    /// The explicit century as a number, if present.
    pub fn century_value(&self) -> Option<i32> {
        self.century.map(|c| pair_value(c) as i32)
    }

    /// The two-digit year as a number.
    pub fn year_value(&self) -> i32 {
        pair_value(self.year) as i32
    }

    /// The month as written.
    pub fn month_value(&self) -> u32 {
        pair_value(self.month)
    }

    /// The day as written, coordination offset included.
    pub fn day_value(&self) -> u32 {
        pair_value(self.day)
    }

    /// The two-digit birth place code.
    pub fn birth_place_value(&self) -> u8 {
        self.birth_number[0] * 10 + self.birth_number[1]
    }

    /// The gender digit (third digit of the birth number).
    pub fn gender_digit(&self) -> u8 {
        self.birth_number[2]
    }
}

fn pair_value(pair: [u8; 2]) -> u32 {
    u32::from(pair[0]) * 10 + u32::from(pair[1])
}

/// Parse the loose grammar: optional century, optional `-`/`+` separator.
///
/// # Errors
///
/// Returns [`PinError::Format`] when the length is not 10-13 characters,
/// when a digit position holds a non-digit, or when the separator position
/// holds anything other than `-` or `+`.
pub fn parse_loose(input: &str) -> Result<RawPin, PinError> {
    let bytes = input.as_bytes();
    let (has_century, separator_at) = match bytes.len() {
        10 => (false, None),
        11 => (false, Some(6)),
        12 => (true, None),
        13 => (true, Some(8)),
        _ => {
            return Err(PinError::format(
                input,
                "expected 10 to 13 characters",
            ))
        }
    };

    let separator = match separator_at {
        None => None,
        Some(at) => Some(read_separator(input, bytes[at], at)?),
    };

    let digits = read_digits(input, bytes, separator_at)?;
    Ok(assemble(&digits, has_century, separator))
}

/// Parse the strict grammar: exactly `CCYYMMDD-BBGX`.
///
/// The century is mandatory and the separator must be `-`; the `+` form is
/// not permitted here regardless of age.
///
/// # Errors
///
/// Returns [`PinError::Format`] for any deviation from the 13-character
/// shape.
pub fn parse_strict(input: &str) -> Result<RawPin, PinError> {
    let bytes = input.as_bytes();
    if bytes.len() != 13 {
        return Err(PinError::format(
            input,
            "strict format is exactly YYYYMMDD-NNNN (13 characters)",
        ));
    }
    if bytes[8] != b'-' {
        return Err(PinError::format(
            input,
            "strict format requires '-' between birth date and birth number",
        ));
    }

    let digits = read_digits(input, bytes, Some(8))?;
    Ok(assemble(&digits, true, Some(Separator::Dash)))
}

/// The four canonical string shapes, as shape probes.
///
/// These check layout only (lengths, digit positions, separator position);
/// they do not resolve centuries, verify checksums or validate dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinFormat {
    /// `CCYYMMDD[-+]BBGX`, 13 characters.
    LongWithSeparator,
    /// `CCYYMMDDBBGX`, 12 digits.
    LongWithoutSeparator,
    /// `YYMMDD[-+]BBGX`, 11 characters.
    ShortWithSeparator,
    /// `YYMMDDBBGX`, 10 digits.
    ShortWithoutSeparator,
}

/// Whether `input` has exactly the layout of `format`.
pub fn matches_format(input: &str, format: PinFormat) -> bool {
    let (len, separator_at) = match format {
        PinFormat::LongWithSeparator => (13, Some(8)),
        PinFormat::LongWithoutSeparator => (12, None),
        PinFormat::ShortWithSeparator => (11, Some(6)),
        PinFormat::ShortWithoutSeparator => (10, None),
    };
    let bytes = input.as_bytes();
    bytes.len() == len
        && bytes.iter().enumerate().all(|(index, &byte)| {
            if Some(index) == separator_at {
                byte == b'-' || byte == b'+'
            } else {
                byte.is_ascii_digit()
            }
        })
}

fn read_separator(input: &str, byte: u8, at: usize) -> Result<Separator, PinError> {
    match byte {
        b'-' => Ok(Separator::Dash),
        b'+' => Ok(Separator::Plus),
        _ => Err(PinError::format(
            input,
            format!("expected '-' or '+' at position {at}"),
        )),
    }
}

/// Collect every digit position, skipping the separator slot if any.
/// Yields 10 or 12 digit values.
fn read_digits(input: &str, bytes: &[u8], separator_at: Option<usize>) -> Result<Vec<u8>, PinError> {
    let mut digits = Vec::with_capacity(12);
    for (index, &byte) in bytes.iter().enumerate() {
        if Some(index) == separator_at {
            continue;
        }
        if !byte.is_ascii_digit() {
            return Err(PinError::format(
                input,
                format!("expected a digit at position {index}"),
            ));
        }
        digits.push(byte - b'0');
    }
    Ok(digits)
}

/// Slice a 10- or 12-entry digit run into the fixed-width fields.
fn assemble(digits: &[u8], has_century: bool, separator: Option<Separator>) -> RawPin {
    let (century, rest) = if has_century {
        (Some([digits[0], digits[1]]), &digits[2..])
    } else {
        (None, digits)
    };
    RawPin {
        century,
        year: [rest[0], rest[1]],
        month: [rest[2], rest[3]],
        day: [rest[4], rest[5]],
        separator,
        birth_number: [rest[6], rest[7], rest[8]],
        check_digit: rest[9],
    }
}
