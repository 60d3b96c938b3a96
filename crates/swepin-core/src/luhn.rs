//! # Checksum Engine — Left-Anchored Mod-10 Check Digit
//!
//! The Swedish scheme uses a Luhn-family mod-10 algorithm with the doubling
//! pattern anchored to the **left**: digits at even 0-based positions of
//! `YYMMDDBBG` are doubled, digits at odd positions are kept. The textbook
//! Luhn anchors doubling to the rightmost digit; the left anchoring here is a
//! defining property of the national scheme, not an implementation detail,
//! and must not be "corrected".
//!
//! ## Invariants
//!
//! - Input is exactly the nine digits `YYMMDDBBG`, with the day still
//!   carrying any +60 coordination offset.
//! - Doubled digits above 9 fold by subtracting 9 (the digit-sum fold).
//! - `check = (10 - sum % 10) % 10`.
//! - The computation is pure and deterministic; [`verify`] has no side
//!   effects.
//!
//! The `[u8; 9]` parameter encodes the length contract in the type; the
//! grammar parser is the only producer of these arrays in the pipeline.
//! [`check_digit_for`] is the string-facing convenience that validates shape
//! first.

use crate::error::PinError;

/// Compute the check digit for the nine digits `YYMMDDBBG`.
///
/// Each digit must be in `0..=9`; the parser guarantees this for arrays it
/// produces.
pub fn check_digit(digits: &[u8; 9]) -> u8 {
    let mut sum = 0u32;
    for (position, &digit) in digits.iter().enumerate() {
        let mut value = u32::from(digit);
        if position % 2 == 0 {
            value *= 2;
        }
        if value > 9 {
            value -= 9;
        }
        sum += value;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Recompute the check digit and compare it against a claimed one.
pub fn verify(digits: &[u8; 9], claimed: u8) -> bool {
    check_digit(digits) == claimed
}

/// Compute the check digit for a nine-character digit string.
///
/// # Errors
///
/// Returns [`PinError::Format`] if the input is not exactly nine ASCII
/// digits.
pub fn check_digit_for(digits: &str) -> Result<u8, PinError> {
    let bytes = digits.as_bytes();
    if bytes.len() != 9 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(PinError::format(digits, "expected exactly nine digits"));
    }
    let mut values = [0u8; 9];
    for (value, &byte) in values.iter_mut().zip(bytes) {
        *value = byte - b'0';
    }
    Ok(check_digit(&values))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn nine_digits() -> impl Strategy<Value = [u8; 9]> {
        prop::array::uniform9(0u8..=9)
    }

    proptest! {
        /// The checksum is deterministic.
        #[test]
        fn check_digit_deterministic(d in nine_digits()) {
            prop_assert_eq!(check_digit(&d), check_digit(&d));
        }

        /// The check digit is always a single digit.
        #[test]
        fn check_digit_in_range(d in nine_digits()) {
            prop_assert!(check_digit(&d) <= 9);
        }

        /// Exactly one claimed digit verifies.
        #[test]
        fn exactly_one_digit_verifies(d in nine_digits()) {
            let matches = (0u8..=9).filter(|&c| verify(&d, c)).count();
            prop_assert_eq!(matches, 1);
        }

        /// The string and array entry points agree.
        #[test]
        fn string_form_agrees_with_array_form(d in nine_digits()) {
            let s: String = d.iter().map(|v| char::from(b'0' + v)).collect();
            prop_assert_eq!(check_digit_for(&s).unwrap(), check_digit(&d));
        }
    }
}
