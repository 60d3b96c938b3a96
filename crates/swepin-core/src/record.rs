//! # Identity Record — Validated, Immutable
//!
//! [`PersonalIdentityNumber`] is the end of the pipeline: grammar fields
//! that have survived checksum verification and calendar validation,
//! together with the derived properties (birth date, age, sex, coordination
//! flag) and the four canonical string forms.
//!
//! ## Invariants
//!
//! - The check digit equals the mod-10 computation over `YYMMDDBBG`.
//! - Year, month and day (coordination offset removed) name a real calendar
//!   date, leap years respected.
//! - The record is immutable; fields are private and exposed through
//!   accessors only.
//! - Round-tripping any of the four canonical forms through the parser with
//!   the same reference date reproduces an equal record.

use std::fmt;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::century::{self, ResolvedYear};
use crate::error::PinError;
use crate::luhn;
use crate::parse::{self, RawPin, Separator};

/// Legal sex as encoded by the gender digit: odd = male, even = female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Derive the sex from the third digit of the birth number.
    pub fn from_gender_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
        })
    }
}

/// Which grammar admitted the input. Strict mode pins the separator to `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Loose,
    Strict,
}

/// A validated Swedish personal identity number.
///
/// Construction goes through [`parse`](Self::parse) /
/// [`parse_strict`](Self::parse_strict) (or their `_at` variants taking an
/// explicit reference date) and nothing else; every value of this type has
/// passed the full pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalIdentityNumber {
    century: i32,
    year: i32,
    full_year: i32,
    month: u32,
    day: u32,
    separator: Separator,
    birth_place: u8,
    gender_digit: u8,
    check_digit: u8,
    reference_date: NaiveDate,
    birth_date: NaiveDate,
    age: i32,
    sex: Sex,
}

impl PersonalIdentityNumber {
    /// Parse the loose grammar against today's date (UTC).
    ///
    /// # Errors
    ///
    /// [`PinError::Format`], [`PinError::Checksum`] or
    /// [`PinError::InvalidDate`], depending on the stage that rejected the
    /// input.
    pub fn parse(input: &str) -> Result<Self, PinError> {
        Self::parse_at(input, today())
    }

    /// Parse the loose grammar against an explicit reference date.
    ///
    /// The reference date drives century resolution for short forms, the
    /// effective separator for full forms, and the age computation.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_at(input: &str, reference_date: NaiveDate) -> Result<Self, PinError> {
        let raw = parse::parse_loose(input)?;
        Self::build(&raw, reference_date, Grammar::Loose)
    }

    /// Parse the strict grammar (`YYYYMMDD-NNNN`) against today's date (UTC).
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_strict(input: &str) -> Result<Self, PinError> {
        Self::parse_strict_at(input, today())
    }

    /// Parse the strict grammar against an explicit reference date.
    ///
    /// # Errors
    ///
    /// See [`parse`](Self::parse).
    pub fn parse_strict_at(input: &str, reference_date: NaiveDate) -> Result<Self, PinError> {
        let raw = parse::parse_strict(input)?;
        Self::build(&raw, reference_date, Grammar::Strict)
    }

    /// Assemble and validate a record from raw grammar fields.
    ///
    /// Stage order matters: checksum first, calendar date second, derived
    /// properties last. Each failure is terminal.
    fn build(raw: &RawPin, reference_date: NaiveDate, grammar: Grammar) -> Result<Self, PinError> {
        let expected = luhn::check_digit(&raw.checksum_digits());
        if expected != raw.check_digit {
            return Err(PinError::Checksum {
                expected,
                found: raw.check_digit,
            });
        }

        let ResolvedYear {
            century,
            full_year,
            separator,
        } = century::resolve(
            raw.century_value(),
            raw.year_value(),
            raw.separator,
            reference_date,
        );
        // The strict grammar never renders the centenarian form.
        let separator = match grammar {
            Grammar::Strict => Separator::Dash,
            Grammar::Loose => separator,
        };

        let month = raw.month_value();
        let day = raw.day_value();
        let real_day = if day > 60 { day - 60 } else { day };
        let birth_date =
            NaiveDate::from_ymd_opt(full_year, month, real_day).ok_or(PinError::InvalidDate {
                year: full_year,
                month,
                day: real_day,
            })?;

        let mut age = reference_date.year() - full_year;
        if (reference_date.month(), reference_date.day()) < (month, real_day) {
            // Birthday still ahead in the reference year.
            age -= 1;
        }

        Ok(Self {
            century,
            year: raw.year_value(),
            full_year,
            month,
            day,
            separator,
            birth_place: raw.birth_place_value(),
            gender_digit: raw.gender_digit(),
            check_digit: raw.check_digit,
            reference_date,
            birth_date,
            age,
            sex: Sex::from_gender_digit(raw.gender_digit()),
        })
    }

    /// The century as two digits, e.g. `"19"`.
    pub fn century(&self) -> String {
        format!("{:02}", self.century)
    }

    /// The year without century as two digits, e.g. `"80"`.
    pub fn year(&self) -> String {
        format!("{:02}", self.year)
    }

    /// The complete four-digit year.
    pub fn full_year(&self) -> i32 {
        self.full_year
    }

    /// The month, `1..=12`.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The day as written: `1..=31`, or `61..=91` for coordination numbers.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// The day of birth with any coordination offset removed.
    pub fn actual_day(&self) -> u32 {
        if self.is_coordination_number() {
            self.day - 60
        } else {
            self.day
        }
    }

    /// The effective separator after century resolution.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// The three-digit birth number, e.g. `"123"`.
    pub fn birth_number(&self) -> String {
        format!("{:02}{}", self.birth_place, self.gender_digit)
    }

    /// The two-digit birth place code, e.g. `"12"`.
    pub fn birth_place(&self) -> String {
        format!("{:02}", self.birth_place)
    }

    /// The gender digit: odd = male, even = female.
    pub fn gender_digit(&self) -> u8 {
        self.gender_digit
    }

    /// The verified check digit.
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The date age and century were resolved against.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// The birth date as a real calendar date (coordination offset removed).
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Age in completed years at the reference date. Negative for birth
    /// dates after the reference date.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// The sex encoded by the gender digit.
    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Whether the gender digit is odd.
    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    /// Whether the gender digit is even.
    pub fn is_female(&self) -> bool {
        self.sex == Sex::Female
    }

    /// Whether the day carries the +60 coordination-number offset.
    pub fn is_coordination_number(&self) -> bool {
        self.day > 60
    }

    /// Long form without separator: `CCYYMMDDBBGX`, 12 digits.
    pub fn long_digits(&self) -> String {
        format!(
            "{:02}{:02}{:02}{:02}{}{}",
            self.century,
            self.year,
            self.month,
            self.day,
            self.birth_number(),
            self.check_digit
        )
    }

    /// Long form with separator: `CCYYMMDD-BBGX` (or `+`).
    pub fn long_with_separator(&self) -> String {
        format!(
            "{:02}{:02}{:02}{:02}{}{}{}",
            self.century,
            self.year,
            self.month,
            self.day,
            self.separator.as_char(),
            self.birth_number(),
            self.check_digit
        )
    }

    /// Short form with separator: `YYMMDD-BBGX` (or `+`).
    pub fn short_with_separator(&self) -> String {
        format!(
            "{:02}{:02}{:02}{}{}{}",
            self.year,
            self.month,
            self.day,
            self.separator.as_char(),
            self.birth_number(),
            self.check_digit
        )
    }

    /// Short form without separator: `YYMMDDBBGX`, 10 digits.
    pub fn short_digits(&self) -> String {
        format!(
            "{:02}{:02}{:02}{}{}",
            self.year,
            self.month,
            self.day,
            self.birth_number(),
            self.check_digit
        )
    }
}

impl fmt::Display for PersonalIdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_with_separator())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn reference() -> NaiveDate {
        date(2024, 6, 1)
    }

    #[test]
    fn test_parse_full_form() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        assert_eq!(pin.century(), "19");
        assert_eq!(pin.year(), "80");
        assert_eq!(pin.full_year(), 1980);
        assert_eq!(pin.month(), 12);
        assert_eq!(pin.day(), 24);
        assert_eq!(pin.birth_number(), "123");
        assert_eq!(pin.birth_place(), "12");
        assert_eq!(pin.gender_digit(), 3);
        assert_eq!(pin.check_digit(), 1);
        assert_eq!(pin.age(), 43);
        assert_eq!(pin.sex(), Sex::Male);
        assert!(pin.is_male());
        assert!(!pin.is_female());
    }

    #[test]
    fn test_age_counts_completed_years() {
        // Reference right on the birthday: the year counts.
        let on_birthday =
            PersonalIdentityNumber::parse_at("198012241231", date(2024, 12, 24)).unwrap();
        assert_eq!(on_birthday.age(), 44);

        let day_before =
            PersonalIdentityNumber::parse_at("198012241231", date(2024, 12, 23)).unwrap();
        assert_eq!(day_before.age(), 43);
    }

    #[test]
    fn test_checksum_rejection_carries_digits() {
        let err = PersonalIdentityNumber::parse_at("198012241234", reference()).unwrap_err();
        assert_eq!(
            err,
            PinError::Checksum {
                expected: 1,
                found: 4
            }
        );
    }

    #[test]
    fn test_coordination_number() {
        let pin = PersonalIdentityNumber::parse_at("19801284-1238", reference()).unwrap();
        assert!(pin.is_coordination_number());
        assert_eq!(pin.day(), 84);
        assert_eq!(pin.actual_day(), 24);
        assert_eq!(pin.birth_date(), date(1980, 12, 24));
        // The formatted forms keep the offset day.
        assert_eq!(pin.long_digits(), "198012841238");
    }

    #[test]
    fn test_invalid_date_rejected_after_checksum() {
        // Check digit is consistent, but February has no 30th.
        let err = PersonalIdentityNumber::parse_at("19800230-1235", reference()).unwrap_err();
        assert_eq!(
            err,
            PinError::InvalidDate {
                year: 1980,
                month: 2,
                day: 30
            }
        );
    }

    #[test]
    fn test_leap_year_accepted() {
        let pin = PersonalIdentityNumber::parse_at("19800229-1238", reference()).unwrap();
        assert_eq!(pin.birth_date(), date(1980, 2, 29));
        // Century year divisible by 400 is a leap year.
        let pin = PersonalIdentityNumber::parse_at("20000229-1235", reference()).unwrap();
        assert_eq!(pin.birth_date(), date(2000, 2, 29));
    }

    #[test]
    fn test_non_leap_february_29_rejected() {
        // 1981-02-29 does not exist; digits 810229123 -> check 7.
        let err = PersonalIdentityNumber::parse_at("19810229-1237", reference());
        assert!(matches!(err, Err(PinError::InvalidDate { .. })));
    }

    #[test]
    fn test_plus_separator_resolves_a_century_back() {
        let pin = PersonalIdentityNumber::parse_at("121212+1212", date(2024, 1, 1)).unwrap();
        assert_eq!(pin.full_year(), 1912);
        assert_eq!(pin.separator(), Separator::Plus);
        assert_eq!(pin.age(), 111);
    }

    #[test]
    fn test_dash_separator_resolves_recent_century() {
        let pin = PersonalIdentityNumber::parse_at("121212-1212", date(2024, 1, 1)).unwrap();
        assert_eq!(pin.full_year(), 2012);
        assert_eq!(pin.separator(), Separator::Dash);
    }

    #[test]
    fn test_full_form_recomputes_separator() {
        // Documented behavior: with an explicit century the typed separator
        // is ignored and recomputed from the reference date.
        let pin = PersonalIdentityNumber::parse_at("19801224+1231", reference()).unwrap();
        assert_eq!(pin.separator(), Separator::Dash);

        let centenarian = PersonalIdentityNumber::parse_at("19121212-1212", reference()).unwrap();
        assert_eq!(centenarian.separator(), Separator::Plus);
    }

    #[test]
    fn test_strict_separator_stays_dash() {
        let pin =
            PersonalIdentityNumber::parse_strict_at("19121212-1212", reference()).unwrap();
        assert_eq!(pin.separator(), Separator::Dash);
        assert_eq!(pin.short_with_separator(), "121212-1212");
    }

    #[test]
    fn test_four_canonical_forms() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        assert_eq!(pin.long_digits(), "198012241231");
        assert_eq!(pin.long_with_separator(), "19801224-1231");
        assert_eq!(pin.short_with_separator(), "801224-1231");
        assert_eq!(pin.short_digits(), "8012241231");
    }

    #[test]
    fn test_display_is_short_with_separator() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        assert_eq!(pin.to_string(), "801224-1231");
    }

    #[test]
    fn test_forms_round_trip() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        for form in [
            pin.long_digits(),
            pin.long_with_separator(),
            pin.short_with_separator(),
            pin.short_digits(),
        ] {
            let again = PersonalIdentityNumber::parse_at(&form, reference()).unwrap();
            assert_eq!(again, pin, "round-trip through {form:?}");
        }
    }

    #[test]
    fn test_centenarian_forms_round_trip() {
        let pin = PersonalIdentityNumber::parse_at("19121212-1212", reference()).unwrap();
        assert_eq!(pin.separator(), Separator::Plus);
        // The '+' carries the century information in the short form.
        for form in [
            pin.long_digits(),
            pin.long_with_separator(),
            pin.short_with_separator(),
        ] {
            let again = PersonalIdentityNumber::parse_at(&form, reference()).unwrap();
            assert_eq!(again, pin, "round-trip through {form:?}");
        }
        // The bare 10-digit form has no place for the '+', so the century
        // ambiguity resolves to the most recent placement again.
        let bare = PersonalIdentityNumber::parse_at(&pin.short_digits(), reference()).unwrap();
        assert_eq!(bare.full_year(), 2012);
    }

    #[test]
    fn test_female_gender_digit() {
        let pin = PersonalIdentityNumber::parse_at("19850415-6780", reference()).unwrap();
        assert_eq!(pin.gender_digit(), 8);
        assert_eq!(pin.sex(), Sex::Female);
        assert!(pin.is_female());
    }

    #[test]
    fn test_future_birth_date_allowed() {
        let pin = PersonalIdentityNumber::parse_at("20250101-1234", date(2024, 6, 1));
        // Grammar and date are fine; only the checksum decides.
        if let Ok(pin) = pin {
            assert!(pin.age() < 0);
        }
        // With a correct check digit the record builds.
        let check = crate::luhn::check_digit_for("250101123").unwrap();
        let input = format!("20250101-123{check}");
        let pin = PersonalIdentityNumber::parse_at(&input, date(2024, 6, 1)).unwrap();
        assert_eq!(pin.age(), -1);
    }

    #[test]
    fn test_reference_date_is_recorded() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        assert_eq!(pin.reference_date(), reference());
    }

    #[test]
    fn test_serialize_record() {
        let pin = PersonalIdentityNumber::parse_at("198012241231", reference()).unwrap();
        let json = serde_json::to_value(&pin).unwrap();
        assert_eq!(json["full_year"], 1980);
        assert_eq!(json["separator"], "-");
        assert_eq!(json["sex"], "male");
    }
}
