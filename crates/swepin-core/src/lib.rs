//! # swepin-core — Swedish Personal Identity Numbers
//!
//! Parsing, validation and formatting of Swedish personal identity numbers
//! (personnummer) and coordination numbers. This crate is the leaf of the
//! workspace: the report and generator crates depend on it; it depends on
//! nothing internal.
//!
//! A personal identity number is a fixed-grammar identifier:
//!
//! ```text
//! [CC] YY MM DD [S] B B G X
//!  │   │  │  │   │  └─┴─┼─┴── birth number: place (2), gender digit, check digit
//!  │   │  │  │   └── separator, '-' or '+' ('+' once the person is 100)
//!  │   │  │  └── day 01-31, or 61-91 for coordination numbers
//!  │   │  └── month 01-12
//!  │   └── two-digit year
//!  └── century, optional in the short forms
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **A pure forward pipeline.** Raw string → [`parse`] (grammar only) →
//!    [`century`] (full-year resolution) → [`luhn`] (checksum) →
//!    [`record::PersonalIdentityNumber`] (calendar validation and derived
//!    properties). Each stage returns an immutable value; there is no
//!    partially constructed record at any point.
//!
//! 2. **No regexes.** The grammar is fixed-width; the parser peels fields by
//!    position and rejects anything else.
//!
//! 3. **Validated construction only.** A `PersonalIdentityNumber` can only be
//!    obtained through the checked constructors; its fields are private and
//!    it is immutable once built.
//!
//! 4. **No `unsafe`, no `panic!()` or `.unwrap()` outside tests.** All
//!    failure modes surface as [`PinError`].
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use swepin_core::PersonalIdentityNumber;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let pin = PersonalIdentityNumber::parse_at("19801224-1231", reference)?;
//! assert_eq!(pin.age(), 43);
//! assert_eq!(pin.short_with_separator(), "801224-1231");
//! # Ok::<(), swepin_core::PinError>(())
//! ```

pub mod century;
pub mod error;
pub mod luhn;
pub mod parse;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use error::PinError;
pub use parse::{matches_format, parse_loose, parse_strict, PinFormat, RawPin, Separator};
pub use record::{PersonalIdentityNumber, Sex};
