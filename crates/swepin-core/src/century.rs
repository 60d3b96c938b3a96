//! # Century Resolver
//!
//! A short-form number carries only a two-digit year; the century is derived
//! from the reference date and the typed separator. A `+` separator marks a
//! centenarian and shifts the naive placement back a full century.
//!
//! ## Invariants
//!
//! - Century absent: the resolved `full_year` is the most recent year ending
//!   in the given two digits that is not after the (possibly shifted)
//!   reference year.
//! - Century present: the typed separator is **informative only** and is
//!   recomputed from the reference date (`+` once the subject is 100). This
//!   means any `-`/`+` the caller typed in a full 13-character loose number
//!   is ignored. Inherited behavior, preserved exactly; downstream consumers
//!   rely on it.

use chrono::{Datelike, NaiveDate};

use crate::parse::Separator;

/// Outcome of century resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedYear {
    /// The two-digit century (`full_year / 100`).
    pub century: i32,
    /// The complete four-digit year.
    pub full_year: i32,
    /// The effective separator after resolution.
    pub separator: Separator,
}

/// Resolve the full year, century and effective separator.
///
/// `century` and `typed_separator` are the fields as extracted by the
/// grammar parser; `reference` is the date age and century are resolved
/// against.
pub fn resolve(
    century: Option<i32>,
    year2: i32,
    typed_separator: Option<Separator>,
    reference: NaiveDate,
) -> ResolvedYear {
    match century {
        Some(century) => {
            let full_year = century * 100 + year2;
            let separator = if reference.year() - full_year >= 100 {
                Separator::Plus
            } else {
                Separator::Dash
            };
            ResolvedYear {
                century,
                full_year,
                separator,
            }
        }
        None => {
            let mut base_year = reference.year();
            let separator = match typed_separator {
                Some(Separator::Plus) => {
                    // A '+' always signals "100 years earlier than the
                    // naive placement".
                    base_year -= 100;
                    Separator::Plus
                }
                _ => Separator::Dash,
            };
            let full_year = base_year - (base_year - year2).rem_euclid(100);
            ResolvedYear {
                century: full_year / 100,
                full_year,
                separator,
            }
        }
    }
}
