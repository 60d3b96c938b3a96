//! # swepin-report — Presentation over the Identity Record
//!
//! Human-readable and machine-readable views of a validated
//! [`PersonalIdentityNumber`](swepin_core::PersonalIdentityNumber). Everything
//! here consumes the finished record; nothing feeds back into parsing, and
//! nothing in this crate can fail — a record that exists has already passed
//! the full pipeline.
//!
//! Two surfaces, both localized through [`Language`]:
//!
//! - [`render_table`] — a boxed property table for terminals.
//! - [`report`] / [`report_json`] — a structured JSON document whose keys
//!   follow the selected language.

mod locale;
mod report;
mod table;

pub use locale::Language;
pub use report::{report, report_json};
pub use table::render_table;
