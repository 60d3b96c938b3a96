//! Label and key tables for the two supported output languages.
//!
//! Labels are the human-facing captions in the rendered table; keys are the
//! field names of the JSON report. Both are static: adding a language means
//! adding one `Labels` and one `Keys` table.

use serde::Serialize;

/// Output language for tables and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Swedish,
}

impl Language {
    pub(crate) fn labels(self) -> &'static Labels {
        match self {
            Self::English => &ENGLISH_LABELS,
            Self::Swedish => &SWEDISH_LABELS,
        }
    }

    pub(crate) fn keys(self) -> &'static Keys {
        match self {
            Self::English => &ENGLISH_KEYS,
            Self::Swedish => &SWEDISH_KEYS,
        }
    }
}

/// Captions for the rendered property table.
pub(crate) struct Labels {
    pub title: &'static str,
    pub property: &'static str,
    pub value: &'static str,
    pub original_number: &'static str,
    pub birth_date_section: &'static str,
    pub century: &'static str,
    pub year_two_digits: &'static str,
    pub full_year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub full_date: &'static str,
    pub coordination_number: &'static str,
    pub coordination_yes: &'static str,
    pub coordination_no: &'static str,
    pub actual_day: &'static str,
    pub separator: &'static str,
    pub birth_number_section: &'static str,
    pub complete_number: &'static str,
    pub birth_place_digits: &'static str,
    pub gender_digit: &'static str,
    pub validation_digit: &'static str,
    pub derived_section: &'static str,
    pub age: &'static str,
    pub gender: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub formats_section: &'static str,
    pub long_without_separator: &'static str,
    pub long_with_separator: &'static str,
    pub short_with_separator: &'static str,
    pub short_without_separator: &'static str,
}

/// Field names for the JSON report.
pub(crate) struct Keys {
    pub personal_identity_number: &'static str,
    pub birth_date: &'static str,
    pub century: &'static str,
    pub year: &'static str,
    pub full_year: &'static str,
    pub month: &'static str,
    pub day: &'static str,
    pub iso_date: &'static str,
    pub actual_day: &'static str,
    pub separator: &'static str,
    pub birth_number: &'static str,
    pub complete: &'static str,
    pub birth_place: &'static str,
    pub gender_digit: &'static str,
    pub validation_digit: &'static str,
    pub derived_info: &'static str,
    pub age: &'static str,
    pub gender: &'static str,
    pub male: &'static str,
    pub female: &'static str,
    pub is_coordination_number: &'static str,
    pub formats: &'static str,
    pub long_format: &'static str,
    pub long_format_with_separator: &'static str,
    pub short_format: &'static str,
    pub short_format_without_separator: &'static str,
}

static ENGLISH_LABELS: Labels = Labels {
    title: "Swedish Personal Identity Number Details",
    property: "Property",
    value: "Value",
    original_number: "Original Number",
    birth_date_section: "BIRTH DATE",
    century: "Century",
    year_two_digits: "Year (2 digits)",
    full_year: "Full Year (4 digits)",
    month: "Month",
    day: "Day",
    full_date: "Full Date",
    coordination_number: "Coordination Number",
    coordination_yes: "Yes (day + 60)",
    coordination_no: "No",
    actual_day: "Actual Day",
    separator: "SEPARATOR",
    birth_number_section: "BIRTH NUMBER",
    complete_number: "Complete Number",
    birth_place_digits: "Birth Place Digits",
    gender_digit: "Gender Digit",
    validation_digit: "Validation Digit",
    derived_section: "DERIVED PROPERTIES",
    age: "Age",
    gender: "Gender",
    male: "Male",
    female: "Female",
    formats_section: "FORMATS",
    long_without_separator: "Long (12 digits) w/o separator",
    long_with_separator: "Long w/ separator",
    short_with_separator: "Short w/ separator",
    short_without_separator: "Short w/o separator",
};

static SWEDISH_LABELS: Labels = Labels {
    title: "Svenskt Personnummer",
    property: "Egenskap",
    value: "Värde",
    original_number: "Ursprungligt personnummer",
    birth_date_section: "FÖDELSEDATUM",
    century: "Sekel",
    year_two_digits: "År (2 siffror)",
    full_year: "Helt år (4 siffror)",
    month: "Månad",
    day: "Dag",
    full_date: "Fullständigt datum",
    coordination_number: "Samordningsnummer",
    coordination_yes: "Ja (dag + 60)",
    coordination_no: "Nej",
    actual_day: "Verklig dag",
    separator: "SKILJETECKEN",
    birth_number_section: "FÖDELSENUMMER",
    complete_number: "Fullständigt nummer",
    birth_place_digits: "Födelseortssiffror",
    gender_digit: "Könssiffra",
    validation_digit: "Kontrollsiffra",
    derived_section: "HÄRLEDDA EGENSKAPER",
    age: "Ålder",
    gender: "Kön",
    male: "Man",
    female: "Kvinna",
    formats_section: "FORMAT",
    long_without_separator: "Långt (12 siffror) utan skiljetecken",
    long_with_separator: "Långt med skiljetecken",
    short_with_separator: "Kort med skiljetecken",
    short_without_separator: "Kort utan skiljetecken",
};

static ENGLISH_KEYS: Keys = Keys {
    personal_identity_number: "personal_identity_number",
    birth_date: "birth_date",
    century: "century",
    year: "year",
    full_year: "full_year",
    month: "month",
    day: "day",
    iso_date: "iso_date",
    actual_day: "actual_day",
    separator: "separator",
    birth_number: "birth_number",
    complete: "complete",
    birth_place: "birth_place",
    gender_digit: "gender_digit",
    validation_digit: "validation_digit",
    derived_info: "derived_info",
    age: "age",
    gender: "gender",
    male: "male",
    female: "female",
    is_coordination_number: "is_coordination_number",
    formats: "formats",
    long_format: "long_format",
    long_format_with_separator: "long_format_with_separator",
    short_format: "short_format",
    short_format_without_separator: "short_format_without_separator",
};

static SWEDISH_KEYS: Keys = Keys {
    personal_identity_number: "personnummer",
    birth_date: "födelsedatum",
    century: "sekel",
    year: "år",
    full_year: "helt_år",
    month: "månad",
    day: "dag",
    iso_date: "iso_datum",
    actual_day: "verklig_dag",
    separator: "skiljetecken",
    birth_number: "födelsenummer",
    complete: "fullständigt",
    birth_place: "födelseort",
    gender_digit: "könssiffra",
    validation_digit: "kontrollsiffra",
    derived_info: "härledd_info",
    age: "ålder",
    gender: "kön",
    male: "man",
    female: "kvinna",
    is_coordination_number: "är_samordningsnummer",
    formats: "format",
    long_format: "långt_format",
    long_format_with_separator: "långt_format_med_skiljetecken",
    short_format: "kort_format",
    short_format_without_separator: "kort_format_utan_skiljetecken",
};
