//! Structured JSON report over a validated record.
//!
//! The key names themselves are localized (the Swedish report says
//! `personnummer`, not `personal_identity_number`), so the document is built
//! as a `serde_json::Value` through the language key table rather than a
//! fixed serde struct.

use serde_json::{json, Value};

use swepin_core::PersonalIdentityNumber;

use crate::locale::Language;

/// Build the JSON report for a record in the given language.
pub fn report(pin: &PersonalIdentityNumber, language: Language) -> Value {
    let keys = language.keys();

    let mut birth_date = json!({
        (keys.century): pin.century(),
        (keys.year): pin.year(),
        (keys.full_year): pin.full_year(),
        (keys.month): format!("{:02}", pin.month()),
        (keys.day): format!("{:02}", pin.day()),
        (keys.iso_date): pin.birth_date().format("%Y-%m-%d").to_string(),
    });
    if pin.is_coordination_number() {
        birth_date[keys.actual_day] = json!(pin.actual_day());
    }

    json!({
        (keys.personal_identity_number): pin.to_string(),
        (keys.birth_date): birth_date,
        (keys.separator): pin.separator().to_string(),
        (keys.birth_number): json!({
            (keys.complete): pin.birth_number(),
            (keys.birth_place): pin.birth_place(),
            (keys.gender_digit): pin.gender_digit().to_string(),
        }),
        (keys.validation_digit): pin.check_digit().to_string(),
        (keys.derived_info): json!({
            (keys.age): pin.age(),
            (keys.gender): if pin.is_male() { keys.male } else { keys.female },
            (keys.is_coordination_number): pin.is_coordination_number(),
        }),
        (keys.formats): json!({
            (keys.long_format): pin.long_digits(),
            (keys.long_format_with_separator): pin.long_with_separator(),
            (keys.short_format): pin.short_with_separator(),
            (keys.short_format_without_separator): pin.short_digits(),
        }),
    })
}

/// The JSON report serialized to a string. Never fails: a `Value` always
/// renders.
pub fn report_json(pin: &PersonalIdentityNumber, language: Language) -> String {
    report(pin, language).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pin() -> PersonalIdentityNumber {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        PersonalIdentityNumber::parse_at("19801224-1231", reference).unwrap()
    }

    #[test]
    fn test_english_report_shape() {
        let value = report(&pin(), Language::English);
        assert_eq!(value["personal_identity_number"], "801224-1231");
        assert_eq!(value["birth_date"]["full_year"], 1980);
        assert_eq!(value["birth_date"]["iso_date"], "1980-12-24");
        assert_eq!(value["separator"], "-");
        assert_eq!(value["birth_number"]["complete"], "123");
        assert_eq!(value["validation_digit"], "1");
        assert_eq!(value["derived_info"]["age"], 43);
        assert_eq!(value["derived_info"]["gender"], "male");
        assert_eq!(value["derived_info"]["is_coordination_number"], false);
        assert_eq!(value["formats"]["long_format"], "198012241231");
    }

    #[test]
    fn test_swedish_report_keys() {
        let value = report(&pin(), Language::Swedish);
        assert_eq!(value["personnummer"], "801224-1231");
        assert_eq!(value["födelsedatum"]["helt_år"], 1980);
        assert_eq!(value["härledd_info"]["kön"], "man");
        assert!(value.get("personal_identity_number").is_none());
    }

    #[test]
    fn test_actual_day_only_for_coordination_numbers() {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let coordination =
            PersonalIdentityNumber::parse_at("19801284-1238", reference).unwrap();
        let value = report(&coordination, Language::English);
        assert_eq!(value["birth_date"]["actual_day"], 24);
        assert_eq!(value["derived_info"]["is_coordination_number"], true);

        let ordinary = report(&pin(), Language::English);
        assert!(ordinary["birth_date"].get("actual_day").is_none());
    }

    #[test]
    fn test_report_json_round_trips_through_serde() {
        let text = report_json(&pin(), Language::English);
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report(&pin(), Language::English));
    }
}
