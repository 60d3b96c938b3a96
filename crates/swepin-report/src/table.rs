//! Boxed property-table rendering for terminals.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

use swepin_core::PersonalIdentityNumber;

use crate::locale::Language;

/// Render every field and derived property of a record as a two-column
/// table in the given language.
pub fn render_table(pin: &PersonalIdentityNumber, language: Language) -> String {
    let labels = language.labels();
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![labels.property, labels.value]);

    let mut row = |label: &str, value: String| {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    };

    row(labels.title, String::new());
    row(labels.original_number, pin.to_string());

    row(labels.birth_date_section, String::new());
    row(labels.century, pin.century());
    row(labels.year_two_digits, pin.year());
    row(labels.full_year, pin.full_year().to_string());
    row(labels.month, format!("{:02}", pin.month()));
    row(labels.day, format!("{:02}", pin.day()));
    row(labels.full_date, pin.birth_date().format("%Y-%m-%d").to_string());
    if pin.is_coordination_number() {
        row(labels.coordination_number, labels.coordination_yes.to_owned());
        row(labels.actual_day, format!("{:02}", pin.actual_day()));
    } else {
        row(labels.coordination_number, labels.coordination_no.to_owned());
    }

    row(labels.separator, pin.separator().to_string());

    row(labels.birth_number_section, String::new());
    row(labels.complete_number, pin.birth_number());
    row(labels.birth_place_digits, pin.birth_place());
    row(labels.gender_digit, pin.gender_digit().to_string());
    row(labels.validation_digit, pin.check_digit().to_string());

    row(labels.derived_section, String::new());
    row(labels.age, pin.age().to_string());
    row(
        labels.gender,
        if pin.is_male() {
            labels.male.to_owned()
        } else {
            labels.female.to_owned()
        },
    );

    row(labels.formats_section, String::new());
    row(labels.long_without_separator, pin.long_digits());
    row(labels.long_with_separator, pin.long_with_separator());
    row(labels.short_with_separator, pin.short_with_separator());
    row(labels.short_without_separator, pin.short_digits());

    table.to_string()
}
