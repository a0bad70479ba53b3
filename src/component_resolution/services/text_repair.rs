//! Repair utilities for garbled oracle text.
//!
//! Model output occasionally carries mojibake markers (replacement
//! characters, stray box-drawing glyphs) and raw control bytes. These
//! helpers strip them before records reach callers.

use crate::component_resolution::domain::{AlternativeRecord, ComponentRecord};

/// Removes a fixed set of corruption markers and trims whitespace.
/// Pure and total: any input yields a (possibly empty) string.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| !is_corruption_marker(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_corruption_marker(c: char) -> bool {
    // Replacement character, box-drawing block, diamond glyphs and the
    // lozenge, plus ASCII control bytes.
    c == '\u{FFFD}'
        || ('\u{2500}'..='\u{257F}').contains(&c)
        || c == '\u{25C6}'
        || c == '\u{25C7}'
        || c == '\u{25CA}'
        || (c.is_ascii_control())
}

/// Coerces an arbitrary string into something safe to use as a hyperlink.
///
/// Returns the input unchanged when it already carries an `http(s)` scheme,
/// prefixes `https://` when it looks like a bare domain (contains a dot and
/// no space), and returns an empty string for anything else, including the
/// `"n/a"` and lone em-dash placeholders. Never fails.
pub fn to_safe_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("n/a") || trimmed == "—" {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    if trimmed.contains('.') && !trimmed.contains(' ') {
        return format!("https://{}", trimmed);
    }
    String::new()
}

/// Returns a copy of the record with every string field cleaned.
/// Takes the record by value so cleaning cannot alias a shared record.
pub fn clean_component(mut record: ComponentRecord) -> ComponentRecord {
    record.part_number = clean_text(&record.part_number);
    record.manufacturer = clean_text(&record.manufacturer);
    record.description = clean_text(&record.description);
    record.price = clean_text(&record.price);
    record.datasheet_link = clean_text(&record.datasheet_link);
    record.part_status = clean_text(&record.part_status);
    record.rohs_status = clean_text(&record.rohs_status);
    record.reach_status = clean_text(&record.reach_status);
    record.specs = record.specs.iter().map(|s| clean_text(s)).collect();
    record
}

/// [`clean_component`] plus the justification field.
pub fn clean_alternative(mut alternative: AlternativeRecord) -> AlternativeRecord {
    alternative.component = clean_component(alternative.component);
    alternative.justification = clean_text(&alternative.justification);
    alternative
}
