//! Field parsers
//!
//! Each parser takes an already trimmed, non-blank value and returns `None`
//! when the value does not have the expected shape.

use chrono::NaiveDate;

use super::record::{Ssn, ZipCode};

/// Date template, `MM/dd/yyyy`
pub const DATE_FORMAT: &str = "%m/%d/%Y";
/// Exact number of characters in a state
pub const STATE_LENGTH: usize = 2;
/// Exact number of digits in a project number
pub const PROJECT_NUMBER_LENGTH: usize = 4;
/// Exact number of digits before the zip code dash
pub const ZIP_BASE_LENGTH: usize = 5;
/// Exact number of digits after the zip code dash
pub const ZIP_EXTENSION_LENGTH: usize = 4;

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn without_spaces(value: &str) -> String {
    value.chars().filter(|c| *c != ' ').collect()
}

/// Parse a `MM/dd/yyyy` date; spaces anywhere in the value are ignored
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&without_spaces(value), DATE_FORMAT).ok()
}

/// Parse three dash separated groups of digits; spaces are ignored
pub fn parse_ssn(value: &str) -> Option<Ssn> {
    let compact = without_spaces(value);
    let groups: Vec<&str> = compact.split('-').collect();

    match groups.as_slice() {
        [area, group, serial] if is_digits(area) && is_digits(group) && is_digits(serial) => {
            Some(Ssn {
                area: area.parse().ok()?,
                group: group.parse().ok()?,
                serial: serial.parse().ok()?,
            })
        }
        _ => None,
    }
}

/// Parse exactly four digits
pub fn parse_project_number(value: &str) -> Option<u16> {
    let trimmed = value.trim();
    if trimmed.len() != PROJECT_NUMBER_LENGTH || !is_digits(trimmed) {
        return None;
    }
    trimmed.parse().ok()
}

/// Accept exactly two characters; the value itself is not checked
pub fn parse_state(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (trimmed.chars().count() == STATE_LENGTH).then(|| trimmed.to_string())
}

/// Parse `#####` or `#####-####`
///
/// A malformed extension is dropped rather than rejected.
pub fn parse_zip_code(value: &str) -> Option<ZipCode> {
    let mut segments = value.split('-');
    let base = segments.next()?.trim();

    if base.len() != ZIP_BASE_LENGTH || !is_digits(base) {
        return None;
    }
    let base = base.parse().ok()?;

    let extension = segments
        .next()
        .map(str::trim)
        .filter(|ext| ext.len() == ZIP_EXTENSION_LENGTH && is_digits(ext))
        .and_then(|ext| ext.parse().ok());

    Some(ZipCode { base, extension })
}
