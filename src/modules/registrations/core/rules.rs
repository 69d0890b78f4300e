// Field level rules used by the registration decider.
//
// Boundaries
// - Pure functions over borrowed input. No input or output, no clock.

use chrono::NaiveDate;

pub const CITIZEN_ID_LENGTH: usize = 13;
pub const PHONE_NUMBER_LENGTH: usize = 10;
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

fn is_ascii_digits(value: &str, length: usize) -> bool {
    value.len() == length && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_citizen_id(value: &str) -> bool {
    is_ascii_digits(value, CITIZEN_ID_LENGTH)
}

pub fn is_valid_phone_number(value: &str) -> bool {
    is_ascii_digits(value, PHONE_NUMBER_LENGTH)
}

/// Parses a birth date in strict `YYYY-MM-DD` form.
///
/// Chrono alone accepts unpadded fields such as `1999-5-7`, so the shape is
/// checked before the calendar is consulted.
pub fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_only = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_only {
        return None;
    }
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).ok()
}

/// Whole years between `birth_date` and `today`, or `None` when born after `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

// Any script's digits count, separators aside; exponent forms such as `1e5`
// are caught by the float parser. Values without a digit ("nan", "inf") are text.
fn looks_numeric(value: &str) -> bool {
    if !value.chars().any(char::is_numeric) {
        return false;
    }
    value.parse::<f64>().is_ok()
        || value
            .chars()
            .all(|c| c.is_numeric() || c.is_whitespace() || matches!(c, '.' | ',' | '-' | '+'))
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Names must carry text: blank or number-like values are rejected.
pub fn is_valid_person_name(value: &str) -> bool {
    let trimmed = value.trim();
    !is_blank(trimmed) && !looks_numeric(trimmed)
}

pub fn parse_risk_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
