//! Display formatting for employee profile fields.
//!
//! Every function here is total: it never fails and always returns a
//! string suitable for a read-only input. Values that cannot be interpreted
//! are shown as the raw transport text.

use crate::{EmploymentStatus, EmploymentType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// German short date, e.g. `15.01.2023`.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// Map an employment type code to its label (`FULL_TIME` -> `Vollzeit`).
///
/// Unrecognized codes pass through unchanged; `None` yields `""`.
pub fn format_employment_type(raw: Option<&str>) -> String {
    raw.map(|code| EmploymentType::from_code(code).label().to_string())
        .unwrap_or_default()
}

/// Map an employment status code to its label (`ON_LEAVE` -> `Beurlaubt`).
///
/// Unrecognized codes pass through unchanged; `None` yields `""`.
pub fn format_employment_status(raw: Option<&str>) -> String {
    raw.map(|code| EmploymentStatus::from_code(code).label().to_string())
        .unwrap_or_default()
}

/// Format a transport date as `DD.MM.YYYY`.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM:SS`.
/// The calendar date is taken as written; no time zone conversion happens.
/// Empty input gives `""`, anything unparseable is returned unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if raw.trim().is_empty() {
        return String::new();
    }
    match parse_date(raw.trim()) {
        Some(date) => date.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|datetime| datetime.date())
}

/// Percent-decode one name component.
///
/// Sequences that do not decode to valid UTF-8 leave the whole component as
/// raw text. `+` is not treated as a space.
pub fn decode_component(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// Decode and join a first and last name with a single space.
///
/// Each decoded part is trimmed. An empty side contributes no separator:
/// `("Max", "")` gives `"Max"` and `("", "")` gives `""`.
pub fn format_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = decode_component(first.unwrap_or_default()).trim().to_string();
    let last = decode_component(last.unwrap_or_default()).trim().to_string();

    match (first.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (false, true) => first,
        (true, false) => last,
        (false, false) => format!("{first} {last}"),
    }
}

/// Upper-cased first letters of the decoded first and last name (`"AM"`).
pub fn initials(first: Option<&str>, last: Option<&str>) -> String {
    [first, last]
        .into_iter()
        .filter_map(|part| decode_component(part.unwrap_or_default()).trim().chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
