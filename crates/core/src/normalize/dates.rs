//! Two-tier invoice date parsing.
//!
//! The provider's contract is `DD/MM/YYYY`, but real exports mix in
//! single-digit days and months and alternate separators. The strict
//! pattern is tried first; survivors of a strict failure get one lenient,
//! day-first retry. Rows failing both are dropped by the caller.

use chrono::NaiveDate;

/// Strict provider date format.
pub const STRICT_FORMAT: &str = "%d/%m/%Y";

/// Parses a date under the strict `DD/MM/YYYY` contract only.
///
/// chrono tolerates unpadded day/month fields, so the 10-character shape
/// is checked first; `1/5/2025` must fall through to the lenient tier.
#[must_use]
pub fn parse_strict(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, STRICT_FORMAT).ok()
}

/// Parses a date strictly, falling back to the lenient day-first parser.
#[must_use]
pub fn parse_with_fallback(text: &str) -> Option<NaiveDate> {
    parse_strict(text).or_else(|| parse_lenient(text))
}

/// Lenient day-first parser.
///
/// Accepts `/`, `-` and `.` separators and 1-2 digit day/month fields.
/// A leading 4-digit field is taken as a year (ISO-style `YYYY-MM-DD`);
/// otherwise the order is day-first per the provider convention. Ambiguous
/// `MM/DD` vs `DD/MM` inputs are resolved day-first; a file mixing both
/// conventions cannot be disambiguated by format alone.
#[must_use]
pub fn parse_lenient(text: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = text
        .trim()
        .split(['/', '-', '.'])
        .map(str::trim)
        .collect();
    if fields.len() != 3 || fields.iter().any(|f| f.is_empty()) {
        return None;
    }
    if !fields.iter().all(|f| f.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }

    let (year, month, day) = if fields[0].len() == 4 {
        (fields[0], fields[1], fields[2])
    } else if fields[2].len() == 4 {
        (fields[2], fields[1], fields[0])
    } else {
        return None;
    };

    if month.len() > 2 || day.len() > 2 {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}
