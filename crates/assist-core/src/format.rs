//! Display helpers shared by every panel renderer.
//!
//! All functions here are pure; the thresholds and lookup tables live on
//! [`ImportanceLevel`] and [`Category`].

use crate::{Category, ImportanceLevel};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

pub const UNKNOWN_DATE: &str = "Unknown date";
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Renders a backend timestamp in the viewer's local time zone.
pub fn format_date(value: Option<&str>) -> String {
    format_date_in(value, &Local)
}

/// Same as [`format_date`] but against an explicit time zone.
pub fn format_date_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return UNKNOWN_DATE.to_string();
    };

    match parse_timestamp(raw) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Accepts RFC 3339, RFC 2822 (mail `Date:` headers) and the offset-less
/// SQLite forms, which are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

pub fn format_importance(importance: f64) -> &'static str {
    ImportanceLevel::from_score(importance).label()
}

pub fn importance_class(importance: f64) -> &'static str {
    ImportanceLevel::from_score(importance).border_class()
}

pub fn category_icon(category: &str) -> &'static str {
    Category::from_label(category).icon()
}

pub fn category_class(category: &str) -> &'static str {
    Category::from_label(category).badge_class()
}
