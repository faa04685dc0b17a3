//! Due-date parsing and rendering.
//!
//! Due dates are persisted as RFC 3339 strings in UTC with millisecond
//! precision (`2026-10-16T09:30:00.000Z`). Every stored value has the same
//! width and offset, so ordering the column as text is chronological.
//!
//! Older rows and hand-edited databases may hold naive timestamps or plain
//! dates; [`parse_due_date`] accepts those and interprets them in the zone of
//! the reference clock.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use std::fmt::Write;

/// Display format used when the configuration does not override it.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d, %Y • %I:%M %p";

const NAIVE_DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a stored or user-entered due date into the time zone `tz`.
///
/// Returns `None` for text that matches none of the accepted encodings. A
/// naive time skipped by a daylight-saving jump is moved forward by an hour.
pub fn parse_due_date<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(tz));
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| NaiveDate::parse_from_str(value, DATE_FORMAT).ok().and_then(|d| d.and_hms_opt(0, 0, 0)))?;

    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
}

/// Encodes an instant the way due dates are stored.
pub fn to_storage<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Whether `format` is a `chrono` strftime string without unknown specifiers.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Renders a stored due date for display in the zone of `tz`.
///
/// Unparseable values are shown as stored. A format `chrono` cannot render
/// falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_due_date<Tz: TimeZone>(value: &str, tz: &Tz, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Some(dt) = parse_due_date(value, tz) else {
        return value.to_string();
    };

    let mut rendered = String::new();
    if write!(rendered, "{}", dt.format(format)).is_ok() {
        return rendered;
    }

    rendered.clear();
    match write!(rendered, "{}", dt.format(DEFAULT_DATE_FORMAT)) {
        Ok(()) => rendered,
        Err(_) => value.to_string(),
    }
}
