//! Date and time helpers for event forms and cards.
//!
//! The backend stores event dates as `YYYY-MM-DD` (sometimes with a time
//! suffix) and start/end times as UTC ISO-8601 timestamps. Form inputs are in
//! the browser's local time.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, SecondsFormat, TimeZone as _, Utc};

/// Parse the date part of a backend date string.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(date_input_value(raw), "%Y-%m-%d").ok()
}

/// The `YYYY-MM-DD` portion suitable for an `<input type="date">`.
pub fn date_input_value(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

/// Combine a form date and time, interpreted at `offset`, into a UTC
/// ISO-8601 timestamp with millisecond precision.
pub fn to_utc_iso(date: &str, time: &str, offset: FixedOffset) -> Option<String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .ok()?;
    let local = offset.from_local_datetime(&date.and_time(time)).single()?;
    Some(local.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// [`to_utc_iso`] using the browser's current UTC offset.
pub fn local_to_utc_iso(date: &str, time: &str) -> Option<String> {
    let offset = *Local::now().offset();
    to_utc_iso(date, time, offset)
}

/// Today's date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole days from `today` until the event date; negative once it has passed.
pub fn days_until(raw: &str, today: NaiveDate) -> Option<i64> {
    parse_event_date(raw).map(|date| (date - today).num_days())
}

/// `"Thursday, May 1, 2025"`, or `"Date not available"` when unparseable.
pub fn format_long_date(raw: &str) -> String {
    parse_event_date(raw).map_or_else(
        || "Date not available".to_owned(),
        |date| date.format("%A, %B %-d, %Y").to_string(),
    )
}

/// `"5/1/2025"`, falling back to the raw string when unparseable.
pub fn format_short_date(raw: &str) -> String {
    parse_event_date(raw).map_or_else(|| raw.to_owned(), |date| date.format("%-m/%-d/%Y").to_string())
}
