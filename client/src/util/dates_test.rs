use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// parse_event_date / date_input_value
// =============================================================

#[test]
fn parse_event_date_accepts_plain_and_timestamped_dates() {
    assert_eq!(parse_event_date("2025-05-01"), Some(ymd(2025, 5, 1)));
    assert_eq!(parse_event_date("2025-05-01T00:00:00"), Some(ymd(2025, 5, 1)));
    assert_eq!(parse_event_date("2025-05-01T08:30:00+08:00"), Some(ymd(2025, 5, 1)));
    assert_eq!(parse_event_date("soon"), None);
    assert_eq!(parse_event_date(""), None);
}

#[test]
fn date_input_value_drops_time_suffix() {
    assert_eq!(date_input_value("2025-05-01T00:00:00Z"), "2025-05-01");
    assert_eq!(date_input_value("2025-05-01"), "2025-05-01");
}

// =============================================================
// to_utc_iso
// =============================================================

#[test]
fn to_utc_iso_converts_local_time_to_utc() {
    let manila = FixedOffset::east_opt(8 * 3600).unwrap();
    assert_eq!(
        to_utc_iso("2025-05-01", "09:30", manila),
        Some("2025-05-01T01:30:00.000Z".to_owned())
    );
}

#[test]
fn to_utc_iso_rolls_date_back_across_midnight() {
    let manila = FixedOffset::east_opt(8 * 3600).unwrap();
    assert_eq!(
        to_utc_iso("2025-05-01", "06:00", manila),
        Some("2025-04-30T22:00:00.000Z".to_owned())
    );
}

#[test]
fn to_utc_iso_accepts_seconds_and_rejects_garbage() {
    let utc = FixedOffset::east_opt(0).unwrap();
    assert_eq!(to_utc_iso("2025-05-01", "13:05:07", utc), Some("2025-05-01T13:05:07.000Z".to_owned()));
    assert_eq!(to_utc_iso("2025-05-01", "", utc), None);
    assert_eq!(to_utc_iso("", "10:00", utc), None);
}

// =============================================================
// days_until
// =============================================================

#[test]
fn days_until_counts_whole_days() {
    let today = ymd(2025, 4, 28);
    assert_eq!(days_until("2025-05-01", today), Some(3));
    assert_eq!(days_until("2025-04-28", today), Some(0));
    assert_eq!(days_until("2025-04-27", today), Some(-1));
    assert_eq!(days_until("tbd", today), None);
}

// =============================================================
// formatting
// =============================================================

#[test]
fn format_long_date_spells_out_weekday_and_month() {
    assert_eq!(format_long_date("2025-05-01"), "Thursday, May 1, 2025");
    assert_eq!(format_long_date("not a date"), "Date not available");
}

#[test]
fn format_short_date_uses_month_day_year() {
    assert_eq!(format_short_date("2025-05-01T00:00:00Z"), "5/1/2025");
    assert_eq!(format_short_date("someday"), "someday");
}
