//! Date/time helpers for the booking payload.
//!
//! The data source formats dates as `YYYY-MM-DD` (sometimes with a trailing
//! `T...` time part) and times as `HH:MM` or `HH:MM:SS`. Anything that does
//! not parse degrades to `None`/zero instead of erroring, so callers can
//! keep the never-throw policy of the aggregation layer.

use chrono::{Locale, NaiveDate, NaiveTime};

/// Locale used for month and weekday display names, matching the data source.
const DISPLAY_LOCALE: Locale = Locale::th_TH;

/// Parse the calendar-date part of a payload date string.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Calendar year of a payload date string, `None` when it does not parse.
pub fn booking_year(raw: &str) -> Option<i32> {
    use chrono::Datelike;
    parse_booking_date(raw).map(|d| d.year())
}

/// Locale-formatted name of a calendar month (1-12).
pub fn month_name(month: u32) -> String {
    match NaiveDate::from_ymd_opt(2000, month, 1) {
        Some(d) => d.format_localized("%B", DISPLAY_LOCALE).to_string(),
        None => String::new(),
    }
}

/// Locale-formatted weekday name of a date.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format_localized("%A", DISPLAY_LOCALE).to_string()
}

fn parse_booking_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
}

/// Booking length in hours, end minus start on the same calendar date.
///
/// Unparseable times contribute 0 hours rather than poisoning an average.
pub fn duration_hours(start: &str, end: &str) -> f64 {
    match (parse_booking_time(start), parse_booking_time(end)) {
        (Some(s), Some(e)) => (e - s).num_seconds() as f64 / 3600.0,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamped_dates() {
        assert_eq!(booking_year("2024-03-15"), Some(2024));
        assert_eq!(booking_year("2024-03-15T14:02:26.123Z"), Some(2024));
        assert_eq!(booking_year("15/03/2024"), None);
        assert_eq!(booking_year(""), None);
    }

    #[test]
    fn month_names_are_complete_and_distinct() {
        let names: Vec<String> = (1..=12).map(month_name).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        for i in 0..12 {
            for j in (i + 1)..12 {
                assert_ne!(names[i], names[j]);
            }
        }
        assert_eq!(month_name(13), "");
    }

    #[test]
    fn weekday_names_are_distinct_over_a_week() {
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let names: Vec<String> = (0..7)
            .map(|i| weekday_name(monday + chrono::Duration::days(i)))
            .collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        for i in 0..7 {
            for j in (i + 1)..7 {
                assert_ne!(names[i], names[j]);
            }
        }
    }

    #[test]
    fn duration_in_hours() {
        assert_eq!(duration_hours("09:00", "12:00"), 3.0);
        assert_eq!(duration_hours("09:00:00", "10:30:00"), 1.5);
        assert_eq!(duration_hours("13:15", "13:15"), 0.0);
        // End before start stays signed, as derived from the raw fields.
        assert_eq!(duration_hours("14:00", "13:00"), -1.0);
    }

    #[test]
    fn bad_times_contribute_zero() {
        assert_eq!(duration_hours("", "12:00"), 0.0);
        assert_eq!(duration_hours("9am", "noon"), 0.0);
    }
}
