//! Calendar helpers shared by the filters and the views.
//!
//! Record dates carry no time of day; they are taken as local midnight.
//! "Now" is always passed in so every view is reproducible from
//! `(records, budget, now)`.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Spellings accepted for a record date, canonical form first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Wall-clock now, local time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Fractional days between `date` (at midnight) and `now`.
///
/// Not rounded: a record dated today is `0.x` days old depending on the
/// time of day. `None` when the date does not parse; such a record fails
/// every `<= n` comparison.
pub(crate) fn days_ago(date: &str, now: NaiveDateTime) -> Option<f64> {
    let midnight = parse_date(date)?.and_time(NaiveTime::MIN);
    let elapsed = now.signed_duration_since(midnight);
    Some(elapsed.num_milliseconds() as f64 / MS_PER_DAY)
}

/// `month0` is zero-based (January = 0).
pub(crate) fn in_calendar_month(date: &str, year: i32, month0: u32) -> bool {
    parse_date(date).is_some_and(|d| d.year() == year && d.month0() == month0)
}

pub(crate) fn in_calendar_year(date: &str, year: i32) -> bool {
    parse_date(date).is_some_and(|d| d.year() == year)
}

/// Display form, e.g. "24 Jan 2026". Unparsable input is returned unchanged.
pub(crate) fn format_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn at(date: &str, h: u32, m: u32) -> NaiveDateTime {
        parse_date(date).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 1, 24).unwrap();
        assert_eq!(parse_date("2026-01-24"), Some(expected));
        assert_eq!(parse_date("2026/01/24"), Some(expected));
        assert_eq!(parse_date("01/24/2026"), Some(expected));
        assert_eq!(parse_date(" 2026-01-24 "), Some(expected));
        assert_eq!(parse_date("2026-01-24T18:30:00+05:30"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_days_ago_is_fractional() {
        let now = at("2026-01-25", 12, 0);
        assert_eq!(days_ago("2026-01-25", now), Some(0.5));
        assert_eq!(days_ago("2026-01-24", now), Some(1.5));
    }

    #[test]
    fn test_days_ago_future_is_negative() {
        let now = at("2026-01-25", 0, 0);
        assert_eq!(days_ago("2026-01-27", now), Some(-2.0));
    }

    #[test]
    fn test_days_ago_unparsable() {
        assert_eq!(days_ago("not a date", at("2026-01-25", 0, 0)), None);
    }

    #[test]
    fn test_in_calendar_month() {
        assert!(in_calendar_month("2026-01-31", 2026, 0));
        assert!(!in_calendar_month("2026-02-01", 2026, 0));
        assert!(!in_calendar_month("2025-01-15", 2026, 0));
        assert!(!in_calendar_month("garbage", 2026, 0));
    }

    #[test]
    fn test_in_calendar_year() {
        assert!(in_calendar_year("2026-12-31", 2026));
        assert!(!in_calendar_year("2025-12-31", 2026));
        assert!(!in_calendar_year("", 2026));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-01-05"), "05 Jan 2026");
        assert_eq!(format_date("someday"), "someday");
    }
}
