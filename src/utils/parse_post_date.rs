use crate::types::PostDate;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a date or date-time string down to its calendar date.
///
/// Time-of-day and any UTC offset are discarded; the date is kept as written
/// rather than converted to another time zone. Returns `None` for empty or
/// unrecognized values.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use hashtag_pulse::utils::parse_post_date;
///
/// assert_eq!(
///     parse_post_date("2023-01-15 12:30:00"),
///     NaiveDate::from_ymd_opt(2023, 1, 15)
/// );
/// ```
pub fn parse_post_date(value: &str) -> Option<PostDate> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
}
