//! Date/time helpers shared by the services.
//!
//! All naive values are interpreted as UTC. The Java-style patterns the
//! original wire formats used map onto `chrono` format strings here.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, ParseError, Utc};

/// `yyyy-MM-dd HH:mm:ss`
pub const DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";
/// `yyyy-MM-dd`
pub const DATE_PATTERN: &str = "%Y-%m-%d";
/// `HH:mm:ss`
pub const TIME_PATTERN: &str = "%H:%M:%S";
/// `yyyyMMddHHmmss`
pub const DATETIME_COMPACT_PATTERN: &str = "%Y%m%d%H%M%S";

/// UTC+8, the exchange's listing timezone. Hong Kong does not observe DST,
/// so a fixed offset is exact.
pub fn hong_kong_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("+08:00 is a valid offset")
}

/// Current unix time in milliseconds.
pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis() as u64
}

/// Current unix time in seconds.
pub fn now_seconds() -> u64 {
    Utc::now().timestamp() as u64
}

/// Current UTC wall-clock time.
pub fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Current Hong Kong wall-clock time.
pub fn now_hong_kong() -> NaiveDateTime {
    Utc::now().with_timezone(&hong_kong_offset()).naive_local()
}

/// Converts a UTC datetime to unix milliseconds.
pub fn to_timestamp(datetime: NaiveDateTime) -> i64 {
    datetime.and_utc().timestamp_millis()
}

/// Converts unix milliseconds to a UTC datetime. Returns `None` for values
/// outside chrono's representable range.
pub fn from_timestamp(millis: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Formats with the default `yyyy-MM-dd HH:mm:ss` pattern.
pub fn format(datetime: NaiveDateTime) -> String {
    format_with(datetime, DATETIME_PATTERN)
}

/// Formats with an explicit pattern.
pub fn format_with(datetime: NaiveDateTime, pattern: &str) -> String {
    datetime.format(pattern).to_string()
}

/// Parses with the default `yyyy-MM-dd HH:mm:ss` pattern.
pub fn parse(value: &str) -> Result<NaiveDateTime, ParseError> {
    parse_with(value, DATETIME_PATTERN)
}

/// Parses with an explicit pattern.
pub fn parse_with(value: &str, pattern: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value, pattern)
}

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).expect("midnight always exists")
}

/// The last representable instant of `date` (23:59:59.999999999).
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("end of day always exists")
}

/// Midnight at the start of today, UTC.
pub fn start_of_today() -> NaiveDateTime {
    start_of_day(Utc::now().date_naive())
}

/// The last representable instant of today, UTC.
pub fn end_of_today() -> NaiveDateTime {
    end_of_day(Utc::now().date_naive())
}

/// Whole days from `start` to `end` (negative if `end` is earlier).
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_days()
}

/// Whole hours from `start` to `end`.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_hours()
}

/// Whole minutes from `start` to `end`.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Whole seconds from `start` to `end`.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds()
}

/// Shifts a datetime forward by `days` (backward when negative).
pub fn plus_days(datetime: NaiveDateTime, days: i64) -> NaiveDateTime {
    datetime + chrono::Duration::days(days)
}

/// Shifts a datetime forward by `hours` (backward when negative).
pub fn plus_hours(datetime: NaiveDateTime, hours: i64) -> NaiveDateTime {
    datetime + chrono::Duration::hours(hours)
}

/// Shifts a datetime forward by `minutes` (backward when negative).
pub fn plus_minutes(datetime: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    datetime + chrono::Duration::minutes(minutes)
}

/// Whether `target` lies in the inclusive range `[start, end]`.
pub fn is_between(target: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    target >= start && target <= end
}

/// Whether `expire_time` has already passed (compared against UTC now).
pub fn is_expired(expire_time: NaiveDateTime) -> bool {
    now_utc() > expire_time
}

/// `yyyyMMddHHmmss` stamp of the current UTC time, handy for filenames and
/// batch identifiers.
pub fn compact_now() -> String {
    format_with(now_utc(), DATETIME_COMPACT_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        parse("2024-06-15 08:30:45").unwrap()
    }

    #[test]
    fn format_parse_round_trip() {
        let dt = sample();
        assert_eq!(format(dt), "2024-06-15 08:30:45");
        assert_eq!(parse(&format(dt)).unwrap(), dt);
        assert_eq!(format_with(dt, DATETIME_COMPACT_PATTERN), "20240615083045");
        assert!(parse("not a date").is_err());
    }

    #[test]
    fn timestamp_round_trip() {
        let dt = sample();
        let millis = to_timestamp(dt);
        assert_eq!(from_timestamp(millis).unwrap(), dt);
        assert_eq!(from_timestamp(i64::MAX), None);
    }

    #[test]
    fn day_boundaries() {
        let date = sample().date();
        assert_eq!(format(start_of_day(date)), "2024-06-15 00:00:00");
        assert_eq!(format(end_of_day(date)), "2024-06-15 23:59:59");
        assert!(end_of_day(date) > start_of_day(date));
    }

    #[test]
    fn differences_and_shifts() {
        let start = sample();
        let end = plus_days(plus_hours(start, 3), 2);
        assert_eq!(days_between(start, end), 2);
        assert_eq!(hours_between(start, end), 51);
        assert_eq!(minutes_between(start, plus_minutes(start, 90)), 90);
        assert_eq!(seconds_between(end, start), -51 * 3600);
    }

    #[test]
    fn range_and_expiry_checks() {
        let start = sample();
        let end = plus_hours(start, 1);
        assert!(is_between(plus_minutes(start, 30), start, end));
        assert!(is_between(start, start, end));
        assert!(!is_between(plus_hours(start, 2), start, end));

        assert!(is_expired(sample()));
        assert!(!is_expired(plus_days(now_utc(), 1)));
    }

    #[test]
    fn hong_kong_is_eight_hours_ahead() {
        let delta = seconds_between(now_utc(), now_hong_kong());
        assert!((delta - 8 * 3600).abs() < 5);
    }
}
