//! Date bucketing helpers.
//!
//! Every aggregation in this crate joins records on a canonical day key:
//! the timestamp truncated to the start of its UTC calendar day. Two
//! timestamps on the same calendar day always collide to the same key.

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};

/// Truncate a timestamp to the start of its UTC calendar day
pub fn beginning_of_day(date: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.date_naive().and_time(NaiveTime::MIN))
}

/// Whether two timestamps fall on the same UTC calendar day
pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Days until the next Saturday, 0 if `date` is already a Saturday
pub fn days_until_next_saturday(date: DateTime<Utc>) -> i64 {
    let saturday = Weekday::Sat.num_days_from_sunday() as i64;
    let today = date.weekday().num_days_from_sunday() as i64;
    (saturday - today).rem_euclid(7)
}

/// The timestamp `days` days before `date`
pub fn days_ago(date: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    date - Duration::days(days)
}
