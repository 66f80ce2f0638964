//! Calendar window builder.
//!
//! Produces a fixed-length, gap-free run of day buckets ending on the
//! nearest upcoming Saturday, so the UI can render whole calendar weeks.
//! Days without user input are backfilled with a not-checked-in default.

use crate::datetime::{beginning_of_day, days_until_next_saturday, is_same_day};
use chrono::{DateTime, Duration, Utc};

use crate::{CheckInStatus, DailyCheckIn, DayLogData};

/// Build a `day_count`-day window of day buckets, oldest first, anchored
/// so the last bucket falls on the first Saturday on or after `now`.
///
/// Days present in `log_data` are used as-is; every other day gets a
/// default bucket with an empty entry list and a `NotCheckedIn` check-in.
/// The result always has length exactly `day_count`.
pub fn to_log_data_history(
    now: DateTime<Utc>,
    day_count: usize,
    log_data: &[DayLogData],
) -> Vec<DayLogData> {
    let next_saturday = beginning_of_day(now + Duration::days(days_until_next_saturday(now)));

    (0..day_count)
        .rev()
        .map(|days_back| {
            let key = next_saturday - Duration::days(days_back as i64);
            log_data
                .iter()
                .find(|data| is_same_day(data.date, key))
                .cloned()
                .unwrap_or_else(|| default_bucket(key))
        })
        .collect()
}

fn default_bucket(date: DateTime<Utc>) -> DayLogData {
    DayLogData {
        date,
        check_in: Some(DailyCheckIn {
            date,
            status: CheckInStatus::NotCheckedIn,
        }),
        log_entries: Vec::new(),
    }
}
