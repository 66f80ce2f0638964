//! Daily log aggregation.
//!
//! Merges exact-timestamp symptom log entries and daily check-ins into
//! per-day buckets keyed by start-of-day. Only days with at least one
//! record appear; gap-filling belongs to the calendar window builder.

use crate::datetime::beginning_of_day;
use crate::{DailyCheckIn, DayLogData, SymptomLogEntry};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Combine symptom log entries and daily check-ins into day buckets,
/// sorted by date descending.
///
/// Entries within a day are sorted ascending by their exact timestamps.
/// A check-in whose day already has a bucket is attached to it, replacing
/// any earlier check-in for that day; otherwise it creates a bucket with
/// an empty entry list. Inputs are never mutated.
pub fn combine_symptom_and_check_in_logs(
    log_entries: &[SymptomLogEntry],
    check_ins: &[DailyCheckIn],
) -> Vec<DayLogData> {
    let mut buckets: BTreeMap<DateTime<Utc>, DayLogData> = BTreeMap::new();

    for entry in log_entries {
        let key = beginning_of_day(entry.date);
        buckets
            .entry(key)
            .or_insert_with(|| empty_bucket(key))
            .log_entries
            .push(entry.clone());
    }

    for bucket in buckets.values_mut() {
        bucket.log_entries.sort_by_key(|entry| entry.date);
    }

    for check_in in check_ins {
        let key = beginning_of_day(check_in.date);
        buckets.entry(key).or_insert_with(|| empty_bucket(key)).check_in = Some(*check_in);
    }

    buckets.into_values().rev().collect()
}

fn empty_bucket(date: DateTime<Utc>) -> DayLogData {
    DayLogData {
        date,
        check_in: None,
        log_entries: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckInStatus, Symptom};
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn entry(id: &str, date: DateTime<Utc>, symptoms: &[Symptom]) -> SymptomLogEntry {
        SymptomLogEntry {
            id: id.into(),
            date,
            symptoms: symptoms.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_groups_entries_by_day_with_entries_sorted() {
        let earlier_one = entry(
            "1",
            Utc.with_ymd_and_hms(2020, 9, 21, 10, 0, 0).unwrap(),
            &[Symptom::Fever, Symptom::Cough],
        );
        let earlier_two = entry(
            "2",
            Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap(),
            &[Symptom::Fever],
        );
        let middle_one = entry(
            "3",
            Utc.with_ymd_and_hms(2020, 9, 22, 10, 0, 0).unwrap(),
            &[Symptom::Fever],
        );
        let middle_two = entry(
            "4",
            Utc.with_ymd_and_hms(2020, 9, 22, 12, 0, 0).unwrap(),
            &[Symptom::Cough],
        );
        let recent = entry(
            "5",
            Utc.with_ymd_and_hms(2020, 9, 23, 12, 0, 0).unwrap(),
            &[Symptom::Cough],
        );

        // Deliberately unsorted input
        let result = combine_symptom_and_check_in_logs(
            &[
                middle_two.clone(),
                recent.clone(),
                earlier_one.clone(),
                middle_one.clone(),
                earlier_two.clone(),
            ],
            &[],
        );

        assert_eq!(result.len(), 3);

        assert_eq!(
            result[0].date,
            Utc.with_ymd_and_hms(2020, 9, 23, 0, 0, 0).unwrap()
        );
        assert_eq!(result[0].log_entries, vec![recent]);
        assert_eq!(result[0].check_in, None);

        assert_eq!(result[1].log_entries, vec![middle_one, middle_two]);
        assert_eq!(result[2].log_entries, vec![earlier_one, earlier_two]);
    }

    #[test]
    fn test_combines_entries_with_check_ins() {
        let log_entry = entry(
            "1",
            Utc.with_ymd_and_hms(2020, 9, 21, 10, 0, 0).unwrap(),
            &[Symptom::Fever, Symptom::Cough],
        );
        let same_day_check_in = DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap(),
            status: CheckInStatus::FeelingGood,
        };
        let earlier_check_in = DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 20, 12, 0, 0).unwrap(),
            status: CheckInStatus::NotCheckedIn,
        };
        let later_check_in = DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 22, 12, 0, 0).unwrap(),
            status: CheckInStatus::FeelingNotWell,
        };

        let result = combine_symptom_and_check_in_logs(
            &[log_entry.clone()],
            &[same_day_check_in, later_check_in, earlier_check_in],
        );

        assert_eq!(result.len(), 3);

        assert_eq!(result[0].check_in, Some(later_check_in));
        assert!(result[0].log_entries.is_empty());

        assert_eq!(result[1].check_in, Some(same_day_check_in));
        assert_eq!(result[1].log_entries, vec![log_entry]);

        assert_eq!(result[2].check_in, Some(earlier_check_in));
        assert!(result[2].log_entries.is_empty());
    }

    #[test]
    fn test_later_check_in_replaces_earlier_same_day() {
        let morning = DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 21, 8, 0, 0).unwrap(),
            status: CheckInStatus::FeelingGood,
        };
        let evening = DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 21, 20, 0, 0).unwrap(),
            status: CheckInStatus::FeelingNotWell,
        };

        let result = combine_symptom_and_check_in_logs(&[], &[morning, evening]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].check_in, Some(evening));
    }

    #[test]
    fn test_empty_inputs_produce_no_buckets() {
        assert!(combine_symptom_and_check_in_logs(&[], &[]).is_empty());
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let entries = [entry(
            "1",
            Utc.with_ymd_and_hms(2020, 9, 21, 10, 0, 0).unwrap(),
            &[Symptom::Fever],
        )];
        let check_ins = [DailyCheckIn {
            date: Utc.with_ymd_and_hms(2020, 9, 20, 9, 0, 0).unwrap(),
            status: CheckInStatus::FeelingGood,
        }];

        let first = combine_symptom_and_check_in_logs(&entries, &check_ins);
        let second = combine_symptom_and_check_in_logs(&entries, &check_ins);

        assert_eq!(first, second);
    }
}
