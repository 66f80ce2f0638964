//! 14-day rolling symptom history.
//!
//! Unlike the Saturday-aligned calendar window, the history is anchored
//! at "today" and always spans exactly the 14 days ending today. Raw
//! entries from the native store are folded into the seeded window by
//! symptom-set union; entries outside the span are ignored.

use crate::datetime::{beginning_of_day, is_same_day};
use crate::{RawEntry, Symptom, SymptomEntry};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeSet;

/// Number of days covered by the rolling history
pub const HISTORY_DAYS: usize = 14;

/// Fold raw store entries into a 14-day history anchored at `today`,
/// ordered newest first.
///
/// Unrecognized symptom tags inside a raw entry are dropped, never an
/// error. When two entries collide on the same day the first-encountered
/// entry keeps its id and date while the symptom sets are unioned.
pub fn to_symptom_history(today: DateTime<Utc>, raw_entries: &[RawEntry]) -> Vec<SymptomEntry> {
    let mut history = blank_history(today, HISTORY_DAYS);

    for raw_entry in raw_entries {
        add_entry(to_entry(raw_entry), &mut history);
    }

    history
}

fn to_entry(raw_entry: &RawEntry) -> SymptomEntry {
    let symptoms: BTreeSet<Symptom> = raw_entry
        .symptoms
        .iter()
        .filter_map(|raw| Symptom::from_tag(raw))
        .collect();

    SymptomEntry::Symptoms {
        id: raw_entry.id.clone(),
        date: raw_entry.date,
        symptoms,
    }
}

fn add_entry(entry: SymptomEntry, history: &mut [SymptomEntry]) {
    for slot in history.iter_mut() {
        if is_same_day(entry.date(), slot.date()) {
            *slot = combine_entries(slot, &entry);
        }
    }
}

/// Combine the bucket already in the history with an incoming entry for
/// the same day. The existing entry's id and date win on a
/// user-input/user-input collision; only the symptom sets are merged.
fn combine_entries(existing: &SymptomEntry, incoming: &SymptomEntry) -> SymptomEntry {
    match (existing, incoming) {
        (SymptomEntry::NoData { .. }, entry @ SymptomEntry::Symptoms { .. }) => entry.clone(),
        (
            SymptomEntry::Symptoms { id, date, symptoms },
            SymptomEntry::Symptoms {
                symptoms: incoming_symptoms,
                ..
            },
        ) => SymptomEntry::Symptoms {
            id: id.clone(),
            date: *date,
            symptoms: symptoms.union(incoming_symptoms).copied().collect(),
        },
        _ => existing.clone(),
    }
}

fn blank_history(today: DateTime<Utc>, total_days: usize) -> Vec<SymptomEntry> {
    (0..total_days)
        .map(|days_back| SymptomEntry::NoData {
            date: beginning_of_day(today - Duration::days(days_back as i64)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn raw(id: &str, date: DateTime<Utc>, symptoms: &[&str]) -> RawEntry {
        RawEntry {
            id: id.into(),
            date,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn symptom_set(symptoms: &[Symptom]) -> BTreeSet<Symptom> {
        symptoms.iter().copied().collect()
    }

    #[test]
    fn test_empty_entries_yield_fourteen_blank_days() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 10, 0, 0).unwrap();

        let history = to_symptom_history(today, &[]);

        assert_eq!(history.len(), 14);
        for (days_back, entry) in history.iter().enumerate() {
            let expected = beginning_of_day(today - Duration::days(days_back as i64));
            assert_eq!(entry, &SymptomEntry::NoData { date: expected });
        }
    }

    #[test]
    fn test_same_day_entries_union_symptom_sets() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap();
        let entries = [
            raw("1", today, &["cough"]),
            raw("2", today, &["fever"]),
        ];

        let history = to_symptom_history(today, &entries);

        match &history[0] {
            SymptomEntry::Symptoms { id, symptoms, .. } => {
                // The first-encountered entry keeps its id
                assert_eq!(id, "1");
                assert_eq!(symptoms, &symptom_set(&[Symptom::Cough, Symptom::Fever]));
            }
            other => panic!("expected merged symptoms for today, got {:?}", other),
        }

        for entry in &history[1..] {
            assert!(matches!(entry, SymptomEntry::NoData { .. }));
        }
    }

    #[test]
    fn test_unknown_tags_are_dropped() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap();
        let entries = [raw("1", today, &["cough", "sniffles", "fever"])];

        let history = to_symptom_history(today, &entries);

        match &history[0] {
            SymptomEntry::Symptoms { symptoms, .. } => {
                assert_eq!(symptoms, &symptom_set(&[Symptom::Cough, Symptom::Fever]));
            }
            other => panic!("expected symptoms for today, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_outside_window_is_ignored() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap();
        let too_old = today - Duration::days(20);

        let history = to_symptom_history(today, &[raw("1", too_old, &["fever"])]);

        assert!(history
            .iter()
            .all(|entry| matches!(entry, SymptomEntry::NoData { .. })));
    }

    #[test]
    fn test_entry_lands_in_its_own_day_bucket() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap();
        let three_days_ago = today - Duration::days(3);

        let history = to_symptom_history(today, &[raw("1", three_days_ago, &["fever"])]);

        match &history[3] {
            SymptomEntry::Symptoms { date, .. } => {
                // The entry's exact timestamp is preserved, not the day key
                assert_eq!(*date, three_days_ago);
            }
            other => panic!("expected symptoms three days back, got {:?}", other),
        }
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let today = Utc.with_ymd_and_hms(2020, 9, 21, 12, 0, 0).unwrap();
        let entries = [
            raw("1", today, &["cough"]),
            raw("2", today - Duration::days(2), &["fever", "chills"]),
        ];

        assert_eq!(
            to_symptom_history(today, &entries),
            to_symptom_history(today, &entries)
        );
    }
}
