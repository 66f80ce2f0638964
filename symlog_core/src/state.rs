//! Immutable tracker state.
//!
//! Replaces the hidden per-screen contexts of the original app with one
//! explicit container for the current answer set and raw record lists.
//! Update functions return new snapshots; accessors recompute every
//! aggregate from the raw lists on each call, so the raw records stay
//! the single source of truth.

use crate::{
    assessment, calendar, daily_log, symptom_history, DailyCheckIn, DayLogData, RawEntry,
    SelfAssessmentAnswers, SymptomEntry, SymptomGroup, SymptomLogEntry,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the engine is currently tracking
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerState {
    pub answers: SelfAssessmentAnswers,
    pub log_entries: Vec<SymptomLogEntry>,
    pub check_ins: Vec<DailyCheckIn>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the answer set replaced
    pub fn with_answers(&self, answers: SelfAssessmentAnswers) -> Self {
        Self {
            answers,
            ..self.clone()
        }
    }

    /// Snapshot with a log entry appended
    pub fn with_log_entry(&self, entry: SymptomLogEntry) -> Self {
        let mut next = self.clone();
        next.log_entries.push(entry);
        next
    }

    /// Snapshot with a check-in appended
    pub fn with_check_in(&self, check_in: DailyCheckIn) -> Self {
        let mut next = self.clone();
        next.check_ins.push(check_in);
        next
    }

    /// Classify the current answer set
    pub fn symptom_group(&self) -> SymptomGroup {
        assessment::determine_symptom_group(&self.answers)
    }

    /// Day buckets for all days with at least one record, newest first
    pub fn daily_log_data(&self) -> Vec<DayLogData> {
        daily_log::combine_symptom_and_check_in_logs(&self.log_entries, &self.check_ins)
    }

    /// Gap-filled calendar window ending on the next Saturday
    pub fn log_data_history(&self, now: DateTime<Utc>, day_count: usize) -> Vec<DayLogData> {
        calendar::to_log_data_history(now, day_count, &self.daily_log_data())
    }

    /// 14-day rolling history anchored at `today`
    pub fn symptom_history(&self, today: DateTime<Utc>) -> Vec<SymptomEntry> {
        let raw_entries: Vec<RawEntry> = self
            .log_entries
            .iter()
            .map(|entry| RawEntry {
                id: entry.id.clone(),
                date: entry.date,
                symptoms: entry.symptoms.iter().map(|s| s.tag().to_string()).collect(),
            })
            .collect();

        symptom_history::to_symptom_history(today, &raw_entries)
    }
}
