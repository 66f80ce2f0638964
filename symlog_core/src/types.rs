//! Core domain types for the symlog engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Symptoms and their fixed tier partition
//! - Self-assessment answers and the classified symptom group
//! - Daily check-ins, symptom log entries and per-day aggregates
//! - Remote case-count data

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Symptom Types
// ============================================================================

/// A self-reportable symptom.
///
/// The set is closed and every symptom belongs to exactly one [`SymptomTier`].
/// Symptoms serialize as stable snake_case string tags so that persisted
/// records survive reordering of this enum across versions.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    ChestPainOrPressure,
    DifficultyBreathing,
    Lightheadedness,
    DisorientationOrUnresponsiveness,
    Fever,
    Chills,
    Cough,
    LossOfSmell,
    LossOfTaste,
    LossOfAppetite,
    BodyAches,
    Vomiting,
    Diarrhea,
    Other,
}

/// Fixed tier partition used by the self-assessment classifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymptomTier {
    Emergency,
    Primary,
    Secondary,
    Other,
}

impl Symptom {
    /// All symptoms, in tier order
    pub fn all() -> &'static [Symptom] {
        &[
            Symptom::ChestPainOrPressure,
            Symptom::DifficultyBreathing,
            Symptom::Lightheadedness,
            Symptom::DisorientationOrUnresponsiveness,
            Symptom::Fever,
            Symptom::Chills,
            Symptom::Cough,
            Symptom::LossOfSmell,
            Symptom::LossOfTaste,
            Symptom::LossOfAppetite,
            Symptom::BodyAches,
            Symptom::Vomiting,
            Symptom::Diarrhea,
            Symptom::Other,
        ]
    }

    /// Parse a raw string tag, returning `None` for unrecognized tags.
    ///
    /// Callers fold unknown tags away rather than failing; malformed
    /// records from the native store must never abort an aggregation.
    pub fn from_tag(raw: &str) -> Option<Symptom> {
        match raw {
            "chest_pain_or_pressure" => Some(Symptom::ChestPainOrPressure),
            "difficulty_breathing" => Some(Symptom::DifficultyBreathing),
            "lightheadedness" => Some(Symptom::Lightheadedness),
            "disorientation_or_unresponsiveness" => {
                Some(Symptom::DisorientationOrUnresponsiveness)
            }
            "fever" => Some(Symptom::Fever),
            "chills" => Some(Symptom::Chills),
            "cough" => Some(Symptom::Cough),
            "loss_of_smell" => Some(Symptom::LossOfSmell),
            "loss_of_taste" => Some(Symptom::LossOfTaste),
            "loss_of_appetite" => Some(Symptom::LossOfAppetite),
            "body_aches" => Some(Symptom::BodyAches),
            "vomiting" => Some(Symptom::Vomiting),
            "diarrhea" => Some(Symptom::Diarrhea),
            "other" => Some(Symptom::Other),
            _ => None,
        }
    }

    /// The stable string tag for this symptom
    pub fn tag(&self) -> &'static str {
        match self {
            Symptom::ChestPainOrPressure => "chest_pain_or_pressure",
            Symptom::DifficultyBreathing => "difficulty_breathing",
            Symptom::Lightheadedness => "lightheadedness",
            Symptom::DisorientationOrUnresponsiveness => {
                "disorientation_or_unresponsiveness"
            }
            Symptom::Fever => "fever",
            Symptom::Chills => "chills",
            Symptom::Cough => "cough",
            Symptom::LossOfSmell => "loss_of_smell",
            Symptom::LossOfTaste => "loss_of_taste",
            Symptom::LossOfAppetite => "loss_of_appetite",
            Symptom::BodyAches => "body_aches",
            Symptom::Vomiting => "vomiting",
            Symptom::Diarrhea => "diarrhea",
            Symptom::Other => "other",
        }
    }

    /// Tier membership is fixed and used by the classifier
    pub fn tier(&self) -> SymptomTier {
        match self {
            Symptom::ChestPainOrPressure
            | Symptom::DifficultyBreathing
            | Symptom::Lightheadedness
            | Symptom::DisorientationOrUnresponsiveness => SymptomTier::Emergency,
            Symptom::Fever | Symptom::Chills | Symptom::Cough => SymptomTier::Primary,
            Symptom::LossOfSmell
            | Symptom::LossOfTaste
            | Symptom::LossOfAppetite
            | Symptom::BodyAches => SymptomTier::Secondary,
            Symptom::Vomiting | Symptom::Diarrhea | Symptom::Other => SymptomTier::Other,
        }
    }
}

// ============================================================================
// Self-Assessment Types
// ============================================================================

/// Pre-existing conditions reported during a self-assessment
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum UnderlyingCondition {
    LungDisease,
    HeartCondition,
    WeakenedImmuneSystem,
    Obesity,
    KidneyDisease,
    Diabetes,
    LiverDisease,
    HighBloodPressure,
    BloodDisorder,
    CerebrovascularDisease,
    Smoking,
    Pregnancy,
}

impl UnderlyingCondition {
    /// Parse a raw string tag, returning `None` for unrecognized tags
    pub fn from_tag(raw: &str) -> Option<UnderlyingCondition> {
        match raw {
            "lung_disease" => Some(UnderlyingCondition::LungDisease),
            "heart_condition" => Some(UnderlyingCondition::HeartCondition),
            "weakened_immune_system" => Some(UnderlyingCondition::WeakenedImmuneSystem),
            "obesity" => Some(UnderlyingCondition::Obesity),
            "kidney_disease" => Some(UnderlyingCondition::KidneyDisease),
            "diabetes" => Some(UnderlyingCondition::Diabetes),
            "liver_disease" => Some(UnderlyingCondition::LiverDisease),
            "high_blood_pressure" => Some(UnderlyingCondition::HighBloodPressure),
            "blood_disorder" => Some(UnderlyingCondition::BloodDisorder),
            "cerebrovascular_disease" => Some(UnderlyingCondition::CerebrovascularDisease),
            "smoking" => Some(UnderlyingCondition::Smoking),
            "pregnancy" => Some(UnderlyingCondition::Pregnancy),
            _ => None,
        }
    }

    /// The stable string tag for this condition
    pub fn tag(&self) -> &'static str {
        match self {
            UnderlyingCondition::LungDisease => "lung_disease",
            UnderlyingCondition::HeartCondition => "heart_condition",
            UnderlyingCondition::WeakenedImmuneSystem => "weakened_immune_system",
            UnderlyingCondition::Obesity => "obesity",
            UnderlyingCondition::KidneyDisease => "kidney_disease",
            UnderlyingCondition::Diabetes => "diabetes",
            UnderlyingCondition::LiverDisease => "liver_disease",
            UnderlyingCondition::HighBloodPressure => "high_blood_pressure",
            UnderlyingCondition::BloodDisorder => "blood_disorder",
            UnderlyingCondition::CerebrovascularDisease => "cerebrovascular_disease",
            UnderlyingCondition::Smoking => "smoking",
            UnderlyingCondition::Pregnancy => "pregnancy",
        }
    }
}

/// Age bracket reported during a self-assessment
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeRange {
    EighteenToSixtyFour,
    SixtyFiveAndOver,
}

/// Immutable input to the symptom-group classifier.
///
/// The four symptom sets are kept separate because the assessment flow
/// asks about each tier on its own screen; the classifier only inspects
/// emptiness and the risk-factor fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelfAssessmentAnswers {
    pub emergency_symptoms: BTreeSet<Symptom>,
    pub primary_symptoms: BTreeSet<Symptom>,
    pub secondary_symptoms: BTreeSet<Symptom>,
    pub other_symptoms: BTreeSet<Symptom>,
    pub underlying_conditions: BTreeSet<UnderlyingCondition>,
    pub age_range: Option<AgeRange>,
}

/// Prioritized risk-category outcome of the classifier.
///
/// Declaration order is the priority order; exactly one value is ever
/// produced for a given answer set.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum SymptomGroup {
    Emergency,
    Primary1,
    Primary2,
    Primary3,
    Secondary1,
    Secondary2,
    NonCovid,
    Asymptomatic,
}

// ============================================================================
// Check-In and Log Entry Types
// ============================================================================

/// Daily check-in status
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckInStatus {
    NotCheckedIn,
    FeelingGood,
    FeelingNotWell,
}

/// A once-a-day "how are you feeling" record
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCheckIn {
    pub date: DateTime<Utc>,
    pub status: CheckInStatus,
}

/// A single symptom log record with an exact timestamp.
///
/// `id` is stable per physical record; aggregates derived by merging
/// never invent new ids.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SymptomLogEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub symptoms: BTreeSet<Symptom>,
}

/// Per-day aggregate of log entries and an optional check-in.
///
/// `date` is the start-of-day key; `log_entries` are sorted ascending by
/// their exact timestamps.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayLogData {
    pub date: DateTime<Utc>,
    pub check_in: Option<DailyCheckIn>,
    pub log_entries: Vec<SymptomLogEntry>,
}

// ============================================================================
// Symptom History Types
// ============================================================================

/// An unvalidated record as handed over by the native store
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub symptoms: Vec<String>,
}

/// One day of the 14-day rolling symptom history
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SymptomEntry {
    /// No user input recorded for this day
    NoData { date: DateTime<Utc> },
    /// User input present, with the merged symptom set for the day
    Symptoms {
        id: String,
        date: DateTime<Utc>,
        symptoms: BTreeSet<Symptom>,
    },
}

impl SymptomEntry {
    /// The date this entry covers (exact timestamp for user input,
    /// start-of-day for blank days)
    pub fn date(&self) -> DateTime<Utc> {
        match self {
            SymptomEntry::NoData { date } => *date,
            SymptomEntry::Symptoms { date, .. } => *date,
        }
    }
}

// ============================================================================
// Case-Count Data Types
// ============================================================================

/// One day of a remote COVID case-count series, already validated by the
/// decoder collaborator
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CovidDatum {
    pub date: NaiveDate,
    pub positive_cases_new: u32,
    pub positive_cases_total: u32,
    pub deaths_new: Option<u32>,
    pub deaths_total: Option<u32>,
}
