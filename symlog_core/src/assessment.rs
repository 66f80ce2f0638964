//! Self-assessment classifier.
//!
//! Classifies a completed answer set into one of eight prioritized risk
//! categories. Predicates are evaluated in strict priority order and the
//! first match wins, so exactly one group is ever produced.

use crate::{AgeRange, SelfAssessmentAnswers, SymptomGroup};

/// Classify a self-assessment answer set into a symptom group.
///
/// Total over all well-formed answer sets; falls back to
/// [`SymptomGroup::Asymptomatic`] when no other rule matches. An unset
/// age range counts as "under 65" for every age-sensitive rule.
pub fn determine_symptom_group(answers: &SelfAssessmentAnswers) -> SymptomGroup {
    if is_emergency_group(answers) {
        SymptomGroup::Emergency
    } else if is_primary_group_1(answers) {
        SymptomGroup::Primary1
    } else if is_primary_group_2(answers) {
        SymptomGroup::Primary2
    } else if is_primary_group_3(answers) {
        SymptomGroup::Primary3
    } else if is_secondary_group_1(answers) {
        SymptomGroup::Secondary1
    } else if is_secondary_group_2(answers) {
        SymptomGroup::Secondary2
    } else if is_non_covid_group(answers) {
        SymptomGroup::NonCovid
    } else {
        SymptomGroup::Asymptomatic
    }
}

fn is_emergency_group(answers: &SelfAssessmentAnswers) -> bool {
    !answers.emergency_symptoms.is_empty()
}

fn is_primary_group_1(answers: &SelfAssessmentAnswers) -> bool {
    has_primary_symptoms(answers) && has_underlying_conditions(answers)
}

fn is_primary_group_2(answers: &SelfAssessmentAnswers) -> bool {
    has_primary_symptoms(answers)
        && is_over_65(answers.age_range)
        && !has_underlying_conditions(answers)
}

fn is_primary_group_3(answers: &SelfAssessmentAnswers) -> bool {
    has_primary_symptoms(answers)
        && is_under_65(answers.age_range)
        && !has_underlying_conditions(answers)
}

fn is_secondary_group_1(answers: &SelfAssessmentAnswers) -> bool {
    let under_65_with_conditions =
        is_under_65(answers.age_range) && has_underlying_conditions(answers);

    !has_primary_symptoms(answers)
        && has_secondary_symptoms(answers)
        && (under_65_with_conditions || is_over_65(answers.age_range))
}

fn is_secondary_group_2(answers: &SelfAssessmentAnswers) -> bool {
    !has_primary_symptoms(answers)
        && has_secondary_symptoms(answers)
        && is_under_65(answers.age_range)
        && !has_underlying_conditions(answers)
}

fn is_non_covid_group(answers: &SelfAssessmentAnswers) -> bool {
    !has_primary_symptoms(answers)
        && !has_secondary_symptoms(answers)
        && !answers.other_symptoms.is_empty()
}

fn has_primary_symptoms(answers: &SelfAssessmentAnswers) -> bool {
    !answers.primary_symptoms.is_empty()
}

fn has_secondary_symptoms(answers: &SelfAssessmentAnswers) -> bool {
    !answers.secondary_symptoms.is_empty()
}

fn has_underlying_conditions(answers: &SelfAssessmentAnswers) -> bool {
    !answers.underlying_conditions.is_empty()
}

fn is_over_65(age_range: Option<AgeRange>) -> bool {
    age_range == Some(AgeRange::SixtyFiveAndOver)
}

fn is_under_65(age_range: Option<AgeRange>) -> bool {
    matches!(age_range, None | Some(AgeRange::EighteenToSixtyFour))
}
