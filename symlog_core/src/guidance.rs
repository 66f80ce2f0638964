//! Guidance catalog for assessment outcomes.
//!
//! Maps each symptom group to the guidance shown after completing an
//! assessment: an intro line plus a list of instruction bullets. The
//! wording is advisory, not a medical diagnosis.

use crate::SymptomGroup;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Guidance payload for one symptom group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guidance {
    pub intro: String,
    pub instructions: Vec<String>,
}

/// Cached default guidance catalog - built once and reused
static DEFAULT_GUIDANCE: Lazy<HashMap<SymptomGroup, Guidance>> =
    Lazy::new(build_default_guidance_internal);

/// Look up the guidance for a symptom group.
///
/// Total over all groups; every group present in the catalog.
pub fn guidance_for_group(group: SymptomGroup) -> &'static Guidance {
    DEFAULT_GUIDANCE
        .get(&group)
        .unwrap_or_else(|| &DEFAULT_GUIDANCE[&SymptomGroup::Asymptomatic])
}

/// Builds the default guidance catalog
///
/// **Note**: For production use, prefer `guidance_for_group()` which reads a
/// cached catalog. This function is retained for testing and customization.
pub fn build_default_guidance() -> HashMap<SymptomGroup, Guidance> {
    build_default_guidance_internal()
}

fn build_default_guidance_internal() -> HashMap<SymptomGroup, Guidance> {
    let mut guidance = HashMap::new();

    let call_your_healthcare_provider = vec![
        "Call your healthcare provider and describe your symptoms".to_string(),
        "Stay at home".to_string(),
        "Do not go to work or school".to_string(),
        "Do not use public transport".to_string(),
        "Seek medical care right away if your symptoms get worse".to_string(),
        "A telehealth service can assess you without an office visit".to_string(),
        "Rest, stay hydrated, and take care of yourself".to_string(),
        "Protect the people around you: wear a mask, wash your hands".to_string(),
    ];

    let stay_home_except_for_medical_care = vec![
        "Stay at home except to get medical care".to_string(),
        "Do not go to work or school".to_string(),
        "Do not use public transport".to_string(),
        "Seek medical care right away if your symptoms get worse".to_string(),
    ];

    let watch_for_symptoms = vec![
        "Watch for COVID-19 symptoms: fever, cough, difficulty breathing".to_string(),
        "Contact your healthcare provider if symptoms develop".to_string(),
        "Rest and drink plenty of water".to_string(),
        "Cover coughs and sneezes".to_string(),
        "Clean your hands often".to_string(),
    ];

    let quarantine = vec![
        "Stay home for 14 days from your last possible exposure".to_string(),
        "Take your temperature twice a day".to_string(),
        "Practice social distancing".to_string(),
        "Stay at least 6 feet away from others".to_string(),
        "Stay away from people at higher risk of severe illness".to_string(),
        "Follow public health guidance for your area".to_string(),
    ];

    guidance.insert(
        SymptomGroup::Emergency,
        Guidance {
            intro: "Your symptoms may require urgent medical attention".to_string(),
            instructions: vec![
                "Call 911 or your local emergency number now".to_string(),
                "Tell the dispatcher about your symptoms".to_string(),
                "Do not drive yourself to the hospital".to_string(),
            ],
        },
    );

    guidance.insert(
        SymptomGroup::Primary1,
        Guidance {
            intro: "Your symptoms might be related to COVID-19, and your underlying \
                    conditions put you at higher risk"
                .to_string(),
            instructions: call_your_healthcare_provider.clone(),
        },
    );

    guidance.insert(
        SymptomGroup::Primary2,
        Guidance {
            intro: "Your symptoms might be related to COVID-19".to_string(),
            instructions: call_your_healthcare_provider.clone(),
        },
    );

    guidance.insert(
        SymptomGroup::Primary3,
        Guidance {
            intro: "Your symptoms might be related to COVID-19".to_string(),
            instructions: stay_home_except_for_medical_care.clone(),
        },
    );

    guidance.insert(
        SymptomGroup::Secondary1,
        Guidance {
            intro: "Your symptoms might be related to COVID-19".to_string(),
            instructions: stay_home_except_for_medical_care,
        },
    );

    guidance.insert(
        SymptomGroup::Secondary2,
        Guidance {
            intro: "Your symptoms might be related to COVID-19".to_string(),
            instructions: call_your_healthcare_provider,
        },
    );

    guidance.insert(
        SymptomGroup::NonCovid,
        Guidance {
            intro: "Your symptoms do not suggest COVID-19 right now; keep monitoring them"
                .to_string(),
            instructions: watch_for_symptoms,
        },
    );

    guidance.insert(
        SymptomGroup::Asymptomatic,
        Guidance {
            intro: "You are not reporting any symptoms".to_string(),
            instructions: quarantine,
        },
    );

    guidance
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_GROUPS: [SymptomGroup; 8] = [
        SymptomGroup::Emergency,
        SymptomGroup::Primary1,
        SymptomGroup::Primary2,
        SymptomGroup::Primary3,
        SymptomGroup::Secondary1,
        SymptomGroup::Secondary2,
        SymptomGroup::NonCovid,
        SymptomGroup::Asymptomatic,
    ];

    #[test]
    fn test_every_group_has_guidance() {
        let catalog = build_default_guidance();

        for group in ALL_GROUPS {
            let entry = catalog.get(&group).expect("group present in catalog");
            assert!(!entry.intro.is_empty());
            assert!(!entry.instructions.is_empty());
        }
    }

    #[test]
    fn test_lookup_matches_catalog() {
        let catalog = build_default_guidance();

        for group in ALL_GROUPS {
            assert_eq!(guidance_for_group(group), &catalog[&group]);
        }
    }

    #[test]
    fn test_emergency_guidance_escalates() {
        let guidance = guidance_for_group(SymptomGroup::Emergency);
        assert!(guidance.instructions[0].contains("911"));
    }
}
