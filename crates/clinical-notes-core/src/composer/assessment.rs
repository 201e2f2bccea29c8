//! Assessment section.

use clinical_notes_extract::ExtractedFacts;

use super::numbered_list;

/// Returned verbatim when no symptoms were extracted.
pub const ASSESSMENT_DEFERRED: &str = "Assessment deferred pending additional information.";

/// Used when symptoms exist but none maps to a diagnosis.
pub const UNDETERMINED_ETIOLOGY: &str =
    "Symptoms of undetermined etiology requiring further evaluation";

/// Closing line of every non-deferred assessment.
pub const DIFFERENTIAL_LINE: &str = "Differential diagnoses to consider based on presentation.";

/// (substring key, diagnosis), matched case-insensitively in this order.
///
/// Order matters: "pain" precedes "headache", so "headache with neck pain"
/// maps to the musculoskeletal entry.
pub const DIAGNOSIS_TABLE: &[(&str, &str)] = &[
    ("pain", "Musculoskeletal pain of undetermined etiology"),
    ("headache", "Cephalgia, possibly tension or migraine type"),
    ("fever", "Febrile illness, possibly viral infection"),
    (
        "cough",
        "Upper respiratory tract infection, viral vs. bacterial etiology",
    ),
    ("sore throat", "Pharyngitis, viral vs. bacterial etiology"),
    ("nausea", "Gastrointestinal distress, possible gastroenteritis"),
    ("vomiting", "Emesis, possible gastroenteritis or food poisoning"),
    (
        "dizziness",
        "Vertigo vs. lightheadedness, multiple potential etiologies",
    ),
    ("fatigue", "Fatigue, potentially multifactorial"),
];

/// First diagnosis whose key occurs in the symptom, ignoring case.
pub fn diagnose(symptom: &str) -> Option<&'static str> {
    let lower = symptom.to_lowercase();
    DIAGNOSIS_TABLE
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, diagnosis)| *diagnosis)
}

/// Build the Assessment section.
pub fn build_assessment(facts: &ExtractedFacts) -> String {
    if facts.symptoms.is_empty() {
        return ASSESSMENT_DEFERRED.to_string();
    }

    let mut diagnoses: Vec<&str> = Vec::new();
    for diagnosis in facts.symptoms.iter().filter_map(|s| diagnose(s)) {
        if !diagnoses.contains(&diagnosis) {
            diagnoses.push(diagnosis);
        }
    }

    if diagnoses.is_empty() {
        diagnoses.push(UNDETERMINED_ETIOLOGY);
    }

    let mut assessment = numbered_list(&diagnoses);
    assessment.push('\n');
    assessment.push_str(DIFFERENTIAL_LINE);
    assessment
}
