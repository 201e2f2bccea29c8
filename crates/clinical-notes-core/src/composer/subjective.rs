//! Patient descriptor and Subjective section.

use clinical_notes_extract::ExtractedFacts;

use crate::models::PatientInfo;

/// Descriptor used when no demographics are known.
pub const DEFAULT_DESCRIPTOR: &str = "Patient";

/// Describe the patient, e.g. "Jane is a 30-year-old Female".
pub fn format_patient_descriptor(patient_info: Option<&PatientInfo>) -> String {
    let info = match patient_info {
        Some(info) if !info.is_empty() => info,
        _ => return DEFAULT_DESCRIPTOR.to_string(),
    };

    let mut descriptor = info.name().unwrap_or(DEFAULT_DESCRIPTOR).to_string();

    if let Some(age) = info.age() {
        descriptor.push_str(&format!(" is a {}-year-old", age));
    }

    if let Some(gender) = info.gender() {
        descriptor.push(' ');
        descriptor.push_str(gender);
    }

    descriptor.trim().to_string()
}

/// Build the Subjective section. Always ends with exactly one period.
pub fn build_subjective(descriptor: &str, facts: &ExtractedFacts) -> String {
    let mut subjective = format!("{} presenting to the clinic", descriptor);

    if let Some((chief, additional)) = facts.symptoms.split_first() {
        subjective.push_str(&format!(" with chief complaint of {}", chief));

        if !additional.is_empty() {
            subjective.push_str(&format!(
                ". Additional symptoms include {}",
                additional.join(", ")
            ));
        }
    }

    if facts.duration.is_specified() {
        subjective.push_str(&format!(
            ". Symptoms have been present for {}",
            facts.duration
        ));
    }

    subjective.push('.');
    subjective
}
