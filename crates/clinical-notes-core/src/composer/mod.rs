//! SOAP note composer.
//!
//! Pipeline: Fact Extraction → Subjective → Objective → Assessment → Plan
//!
//! Each section builder is a pure function of the extracted facts. Lookup
//! tables are ordered slices: the first matching entry wins, so reordering
//! them changes the generated text.

mod assessment;
mod objective;
mod plan;
mod subjective;

pub use assessment::*;
pub use objective::*;
pub use plan::*;
pub use subjective::*;

use clinical_notes_extract::{extract_facts, ExtractedFacts};

use crate::models::{PatientInfo, SoapNote};

/// Compose a full SOAP note from a transcript.
///
/// Never fails. Callers reject blank transcripts before calling this.
pub fn compose(transcript: &str, patient_info: Option<&PatientInfo>) -> SoapNote {
    let facts = extract_facts(transcript);
    compose_from_facts(&facts, patient_info)
}

/// Compose a SOAP note from facts that were already extracted.
pub fn compose_from_facts(facts: &ExtractedFacts, patient_info: Option<&PatientInfo>) -> SoapNote {
    let descriptor = format_patient_descriptor(patient_info);

    SoapNote {
        subjective: build_subjective(&descriptor, facts),
        objective: build_objective(facts),
        assessment: build_assessment(facts),
        plan: build_plan(facts),
    }
}

/// Render items as "1. first\n2. second\n".
pub(crate) fn numbered_list(items: &[&str]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}\n", index + 1, item))
        .collect()
}
