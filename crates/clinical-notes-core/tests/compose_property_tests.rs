//! Property tests for note composition.

use clinical_notes_core::composer::{
    ASSESSMENT_DEFERRED, BASELINE_PLAN, DIFFERENTIAL_LINE, GENERAL_APPEARANCE,
};
use clinical_notes_core::{compose, PatientInfo};
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "patient", "reports", "has", "having", "complains of", "experiencing", "severe", "mild",
    "headache", "pain", "fever", "cough", "nausea", "vomiting", "dizziness", "fatigue",
    "weakness", "sore throat", "for", "since", "in the last", "about", "3", "12", "days",
    "week", "months", "temp", "101.2 F", "pulse", "88 bpm", "BP", "120/80", "RR", "18",
    "SpO2", "97%", ",", ".", ";", ":",
];

fn clinical_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..40).prop_map(|words| words.join(" "))
}

fn any_transcript() -> impl Strategy<Value = String> {
    prop_oneof![clinical_text(), "\\PC{1,300}"]
}

fn patient_info() -> impl Strategy<Value = Option<PatientInfo>> {
    prop::option::of(
        (
            prop::option::of("[A-Za-z]{0,12}"),
            prop::option::of("[0-9]{0,3}"),
            prop::option::of("(Female|Male|Other)"),
        )
            .prop_map(|(name, age, gender)| PatientInfo { name, age, gender }),
    )
}

proptest! {
    #[test]
    fn compose_is_idempotent(transcript in any_transcript(), info in patient_info()) {
        let first = compose(&transcript, info.as_ref());
        let second = compose(&transcript, info.as_ref());

        prop_assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn plan_keeps_baseline_and_sequential_numbering(transcript in any_transcript()) {
        let note = compose(&transcript, None);
        let lines: Vec<&str> = note.plan.lines().collect();

        prop_assert!([4, 6, 8, 10].contains(&lines.len()));
        for (index, baseline) in BASELINE_PLAN.iter().enumerate() {
            prop_assert_eq!(lines[index].to_string(), format!("{}. {}", index + 1, baseline));
        }
        for (index, line) in lines.iter().enumerate() {
            let prefix = format!("{}. ", index + 1);
            prop_assert!(line.starts_with(&prefix));
        }
    }

    #[test]
    fn every_section_is_non_empty(transcript in any_transcript(), info in patient_info()) {
        let note = compose(&transcript, info.as_ref());

        for (heading, text) in note.sections() {
            prop_assert!(!text.trim().is_empty(), "{} is empty", heading);
        }
    }

    #[test]
    fn assessment_is_deferred_or_closed_by_differential(transcript in any_transcript()) {
        let note = compose(&transcript, None);

        if note.assessment != ASSESSMENT_DEFERRED {
            prop_assert!(note.assessment.starts_with("1. "));
            prop_assert!(note.assessment.ends_with(DIFFERENTIAL_LINE));
        }
    }

    #[test]
    fn objective_has_no_dangling_comma(transcript in any_transcript()) {
        let note = compose(&transcript, None);

        prop_assert!(note.objective.starts_with("Vitals:"));
        prop_assert!(!note.objective.contains(",\n"));
        let expected_suffix = format!("\n\n{}", GENERAL_APPEARANCE);
        prop_assert!(note.objective.ends_with(&expected_suffix));
    }

    #[test]
    fn subjective_ends_with_single_period(transcript in clinical_text(), info in patient_info()) {
        let note = compose(&transcript, info.as_ref());

        prop_assert!(note.subjective.ends_with('.'));
        prop_assert!(!note.subjective.ends_with(".."));
    }
}
