//! Objective section.

use clinical_notes_extract::{ExtractedFacts, VitalSign};

/// Boilerplate appended after the vitals line.
pub const GENERAL_APPEARANCE: &str = "General Appearance: Patient appears in no acute distress.";

/// Vitals clause used when nothing was measured.
pub const VITALS_NOT_RECORDED: &str = " Not recorded.";

/// (sign, label, suffix) in rendering order.
const VITAL_CLAUSES: [(VitalSign, &str, &str); 5] = [
    (VitalSign::Temperature, "Temperature", "°F"),
    (VitalSign::HeartRate, "Heart Rate", " bpm"),
    (VitalSign::BloodPressure, "Blood Pressure", " mmHg"),
    (VitalSign::Respiration, "Respiratory Rate", " breaths/min"),
    (VitalSign::O2Sat, "Oxygen Saturation", "%"),
];

/// Build the Objective section.
pub fn build_objective(facts: &ExtractedFacts) -> String {
    let mut objective = String::from("Vitals:");

    if facts.vitals.is_empty() {
        objective.push_str(VITALS_NOT_RECORDED);
    } else {
        for (sign, label, suffix) in VITAL_CLAUSES {
            if let Some(value) = facts.vitals.get(sign) {
                objective.push_str(&format!(" {} {}{},", label, value, suffix));
            }
        }
        if objective.ends_with(',') {
            objective.pop();
        }
    }

    objective.push_str("\n\n");
    objective.push_str(GENERAL_APPEARANCE);
    objective
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_notes_extract::{SymptomDuration, Vitals};

    fn facts_with(readings: &[(VitalSign, &str)]) -> ExtractedFacts {
        let mut vitals = Vitals::new();
        for (sign, value) in readings {
            vitals.record(*sign, *value);
        }
        ExtractedFacts {
            symptoms: Vec::new(),
            duration: SymptomDuration::NotSpecified,
            vitals,
        }
    }

    #[test]
    fn test_objective_not_recorded() {
        assert_eq!(
            build_objective(&facts_with(&[])),
            "Vitals: Not recorded.\n\nGeneral Appearance: Patient appears in no acute distress."
        );
    }

    #[test]
    fn test_objective_single_vital_has_no_trailing_comma() {
        let objective = build_objective(&facts_with(&[(VitalSign::Temperature, "101.5")]));
        assert_eq!(
            objective,
            "Vitals: Temperature 101.5°F\n\nGeneral Appearance: Patient appears in no acute distress."
        );
    }

    #[test]
    fn test_objective_all_vitals_in_fixed_order() {
        let objective = build_objective(&facts_with(&[
            (VitalSign::O2Sat, "98"),
            (VitalSign::Respiration, "16"),
            (VitalSign::BloodPressure, "120/80"),
            (VitalSign::HeartRate, "88"),
            (VitalSign::Temperature, "100.4"),
        ]));

        let first_line = objective.lines().next().unwrap();
        assert_eq!(
            first_line,
            "Vitals: Temperature 100.4°F, Heart Rate 88 bpm, Blood Pressure 120/80 mmHg, \
             Respiratory Rate 16 breaths/min, Oxygen Saturation 98%"
        );
        assert!(objective.ends_with(GENERAL_APPEARANCE));
    }
}
