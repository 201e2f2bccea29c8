//! Plan section.

use clinical_notes_extract::ExtractedFacts;

use super::numbered_list;

/// Items present in every plan, in order.
pub const BASELINE_PLAN: [&str; 4] = [
    "Complete comprehensive history and physical examination",
    "Consider laboratory studies as indicated by findings",
    "Patient education regarding diagnosis and treatment options",
    "Follow-up appointment to assess response to treatment",
];

/// (trigger symptoms, items to add), checked in this order.
///
/// A trigger fires only when it is an exact element of the symptom list,
/// unlike the substring match used for the assessment.
pub const CONDITIONAL_PLANS: &[(&[&str], [&str; 2])] = &[
    (
        &["fever", "cough", "sore throat"],
        [
            "Consider antiviral/antibiotic therapy if indicated by clinical findings",
            "Symptomatic treatment with antipyretics and rest",
        ],
    ),
    (
        &["pain", "headache"],
        [
            "Pain management with appropriate analgesics",
            "Referral to specialist if pain is severe or persistent",
        ],
    ),
    (
        &["nausea", "vomiting"],
        [
            "Hydration therapy and antiemetics as needed",
            "Limited diet temporarily with gradual advancement as tolerated",
        ],
    ),
];

/// Build the Plan section.
pub fn build_plan(facts: &ExtractedFacts) -> String {
    let mut items: Vec<&str> = BASELINE_PLAN.to_vec();

    for (triggers, additions) in CONDITIONAL_PLANS {
        let fired = triggers
            .iter()
            .any(|trigger| facts.symptoms.iter().any(|symptom| symptom == trigger));
        if fired {
            items.extend_from_slice(additions);
        }
    }

    numbered_list(&items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinical_notes_extract::{SymptomDuration, Vitals};

    fn facts(symptoms: &[&str]) -> ExtractedFacts {
        ExtractedFacts {
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            duration: SymptomDuration::NotSpecified,
            vitals: Vitals::new(),
        }
    }

    #[test]
    fn test_plan_baseline_only() {
        assert_eq!(
            build_plan(&facts(&[])),
            "1. Complete comprehensive history and physical examination\n\
             2. Consider laboratory studies as indicated by findings\n\
             3. Patient education regarding diagnosis and treatment options\n\
             4. Follow-up appointment to assess response to treatment\n"
        );
    }

    #[test]
    fn test_plan_requires_exact_symptom() {
        // Substrings do not trigger plan additions.
        let plan = build_plan(&facts(&["severe headache", "low grade fever"]));
        assert_eq!(plan.lines().count(), 4);
    }

    #[test]
    fn test_plan_respiratory_items() {
        let plan = build_plan(&facts(&["cough"]));
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[4],
            "5. Consider antiviral/antibiotic therapy if indicated by clinical findings"
        );
        assert_eq!(lines[5], "6. Symptomatic treatment with antipyretics and rest");
    }

    #[test]
    fn test_plan_all_groups_numbered_without_gaps() {
        let plan = build_plan(&facts(&["vomiting", "pain", "fever"]));
        let lines: Vec<&str> = plan.lines().collect();
        assert_eq!(lines.len(), 10);
        for (index, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", index + 1)), "{line}");
        }
        // Groups follow table order, not symptom order.
        assert_eq!(lines[6], "7. Pain management with appropriate analgesics");
        assert_eq!(lines[8], "9. Hydration therapy and antiemetics as needed");
    }

    #[test]
    fn test_plan_group_added_once() {
        let plan = build_plan(&facts(&["fever", "cough", "sore throat"]));
        assert_eq!(plan.lines().count(), 6);
    }
}
