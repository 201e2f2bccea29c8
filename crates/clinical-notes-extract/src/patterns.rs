//! Pattern tables for transcript fact extraction.
//!
//! Every pattern is case-insensitive and compiled once per process. The
//! `regex` engine guarantees matching in time linear to the transcript, so
//! adversarially long input cannot trigger catastrophic backtracking.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::VitalSign;

/// Verbs that introduce a patient complaint.
pub const COMPLAINT_VERBS: &[&str] = &[
    "complains of",
    "reports",
    "experiencing",
    "having",
    "has",
];

/// Nouns that may end a phrase introduced by a complaint verb.
pub const COMPLAINT_NOUNS: &[&str] = &[
    "pain",
    "ache",
    "discomfort",
    "fever",
    "cough",
    "nausea",
    "vomiting",
    "dizziness",
    "fatigue",
    "weakness",
    "difficulty",
    "problem",
];

/// Nouns that may end a phrase followed by a temporal connector.
///
/// Same as [`COMPLAINT_NOUNS`] without "difficulty" and "problem".
pub const TEMPORAL_NOUNS: &[&str] = &[
    "pain",
    "ache",
    "discomfort",
    "fever",
    "cough",
    "nausea",
    "vomiting",
    "dizziness",
    "fatigue",
    "weakness",
];

/// Connectors that tie a symptom phrase to a time span.
pub const TEMPORAL_CONNECTORS: &[&str] = &["for", "since", "in the last"];

/// Connectors that introduce a duration.
pub const DURATION_CONNECTORS: &[&str] = &["for", "since", "in the last", "about"];

/// Duration units. Plurals come first so "3 days" captures "days".
pub const DURATION_UNITS: &[&str] = &[
    "days", "day", "weeks", "week", "months", "month", "years", "year",
];

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static extraction pattern must compile")
}

/// `<verb> <phrase ending in a complaint noun>`; group 1 is the phrase.
pub static COMPLAINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:{}) ([^,.;]+(?:{}))",
        alternation(COMPLAINT_VERBS),
        alternation(COMPLAINT_NOUNS)
    ))
});

/// `<phrase ending in a symptom noun> <temporal connector>`; group 1 is the phrase.
pub static TEMPORAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)([^,.;]+(?:{})) (?:{})",
        alternation(TEMPORAL_NOUNS),
        alternation(TEMPORAL_CONNECTORS)
    ))
});

/// `<connector> <integer> <unit>`; group 1 is the quantity, group 2 the unit.
pub static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"(?i)(?:{}) ([0-9]+) ({})",
        alternation(DURATION_CONNECTORS),
        alternation(DURATION_UNITS)
    ))
});

static TEMPERATURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:temperature|temp|t)[:\s]+([0-9.]+)\s*°?(?:C|F)"));

static HEART_RATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:heart rate|pulse|hr|p)[:\s]+([0-9.]+)\s*bpm"));

static BLOOD_PRESSURE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:blood pressure|bp)[:\s]+([0-9.]+/[0-9.]+)(?:\s*mmHg)?"));

static RESPIRATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)(?:respiration|respiratory rate|rr)[:\s]+([0-9.]+)(?:\s*breaths/min)?")
});

static O2_SAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(?:oxygen saturation|o2 sat|spo2)[:\s]+([0-9.]+)(?:\s*%)?"));

/// The label-and-value pattern for a vital sign; group 1 is the raw value.
pub fn vital_pattern(sign: VitalSign) -> &'static Regex {
    match sign {
        VitalSign::Temperature => &*TEMPERATURE_PATTERN,
        VitalSign::HeartRate => &*HEART_RATE_PATTERN,
        VitalSign::BloodPressure => &*BLOOD_PRESSURE_PATTERN,
        VitalSign::Respiration => &*RESPIRATION_PATTERN,
        VitalSign::O2Sat => &*O2_SAT_PATTERN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert!(COMPLAINT_PATTERN.captures_len() >= 2);
        assert!(TEMPORAL_PATTERN.captures_len() >= 2);
        assert!(DURATION_PATTERN.captures_len() >= 3);
        for sign in VitalSign::ALL {
            assert!(vital_pattern(sign).captures_len() >= 2);
        }
    }

    #[test]
    fn test_temporal_nouns_are_subset() {
        for noun in TEMPORAL_NOUNS {
            assert!(COMPLAINT_NOUNS.contains(noun), "{noun} missing");
        }
        assert!(!TEMPORAL_NOUNS.contains(&"difficulty"));
        assert!(!TEMPORAL_NOUNS.contains(&"problem"));
    }

    #[test]
    fn test_duration_prefers_plural_unit() {
        let caps = DURATION_PATTERN.captures("for 3 days").unwrap();
        assert_eq!(&caps[1], "3");
        assert_eq!(&caps[2], "days");
    }

    #[test]
    fn test_temperature_requires_scale() {
        assert!(vital_pattern(VitalSign::Temperature).is_match("Temp 99.1 F"));
        assert!(vital_pattern(VitalSign::Temperature).is_match("temperature: 37.2°C"));
        assert!(!vital_pattern(VitalSign::Temperature).is_match("temperature 99"));
    }
}
