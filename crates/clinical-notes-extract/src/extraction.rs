//! Fact extraction from consultation transcripts.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patterns::{vital_pattern, COMPLAINT_PATTERN, DURATION_PATTERN, TEMPORAL_PATTERN};

/// Text used when no duration was found.
pub const DURATION_NOT_SPECIFIED: &str = "Not specified";

/// The fixed set of vital signs the extractor recognises.
///
/// Declaration order is the order vitals are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalSign {
    Temperature,
    HeartRate,
    BloodPressure,
    Respiration,
    O2Sat,
}

impl VitalSign {
    /// All vital signs in rendering order.
    pub const ALL: [VitalSign; 5] = [
        VitalSign::Temperature,
        VitalSign::HeartRate,
        VitalSign::BloodPressure,
        VitalSign::Respiration,
        VitalSign::O2Sat,
    ];

    /// Key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            VitalSign::Temperature => "temperature",
            VitalSign::HeartRate => "heartRate",
            VitalSign::BloodPressure => "bloodPressure",
            VitalSign::Respiration => "respiration",
            VitalSign::O2Sat => "o2Sat",
        }
    }
}

/// Raw vital sign readings keyed by sign. Absent signs have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vitals(BTreeMap<VitalSign, String>);

impl Vitals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading. Later readings for the same sign are ignored.
    pub fn record(&mut self, sign: VitalSign, value: impl Into<String>) {
        self.0.entry(sign).or_insert_with(|| value.into());
    }

    pub fn get(&self, sign: VitalSign) -> Option<&str> {
        self.0.get(&sign).map(String::as_str)
    }

    pub fn contains(&self, sign: VitalSign) -> bool {
        self.0.contains_key(&sign)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate readings in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (VitalSign, &str)> {
        self.0.iter().map(|(sign, value)| (*sign, value.as_str()))
    }
}

/// How long symptoms have been present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SymptomDuration {
    /// A quantity and unit exactly as written, e.g. ("3", "days").
    Specified { quantity: String, unit: String },
    NotSpecified,
}

impl SymptomDuration {
    pub fn is_specified(&self) -> bool {
        matches!(self, SymptomDuration::Specified { .. })
    }
}

impl fmt::Display for SymptomDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymptomDuration::Specified { quantity, unit } => write!(f, "{} {}", quantity, unit),
            SymptomDuration::NotSpecified => f.write_str(DURATION_NOT_SPECIFIED),
        }
    }
}

/// Everything the extractor found in one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFacts {
    /// Distinct symptom phrases in discovery order.
    pub symptoms: Vec<String>,
    pub duration: SymptomDuration,
    pub vitals: Vitals,
}

/// Run every extractor over a transcript.
pub fn extract_facts(transcript: &str) -> ExtractedFacts {
    let facts = ExtractedFacts {
        symptoms: extract_symptoms(transcript),
        duration: extract_duration(transcript),
        vitals: extract_vitals(transcript),
    };

    tracing::debug!(
        symptoms = facts.symptoms.len(),
        duration_found = facts.duration.is_specified(),
        vitals = facts.vitals.len(),
        "extracted transcript facts"
    );

    facts
}

/// Extract symptom phrases.
///
/// Complaint-verb matches come first, then temporal-connector matches.
/// Exact duplicates keep their first position; phrases that differ only by
/// case or surrounding words are kept as separate entries.
pub fn extract_symptoms(transcript: &str) -> Vec<String> {
    let candidates = COMPLAINT_PATTERN
        .captures_iter(transcript)
        .chain(TEMPORAL_PATTERN.captures_iter(transcript))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim());

    let mut seen = HashSet::new();
    let mut symptoms = Vec::new();
    for phrase in candidates {
        if seen.insert(phrase) {
            symptoms.push(phrase.to_string());
        }
    }
    symptoms
}

/// Extract the first duration mention.
pub fn extract_duration(transcript: &str) -> SymptomDuration {
    match DURATION_PATTERN.captures(transcript) {
        Some(caps) => SymptomDuration::Specified {
            quantity: caps[1].to_string(),
            unit: caps[2].to_string(),
        },
        None => SymptomDuration::NotSpecified,
    }
}

/// Extract the first reading of each vital sign.
pub fn extract_vitals(transcript: &str) -> Vitals {
    let mut vitals = Vitals::new();
    for sign in VitalSign::ALL {
        if let Some(value) = vital_pattern(sign)
            .captures(transcript)
            .and_then(|caps| caps.get(1))
        {
            vitals.record(sign, value.as_str());
        }
    }
    vitals
}
