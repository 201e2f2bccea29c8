//! The composed SOAP note.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A four-section clinical note. No section is ever empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoapNote {
    /// Patient-reported history
    pub subjective: String,
    /// Measured findings
    pub objective: String,
    /// Working diagnoses
    pub assessment: String,
    /// Numbered management steps
    pub plan: String,
}

impl SoapNote {
    /// Serialize to canonical JSON. Field order is fixed by declaration.
    pub fn to_canonical_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Hex SHA-256 of the canonical JSON, for comparing generations.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let json = self.to_canonical_json()?;
        let mut hasher = Sha256::new();
        hasher.update(json.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }

    /// Sections paired with their headings, in SOAP order.
    pub fn sections(&self) -> [(&'static str, &str); 4] {
        [
            ("Subjective", self.subjective.as_str()),
            ("Objective", self.objective.as_str()),
            ("Assessment", self.assessment.as_str()),
            ("Plan", self.plan.as_str()),
        ]
    }
}
