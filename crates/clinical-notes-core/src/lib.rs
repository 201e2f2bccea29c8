//! Clinical Notes Core Library
//!
//! Deterministic, rule-based SOAP note synthesis from consultation transcripts.
//!
//! # Architecture
//!
//! ```text
//! Speech-to-text (external) → Transcript (+ PatientInfo)
//!                                     │
//!                         [validate: blank / too long]
//!                                     │
//!                               Fact Extraction
//!                    symptoms · first duration · vital signs
//!                                     │
//!                               ExtractedFacts
//!                                     │
//!             ┌───────────────┬───────┴───────┬───────────────┐
//!             ▼               ▼               ▼               ▼
//!        Subjective       Objective       Assessment         Plan
//!             └───────────────┴───────┬───────┴───────────────┘
//!                                     ▼
//!                                  SoapNote
//! ```
//!
//! # Core Principle
//!
//! **Same input, same note.** Every stage is a pure function over fixed,
//! ordered lookup tables. There is no state shared between calls.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientInfo, SoapNote)
//! - [`composer`]: Section builders and lookup tables
//! - [`config`]: Startup configuration
//! - [`service`]: Request validation and the generation service

pub mod composer;
pub mod config;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use clinical_notes_extract::{ExtractedFacts, SymptomDuration, VitalSign, Vitals};
pub use composer::{compose, compose_from_facts, format_patient_descriptor};
pub use config::NotesConfig;
pub use models::{PatientInfo, SoapNote};
pub use service::{GenerateNotesRequest, NotesService};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::Arc;

// =========================================================================
// Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum NotesError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for NotesError {
    fn from(e: serde_json::Error) -> Self {
        NotesError::Serialization(e.to_string())
    }
}

pub type NotesResult<T> = Result<T, NotesError>;

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a notes engine. `None` uses the default transcript ceiling.
#[uniffi::export]
pub fn open_notes_engine(
    max_transcript_chars: Option<u32>,
) -> Result<Arc<ClinicalNotesCore>, NotesError> {
    let config = match max_transcript_chars {
        Some(max) => NotesConfig::new(max as usize)?,
        None => NotesConfig::default(),
    };
    Ok(Arc::new(ClinicalNotesCore {
        service: NotesService::new(config),
    }))
}

/// Describe a patient the way the Subjective section does.
#[uniffi::export]
pub fn format_patient_description(patient_info: Option<FfiPatientInfo>) -> String {
    let info = patient_info.map(PatientInfo::from);
    format_patient_descriptor(info.as_ref())
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe notes engine for FFI.
#[derive(uniffi::Object)]
pub struct ClinicalNotesCore {
    service: NotesService,
}

#[uniffi::export]
impl ClinicalNotesCore {
    /// Generate a SOAP note from a transcript.
    pub fn generate_notes(
        &self,
        transcription: String,
        patient_info: Option<FfiPatientInfo>,
    ) -> Result<FfiSoapNote, NotesError> {
        let request = GenerateNotesRequest {
            transcription: Some(transcription),
            patient_info: patient_info.map(PatientInfo::from),
        };
        let note = self.service.generate(&request)?;
        FfiSoapNote::try_from(note)
    }

    /// Extract facts from a transcript without composing a note.
    pub fn extract_facts(&self, transcription: String) -> Result<FfiExtractedFacts, NotesError> {
        let facts = self.service.extract(&transcription)?;
        Ok(facts.into())
    }

    /// Configured transcript ceiling in characters.
    pub fn max_transcript_chars(&self) -> u64 {
        self.service.config().max_transcript_chars() as u64
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe patient demographics.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiPatientInfo {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

impl From<FfiPatientInfo> for PatientInfo {
    fn from(info: FfiPatientInfo) -> Self {
        PatientInfo {
            name: info.name,
            age: info.age,
            gender: info.gender,
        }
    }
}

/// FFI-safe SOAP note with its audit fingerprint.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSoapNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
    pub fingerprint: String,
}

impl TryFrom<SoapNote> for FfiSoapNote {
    type Error = NotesError;

    fn try_from(note: SoapNote) -> Result<Self, Self::Error> {
        let fingerprint = note.fingerprint()?;
        Ok(Self {
            subjective: note.subjective,
            objective: note.objective,
            assessment: note.assessment,
            plan: note.plan,
            fingerprint,
        })
    }
}

/// FFI-safe vital sign reading.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiVitalReading {
    pub key: String,
    pub value: String,
}

/// FFI-safe extracted facts.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiExtractedFacts {
    pub symptoms: Vec<String>,
    /// `None` when no duration was found
    pub duration: Option<String>,
    pub vitals: Vec<FfiVitalReading>,
}

impl From<ExtractedFacts> for FfiExtractedFacts {
    fn from(facts: ExtractedFacts) -> Self {
        let duration = facts
            .duration
            .is_specified()
            .then(|| facts.duration.to_string());
        let vitals = facts
            .vitals
            .iter()
            .map(|(sign, value)| FfiVitalReading {
                key: sign.key().to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            symptoms: facts.symptoms,
            duration,
            vitals,
        }
    }
}
