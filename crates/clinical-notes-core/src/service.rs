//! Request validation and the note generation service.

use clinical_notes_extract::{extract_facts, ExtractedFacts};
use serde::{Deserialize, Serialize};

use crate::composer::compose_from_facts;
use crate::config::NotesConfig;
use crate::models::{PatientInfo, SoapNote};
use crate::{NotesError, NotesResult};

/// A note generation request as received from a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateNotesRequest {
    /// Consultation transcript
    #[serde(default)]
    pub transcription: Option<String>,
    /// Optional demographics
    #[serde(default)]
    pub patient_info: Option<PatientInfo>,
}

impl GenerateNotesRequest {
    pub fn new(transcription: impl Into<String>) -> Self {
        Self {
            transcription: Some(transcription.into()),
            patient_info: None,
        }
    }

    pub fn with_patient_info(mut self, patient_info: PatientInfo) -> Self {
        self.patient_info = Some(patient_info);
        self
    }

    /// Check the request and return the transcript to process.
    pub fn validate(&self, config: &NotesConfig) -> NotesResult<&str> {
        let transcript = self.transcription.as_deref().unwrap_or_default();
        validate_transcript(transcript, config)?;
        Ok(transcript)
    }
}

/// Reject blank transcripts and transcripts over the configured ceiling.
pub fn validate_transcript(transcript: &str, config: &NotesConfig) -> NotesResult<()> {
    if transcript.trim().is_empty() {
        return Err(NotesError::InvalidInput("No transcription provided".into()));
    }

    let length = transcript.chars().count();
    if length > config.max_transcript_chars() {
        return Err(NotesError::InvalidInput(format!(
            "Transcription is {} characters, limit is {}",
            length,
            config.max_transcript_chars()
        )));
    }

    Ok(())
}

/// Validates requests and runs extraction and composition.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Clone, Debug, Default)]
pub struct NotesService {
    config: NotesConfig,
}

impl NotesService {
    pub fn new(config: NotesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    /// Generate a SOAP note for a request.
    pub fn generate(&self, request: &GenerateNotesRequest) -> NotesResult<SoapNote> {
        let transcript = request.validate(&self.config).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected note generation request");
        })?;

        let facts = extract_facts(transcript);
        let note = compose_from_facts(&facts, request.patient_info.as_ref());

        tracing::debug!(
            transcript_chars = transcript.chars().count(),
            symptoms = facts.symptoms.len(),
            vitals = facts.vitals.len(),
            has_patient_info = request.patient_info.is_some(),
            "generated SOAP note"
        );

        Ok(note)
    }

    /// Generate a note from a JSON request body, returning the note as JSON.
    pub fn generate_from_json(&self, body: &str) -> NotesResult<String> {
        let request: GenerateNotesRequest = serde_json::from_str(body)?;
        let note = self.generate(&request)?;
        Ok(serde_json::to_string(&note)?)
    }

    /// Extract facts without composing a note.
    pub fn extract(&self, transcript: &str) -> NotesResult<ExtractedFacts> {
        validate_transcript(transcript, &self.config)?;
        Ok(extract_facts(transcript))
    }
}
