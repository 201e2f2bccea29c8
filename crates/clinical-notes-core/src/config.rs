//! Runtime configuration.
//!
//! Configuration is resolved once at startup and handed to [`NotesService`].
//! Request handling never reads environment variables.
//!
//! [`NotesService`]: crate::service::NotesService

use crate::{NotesError, NotesResult};

/// Default ceiling on transcript length, in characters.
pub const DEFAULT_MAX_TRANSCRIPT_CHARS: usize = 100_000;

/// Environment variable overriding [`DEFAULT_MAX_TRANSCRIPT_CHARS`].
pub const MAX_TRANSCRIPT_CHARS_ENV: &str = "CLINICAL_NOTES_MAX_TRANSCRIPT_CHARS";

/// Service configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesConfig {
    max_transcript_chars: usize,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            max_transcript_chars: DEFAULT_MAX_TRANSCRIPT_CHARS,
        }
    }
}

impl NotesConfig {
    /// Create a config with an explicit transcript ceiling.
    pub fn new(max_transcript_chars: usize) -> NotesResult<Self> {
        if max_transcript_chars == 0 {
            return Err(NotesError::Config(
                "max_transcript_chars must be greater than zero".into(),
            ));
        }

        Ok(Self {
            max_transcript_chars,
        })
    }

    pub fn max_transcript_chars(&self) -> usize {
        self.max_transcript_chars
    }

    /// Build a config from a raw environment value.
    ///
    /// `None` or a blank value yields the default ceiling.
    pub fn from_env_value(value: Option<String>) -> NotesResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match value {
            Some(raw) => {
                let parsed = raw.parse::<usize>().map_err(|e| {
                    NotesError::Config(format!(
                        "{} must be a positive integer, got {:?}: {}",
                        MAX_TRANSCRIPT_CHARS_ENV, raw, e
                    ))
                })?;
                Self::new(parsed)
            }
            None => Ok(Self::default()),
        }
    }

    /// Read the config from the process environment.
    pub fn from_env() -> NotesResult<Self> {
        Self::from_env_value(std::env::var(MAX_TRANSCRIPT_CHARS_ENV).ok())
    }
}
