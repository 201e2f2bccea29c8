//! Patient demographic models.

use serde::{Deserialize, Serialize};

/// Optional demographics supplied alongside a transcript.
///
/// Every field is free text. A missing or empty field means "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatientInfo {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Age in years, as given by the caller
    #[serde(default)]
    pub age: Option<String>,
    /// Gender, as given by the caller
    #[serde(default)]
    pub gender: Option<String>,
}

impl PatientInfo {
    /// Create demographics with every field provided.
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            age: Some(age.into()),
            gender: Some(gender.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        provided(&self.name)
    }

    pub fn age(&self) -> Option<&str> {
        provided(&self.age)
    }

    pub fn gender(&self) -> Option<&str> {
        provided(&self.gender)
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.age().is_none() && self.gender().is_none()
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
