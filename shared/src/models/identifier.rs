//! GSTIN / PAN validation result types

use serde::{Deserialize, Serialize};

/// PAN holder entity type, derived from the 4th character
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PanEntityType {
    Individual,
    Company,
    Huf,
    Firm,
    Trust,
    Government,
    AssociationOfPersons,
    BodyOfIndividuals,
    LocalAuthority,
    ArtificialJuridicalPerson,
}

/// Structured result of GSTIN format validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GstinValidation {
    pub valid: bool,
    /// 2-digit state-code prefix, when the format checks passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// Embedded 10-character PAN (positions 3-12)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GstinValidation {
    /// Build a failed validation carrying the reason
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            state_code: None,
            state_name: None,
            pan: None,
            error: Some(error.into()),
        }
    }
}

/// Structured result of PAN format validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<PanEntityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PanValidation {
    /// Build a failed validation carrying the reason
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            entity_type: None,
            error: Some(error.into()),
        }
    }
}
