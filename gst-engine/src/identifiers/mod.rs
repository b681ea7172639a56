//! GSTIN / PAN format validation and state-code extraction
//!
//! Validation is positional pattern matching, not registry lookup. The GSTIN
//! check is format-level only: the final checksum character is verified to be
//! alphanumeric but the weighted mod-36 checksum algorithm is NOT implemented.
//! Callers needing registry-grade validation must not over-trust this result.

mod state_codes;

pub use state_codes::{STATE_CODES, state_name};

use shared::models::identifier::{GstinValidation, PanEntityType, PanValidation};

/// Validate a GSTIN's 15-character positional structure
///
/// Pattern: 2 digits (state code) + 10-character embedded PAN + 1 entity code
/// + literal 'Z' + 1 checksum character. Input is uppercased before checking.
pub fn validate_gstin(value: &str) -> GstinValidation {
    let value = value.trim().to_uppercase();
    let chars: Vec<char> = value.chars().collect();

    if chars.len() != 15 {
        return GstinValidation::invalid(format!(
            "GSTIN must be 15 characters, got {}",
            chars.len()
        ));
    }
    if !chars[0..2].iter().all(|c| c.is_ascii_digit()) {
        return GstinValidation::invalid("GSTIN must start with a 2-digit state code");
    }
    if !chars[2..7].iter().all(|c| c.is_ascii_uppercase()) {
        return GstinValidation::invalid("GSTIN characters 3-7 must be letters");
    }
    if !chars[7..11].iter().all(|c| c.is_ascii_digit()) {
        return GstinValidation::invalid("GSTIN characters 8-11 must be digits");
    }
    if !chars[11].is_ascii_uppercase() {
        return GstinValidation::invalid("GSTIN character 12 must be a letter");
    }
    if !chars[12].is_ascii_alphanumeric() {
        return GstinValidation::invalid("GSTIN character 13 must be alphanumeric");
    }
    if chars[13] != 'Z' {
        return GstinValidation::invalid("GSTIN character 14 must be 'Z'");
    }
    // Approximate checksum check: the slot must be alphanumeric. The real
    // weighted mod-36 checksum is not computed here.
    if !chars[14].is_ascii_alphanumeric() {
        return GstinValidation::invalid("GSTIN checksum character must be alphanumeric");
    }

    let state_code = &value[0..2];
    let Some(state) = state_name(state_code) else {
        return GstinValidation::invalid(format!("Unknown GST state code '{}'", state_code));
    };

    GstinValidation {
        valid: true,
        state_code: Some(state_code.to_string()),
        state_name: Some(state.to_string()),
        pan: Some(value[2..12].to_string()),
        error: None,
    }
}

/// Validate a PAN's 10-character structure and derive the holder type
///
/// Pattern: 5 letters + 4 digits + 1 letter. The 4th character encodes the
/// holder entity type; unmapped codes default to Individual.
pub fn validate_pan(value: &str) -> PanValidation {
    let value = value.trim().to_uppercase();
    let chars: Vec<char> = value.chars().collect();

    if chars.len() != 10 {
        return PanValidation::invalid(format!(
            "PAN must be 10 characters, got {}",
            chars.len()
        ));
    }
    if !chars[0..5].iter().all(|c| c.is_ascii_uppercase()) {
        return PanValidation::invalid("PAN characters 1-5 must be letters");
    }
    if !chars[5..9].iter().all(|c| c.is_ascii_digit()) {
        return PanValidation::invalid("PAN characters 6-9 must be digits");
    }
    if !chars[9].is_ascii_uppercase() {
        return PanValidation::invalid("PAN character 10 must be a letter");
    }

    PanValidation {
        valid: true,
        entity_type: Some(entity_type_of(chars[3])),
        error: None,
    }
}

/// Holder entity type from the PAN's 4th character
fn entity_type_of(code: char) -> PanEntityType {
    match code {
        'P' => PanEntityType::Individual,
        'C' => PanEntityType::Company,
        'H' => PanEntityType::Huf,
        'F' => PanEntityType::Firm,
        'T' => PanEntityType::Trust,
        'G' => PanEntityType::Government,
        'A' => PanEntityType::AssociationOfPersons,
        'B' => PanEntityType::BodyOfIndividuals,
        'L' => PanEntityType::LocalAuthority,
        'J' => PanEntityType::ArtificialJuridicalPerson,
        other => {
            tracing::debug!(code = %other, "Unmapped PAN entity-type character, defaulting to individual");
            PanEntityType::Individual
        }
    }
}
