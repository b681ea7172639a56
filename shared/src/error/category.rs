//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Identifier errors (GSTIN / PAN)
/// - 2xxx: LUT errors
/// - 3xxx: Tax computation errors
/// - 4xxx: Filing errors
/// - 5xxx: Period summary errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Identifier errors (1xxx)
    Identifier,
    /// LUT errors (2xxx)
    Lut,
    /// Tax computation errors (3xxx)
    TaxComputation,
    /// Filing errors (4xxx)
    Filing,
    /// Period summary errors (5xxx)
    Summary,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Identifier,
            2000..3000 => Self::Lut,
            3000..4000 => Self::TaxComputation,
            4000..5000 => Self::Filing,
            5000..6000 => Self::Summary,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Identifier => "identifier",
            Self::Lut => "lut",
            Self::TaxComputation => "tax_computation",
            Self::Filing => "filing",
            Self::Summary => "summary",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Identifier);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Identifier);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Lut);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::TaxComputation);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Filing);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Summary);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::GstinInvalidFormat.category(),
            ErrorCategory::Identifier
        );
        assert_eq!(ErrorCode::LutNotFound.category(), ErrorCategory::Lut);
        assert_eq!(
            ErrorCode::MissingExchangeRate.category(),
            ErrorCategory::TaxComputation
        );
        assert_eq!(
            ErrorCode::InvalidFilingPeriod.category(),
            ErrorCategory::Filing
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Identifier.name(), "identifier");
        assert_eq!(ErrorCategory::Lut.name(), "lut");
        assert_eq!(ErrorCategory::TaxComputation.name(), "tax_computation");
        assert_eq!(ErrorCategory::Filing.name(), "filing");
        assert_eq!(ErrorCategory::Summary.name(), "summary");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::Lut;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"lut\"");

        let category = ErrorCategory::TaxComputation;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"tax_computation\"");
    }

    #[test]
    fn test_category_deserialize() {
        let category: ErrorCategory = serde_json::from_str("\"lut\"").unwrap();
        assert_eq!(category, ErrorCategory::Lut);

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
