//! Unified error codes for the GST compliance suite
//!
//! This module defines all error codes used across the compliance engine and
//! the application layers consuming it. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Identifier errors (GSTIN / PAN)
//! - 2xxx: LUT errors
//! - 3xxx: Tax computation errors
//! - 4xxx: Filing errors
//! - 5xxx: Period summary errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Identifier ====================
    /// GSTIN does not match the 15-character positional pattern
    GstinInvalidFormat = 1001,
    /// GSTIN state-code prefix is not a known state/UT code
    GstinUnknownStateCode = 1002,
    /// GSTIN checksum character looks wrong (heuristic check)
    GstinChecksumSuspect = 1003,
    /// PAN does not match the 10-character pattern
    PanInvalidFormat = 1004,

    // ==================== 2xxx: LUT ====================
    /// LUT not found
    LutNotFound = 2001,
    /// LUT dates are inconsistent (issued > valid_from or valid_from > valid_till)
    LutDatesInconsistent = 2002,
    /// LUT is not active
    LutInactive = 2003,
    /// LUT is referenced by existing invoices
    LutHasInvoices = 2004,
    /// LUT validity window does not cover the requested date
    LutWindowExcludesDate = 2005,

    // ==================== 3xxx: Tax computation ====================
    /// Exchange rate required for foreign-currency amount
    MissingExchangeRate = 3001,
    /// Exchange rate must be positive
    InvalidExchangeRate = 3002,
    /// Tax rate is out of range
    InvalidTaxRate = 3003,
    /// Monetary amount is invalid (negative or non-finite)
    InvalidAmount = 3004,
    /// Reverse-charge supply could not be classified
    UnclassifiedRcmSupply = 3005,

    // ==================== 4xxx: Filing ====================
    /// Filing period string is not a valid YYYY-MM month
    InvalidFilingPeriod = 4001,
    /// Transaction not found
    TransactionNotFound = 4002,

    // ==================== 5xxx: Period summary ====================
    /// Period range is invalid (empty or reversed)
    InvalidPeriodRange = 5001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Identifier
            ErrorCode::GstinInvalidFormat => "GSTIN format is invalid",
            ErrorCode::GstinUnknownStateCode => "GSTIN state code is not recognized",
            ErrorCode::GstinChecksumSuspect => "GSTIN checksum character looks invalid",
            ErrorCode::PanInvalidFormat => "PAN format is invalid",

            // LUT
            ErrorCode::LutNotFound => "LUT not found",
            ErrorCode::LutDatesInconsistent => "LUT dates are inconsistent",
            ErrorCode::LutInactive => "LUT is not active",
            ErrorCode::LutHasInvoices => "LUT is referenced by existing invoices",
            ErrorCode::LutWindowExcludesDate => "LUT validity window does not cover the date",

            // Tax computation
            ErrorCode::MissingExchangeRate => {
                "Exchange rate is required for foreign-currency amounts"
            }
            ErrorCode::InvalidExchangeRate => "Exchange rate must be a positive number",
            ErrorCode::InvalidTaxRate => "Tax rate is out of range",
            ErrorCode::InvalidAmount => "Monetary amount is invalid",
            ErrorCode::UnclassifiedRcmSupply => "Reverse-charge supply could not be classified",

            // Filing
            ErrorCode::InvalidFilingPeriod => "Filing period must be a valid YYYY-MM month",
            ErrorCode::TransactionNotFound => "Transaction not found",

            // Period summary
            ErrorCode::InvalidPeriodRange => "Period range is invalid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Identifier
            1001 => Ok(ErrorCode::GstinInvalidFormat),
            1002 => Ok(ErrorCode::GstinUnknownStateCode),
            1003 => Ok(ErrorCode::GstinChecksumSuspect),
            1004 => Ok(ErrorCode::PanInvalidFormat),

            // LUT
            2001 => Ok(ErrorCode::LutNotFound),
            2002 => Ok(ErrorCode::LutDatesInconsistent),
            2003 => Ok(ErrorCode::LutInactive),
            2004 => Ok(ErrorCode::LutHasInvoices),
            2005 => Ok(ErrorCode::LutWindowExcludesDate),

            // Tax computation
            3001 => Ok(ErrorCode::MissingExchangeRate),
            3002 => Ok(ErrorCode::InvalidExchangeRate),
            3003 => Ok(ErrorCode::InvalidTaxRate),
            3004 => Ok(ErrorCode::InvalidAmount),
            3005 => Ok(ErrorCode::UnclassifiedRcmSupply),

            // Filing
            4001 => Ok(ErrorCode::InvalidFilingPeriod),
            4002 => Ok(ErrorCode::TransactionNotFound),

            // Period summary
            5001 => Ok(ErrorCode::InvalidPeriodRange),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::RequiredField.code(), 7);

        // Identifier
        assert_eq!(ErrorCode::GstinInvalidFormat.code(), 1001);
        assert_eq!(ErrorCode::GstinUnknownStateCode.code(), 1002);
        assert_eq!(ErrorCode::PanInvalidFormat.code(), 1004);

        // LUT
        assert_eq!(ErrorCode::LutNotFound.code(), 2001);
        assert_eq!(ErrorCode::LutDatesInconsistent.code(), 2002);
        assert_eq!(ErrorCode::LutHasInvoices.code(), 2004);

        // Tax computation
        assert_eq!(ErrorCode::MissingExchangeRate.code(), 3001);
        assert_eq!(ErrorCode::InvalidExchangeRate.code(), 3002);
        assert_eq!(ErrorCode::InvalidAmount.code(), 3004);

        // Filing
        assert_eq!(ErrorCode::InvalidFilingPeriod.code(), 4001);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::LutNotFound.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::GstinInvalidFormat));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::LutNotFound));
        assert_eq!(ErrorCode::try_from(3001), Ok(ErrorCode::MissingExchangeRate));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::LutNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "2001");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("3001").unwrap();
        assert_eq!(code, ErrorCode::MissingExchangeRate);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::LutNotFound), "2001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::LutNotFound.message(), "LUT not found");
        assert_eq!(
            ErrorCode::MissingExchangeRate.message(),
            "Exchange rate is required for foreign-currency amounts"
        );
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::GstinInvalidFormat,
            ErrorCode::LutDatesInconsistent,
            ErrorCode::MissingExchangeRate,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }
}
