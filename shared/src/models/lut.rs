//! LUT (Letter of Undertaking) Model
//!
//! A LUT authorizes zero-rated export invoicing without upfront IGST for one
//! financial year. At most one LUT may be active per exporter at any time;
//! activating one deactivates its siblings in the same storage transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// LUT validity status, evaluated against a reference date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LutStatus {
    /// Window covers the reference date, expiry more than 30 days away
    Valid,
    /// Window covers the reference date, expiry within 30 days
    Expiring,
    /// Reference date is past `valid_till`
    Expired,
    /// Reference date is before `valid_from`
    NotStarted,
}

/// LUT entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lut {
    pub id: i64,
    /// Acknowledgement reference number issued by the GST portal
    pub lut_number: String,
    /// Date the LUT was issued
    pub issued_on: NaiveDate,
    /// Validity window start (inclusive)
    pub valid_from: NaiveDate,
    /// Validity window end (inclusive)
    pub valid_till: NaiveDate,
    pub is_active: bool,
    /// When the expiry reminder was sent (Unix millis); None if never
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_sent_at: Option<i64>,
    /// Prior LUT in the renewal chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_lut_id: Option<i64>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

/// Create LUT payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutCreate {
    pub lut_number: String,
    pub issued_on: NaiveDate,
    pub valid_from: NaiveDate,
    pub valid_till: NaiveDate,
    pub previous_lut_id: Option<i64>,
}

/// Update LUT payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutUpdate {
    pub lut_number: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub valid_from: Option<NaiveDate>,
    pub valid_till: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Expiry warning view model for the reporting layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LutExpiryWarning {
    pub lut_id: i64,
    pub lut_number: String,
    pub status: LutStatus,
    /// Signed day count to `valid_till` (negative once expired)
    pub days_until_expiry: i64,
    pub message: String,
}
