//! Transaction projection and document-extraction types
//!
//! [`TransactionForValidation`] is a read-only snapshot of an invoice or
//! self-invoice consumed by the filing validation engine. Validation never
//! writes back to source records; it only emits derived flags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Transaction classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Export of services (zero-rated under LUT, or with IGST payment)
    Export,
    /// Domestic business-to-business supply
    DomesticB2b,
    /// Self-invoice raised for reverse-charge inward supply
    SelfInvoice,
    /// Anything else (domestic B2C, credit notes, etc.)
    Other,
}

/// Read-only invoice projection for the filing engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionForValidation {
    pub id: i64,
    pub transaction_type: TransactionType,
    /// Reverse-charge flag (recipient self-assesses the tax)
    #[serde(default)]
    pub reverse_charge: bool,
    /// Counterparty country (ISO name or code, as recorded on the invoice)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_country: Option<String>,
    /// Counterparty GSTIN, when registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty_gstin: Option<String>,
    /// Linked LUT and its validity window, when the invoice was issued under one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lut_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lut_valid_from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lut_valid_till: Option<NaiveDate>,
    /// Invoice date
    pub date: NaiveDate,
    /// Total value in home currency (INR)
    pub total_inr: f64,
    /// Tax already charged on the invoice (IGST for exports)
    #[serde(default)]
    pub tax_charged: f64,
    /// Payment voucher reference, required for reverse-charge self-invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_voucher: Option<String>,
}

/// Review status derived from the confidence score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStatus {
    /// Score >= 90
    AutoApproved,
    /// Score in 70..=89
    ReviewRecommended,
    /// Score < 70
    ManualRequired,
}

/// Structured output of the upstream document-extraction pipeline
///
/// Consumed only by the confidence-scoring sub-function; the extraction
/// pipeline itself is out of scope.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExtractionResult {
    /// Classification derived from the extracted content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    /// Document-type hint reported by the extraction source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Counterparty GSTIN, when the document carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin: Option<String>,
}
