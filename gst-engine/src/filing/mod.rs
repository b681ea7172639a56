//! Filing validation, statutory table assignment, and review scoring
//!
//! [`validate`] is a pure function over a transaction snapshot and the filing
//! period under preparation. Rules are independent: every applicable rule
//! fires, none short-circuits another, and each code appears at most once per
//! pass. Flags are advisory view models; nothing here writes back to the
//! source records.

mod confidence;

pub use confidence::{confidence_score, review_status};

use shared::models::filing::{FilingPeriod, ReturnTable, Severity, ValidationFlag};
use shared::models::transaction::{TransactionForValidation, TransactionType};

use crate::money::is_zero;

/// Home-currency total above which a transaction is flagged for disclosure
pub const HIGH_VALUE_THRESHOLD_INR: f64 = 1_000_000.0;

/// Evaluate every validation rule against one transaction
pub fn validate(txn: &TransactionForValidation, period: &FilingPeriod) -> Vec<ValidationFlag> {
    let mut flags = Vec::new();

    // Zero-rated export with no undertaking on file. An export that charged
    // IGST is the with-payment route and needs no LUT, so it never flags.
    if txn.transaction_type == TransactionType::Export
        && is_zero(txn.tax_charged)
        && txn.lut_id.is_none()
    {
        flags.push(ValidationFlag::new(
            "EXPORT_NO_LUT",
            "Zero-rated export has no Letter of Undertaking on file",
            Severity::Warning,
        ));
    }

    // Window check runs only when the snapshot carries both bounds; a linked
    // LUT with missing dates is a data gap, not an expiry finding.
    if txn.lut_id.is_some() {
        if let (Some(from), Some(till)) = (txn.lut_valid_from, txn.lut_valid_till) {
            if txn.date < from || txn.date > till {
                flags.push(ValidationFlag::new(
                    "LUT_EXPIRED",
                    format!(
                        "Linked LUT validity {} to {} does not cover invoice date {}",
                        from, till, txn.date
                    ),
                    Severity::Error,
                ));
            }
        }
    }

    if txn.total_inr > HIGH_VALUE_THRESHOLD_INR {
        flags.push(ValidationFlag::new(
            "HIGH_VALUE",
            format!(
                "Transaction value INR {:.2} exceeds the {:.0} disclosure threshold",
                txn.total_inr, HIGH_VALUE_THRESHOLD_INR
            ),
            Severity::Info,
        ));
    }

    let txn_month = txn.date.format("%Y-%m").to_string();
    if txn_month != period.period {
        flags.push(ValidationFlag::new(
            "PERIOD_MISMATCH",
            format!(
                "Invoice dated {} falls outside filing period {}",
                txn.date, period.period
            ),
            Severity::Warning,
        ));
    }

    if txn.reverse_charge && txn.payment_voucher.is_none() {
        flags.push(ValidationFlag::new(
            "RCM_NO_PAYMENT_VOUCHER",
            "Reverse-charge supply has no payment voucher reference",
            Severity::Warning,
        ));
    }

    flags
}

/// Map a transaction's shape to its statutory return table
///
/// Total mapping: shapes that fit no table come back as
/// [`ReturnTable::Unclassified`] rather than an error.
pub fn assign_table(txn: &TransactionForValidation) -> ReturnTable {
    match txn.transaction_type {
        TransactionType::Export => {
            if is_zero(txn.tax_charged) {
                ReturnTable::Gstr3bZeroRated
            } else {
                ReturnTable::Gstr1Exports
            }
        }
        TransactionType::DomesticB2b => ReturnTable::Gstr1B2b,
        TransactionType::SelfInvoice => ReturnTable::Gstr3bInwardRcm,
        TransactionType::Other => {
            if txn.reverse_charge {
                ReturnTable::Gstr3bInwardRcm
            } else if is_zero(txn.tax_charged) {
                ReturnTable::Unclassified
            } else {
                ReturnTable::Gstr3bOutwardTaxable
            }
        }
    }
}
