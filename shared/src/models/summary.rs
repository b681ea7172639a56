//! Period tax summary view models
//!
//! [`PeriodTaxSummary`] is recomputed fresh per query from the underlying
//! transactions; it is never persisted as a source of truth.

use serde::{Deserialize, Serialize};

/// Component-wise tax amounts for one bucket (no total)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TaxComponents {
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
}

impl TaxComponents {
    pub fn new(igst: f64, cgst: f64, sgst: f64) -> Self {
        Self { igst, cgst, sgst }
    }
}

/// Component-wise tax amounts with a derived total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TaxAmounts {
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
    pub total: f64,
}

/// Aggregated period totals supplied to the summary aggregator
///
/// Each bucket is already summed over the period's transactions by the
/// storage layer; the aggregator only combines buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct PeriodTotals {
    /// Output liability on outward supplies
    pub output: TaxComponents,
    /// Reverse-charge liability self-assessed in the period
    pub rcm: TaxComponents,
    /// Ordinary input credit claimed in the period (excluding RCM self-credit)
    pub itc: TaxComponents,
}

/// Period-level tax position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTaxSummary {
    /// `YYYY-MM`
    pub period: String,
    pub output_liability: TaxAmounts,
    /// Disclosed separately even though it nets to zero within the period
    pub rcm_liability: TaxAmounts,
    /// Ordinary ITC plus RCM self-credit, component-wise
    pub itc_available: TaxAmounts,
    /// Remaining cash liability after credit offset, clamped at zero per component
    pub net_payable: TaxAmounts,
    /// Credit left over after offsets; candidate for refund. Always >= 0.
    pub accumulated_credit: f64,
}
