//! Filing period and validation flag types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flag severity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A single validation finding on a transaction
///
/// Multiple flags may apply to one transaction; each code fires at most once
/// per evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationFlag {
    /// Symbolic identifier, e.g. `EXPORT_NO_LUT`
    pub code: String,
    /// Human-readable explanation, surfaced verbatim by the UI
    pub message: String,
    pub severity: Severity,
}

impl ValidationFlag {
    pub fn new(code: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Statutory return table a transaction reports under
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReturnTable {
    /// GSTR-1 Table 6A — exports
    Gstr1Exports,
    /// GSTR-1 Table 4A — domestic B2B supplies
    Gstr1B2b,
    /// GSTR-3B 3.1(b) — zero-rated outward supplies
    Gstr3bZeroRated,
    /// GSTR-3B 3.1(d) — inward supplies liable to reverse charge
    Gstr3bInwardRcm,
    /// GSTR-3B 3.1(a) — outward taxable supplies
    Gstr3bOutwardTaxable,
    /// Shape did not map to any statutory table
    Unclassified,
}

impl ReturnTable {
    /// Statutory table label as it appears on the return form
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gstr1Exports => "GSTR-1 6A",
            Self::Gstr1B2b => "GSTR-1 4A",
            Self::Gstr3bZeroRated => "GSTR-3B 3.1(b)",
            Self::Gstr3bInwardRcm => "GSTR-3B 3.1(d)",
            Self::Gstr3bOutwardTaxable => "GSTR-3B 3.1(a)",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }
}

/// A filing period: one calendar month with derived fiscal year and due dates
///
/// Purely a function of the `YYYY-MM` period string; immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilingPeriod {
    /// `YYYY-MM`
    pub period: String,
    /// `YYYY-YY`, fiscal year starting in April
    pub fiscal_year: String,
    /// GSTR-1 due date: 11th of the following month
    pub gstr1_due: NaiveDate,
    /// GSTR-3B due date: 20th of the following month
    pub gstr3b_due: NaiveDate,
}

/// One row of the filing schedule dashboard view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingScheduleRow {
    pub period: FilingPeriod,
    pub gstr1_overdue: bool,
    pub gstr1_days_left: i64,
    pub gstr3b_overdue: bool,
    pub gstr3b_days_left: i64,
}
