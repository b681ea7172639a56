//! Tax computation result types
//!
//! All amounts are in home currency (INR), rounded to 2 decimal places by the
//! computation engine before they land here.

use serde::{Deserialize, Serialize};

/// Result of a domestic forward-charge split computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaxSplit {
    /// Single inter-state component (full rate), zero when intrastate
    pub igst: f64,
    /// Central half of the intrastate split, zero when interstate
    pub cgst: f64,
    /// State half of the intrastate split, zero when interstate
    pub sgst: f64,
    /// Secondary levy, computed independently on the same base
    pub cess: f64,
    /// Sum of all components
    pub total: f64,
}

/// Result of a reverse-charge assessment
///
/// Self-assessed tax is fully creditable in the same period, so
/// `itc_claimable` always equals `total_tax`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RcmAssessment {
    /// Taxable value in INR after any currency conversion
    pub taxable_value: f64,
    pub igst: f64,
    pub cgst: f64,
    pub sgst: f64,
    /// RCM liability: sum of the computed components
    pub total_tax: f64,
    /// Input credit claimable against the liability (equals `total_tax`)
    pub itc_claimable: f64,
}
