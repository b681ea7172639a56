//! Domain models for the GST compliance suite

pub mod filing;
pub mod identifier;
pub mod lut;
pub mod summary;
pub mod tax;
pub mod transaction;

pub use filing::{FilingPeriod, FilingScheduleRow, ReturnTable, Severity, ValidationFlag};
pub use identifier::{GstinValidation, PanEntityType, PanValidation};
pub use lut::{Lut, LutCreate, LutExpiryWarning, LutStatus, LutUpdate};
pub use summary::{PeriodTaxSummary, PeriodTotals, TaxAmounts, TaxComponents};
pub use tax::{RcmAssessment, TaxSplit};
pub use transaction::{
    ExtractionResult, ReviewStatus, TransactionForValidation, TransactionType,
};
