//! GST/RCM tax compliance engine
//!
//! Pure, synchronous computation core for Indian export-services invoicing:
//! tax-component computation (domestic split, reverse charge), LUT lifecycle
//! rules, fiscal-period arithmetic, filing validation/classification, and
//! period-level aggregation.
//!
//! All functions are deterministic and driven entirely by their inputs; the
//! only stateful contract is LUT activation, which callers must apply as a
//! single storage transaction (see [`lut::ActivationPlan`]).

pub mod calendar;
pub mod filing;
pub mod identifiers;
pub mod lut;
pub mod money;
pub mod summary;
pub mod tax;
