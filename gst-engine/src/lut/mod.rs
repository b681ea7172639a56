//! LUT lifecycle rules: validity windows, expiry reminders, activation
//!
//! Validity windows are inclusive on both ends. At most one LUT may be
//! active per exporter; [`plan_activation`] computes the sibling
//! deactivations and the caller must apply the whole plan inside a single
//! storage transaction.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::lut::{Lut, LutExpiryWarning, LutStatus};

/// Days before `valid_till` at which a LUT counts as expiring
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// A LUT covers a date iff it is active and the window contains the date
/// (inclusive both ends)
pub fn is_valid(lut: &Lut, as_of: NaiveDate) -> bool {
    lut.is_active && lut.valid_from <= as_of && as_of <= lut.valid_till
}

/// Signed day count to `valid_till` (negative once expired)
pub fn days_until_expiry(lut: &Lut, now: NaiveDate) -> i64 {
    (lut.valid_till - now).num_days()
}

/// Window status relative to `now`, ignoring the active flag
///
/// Evaluated in precedence order: not started, expired, expiring, valid.
pub fn status(lut: &Lut, now: NaiveDate) -> LutStatus {
    if now < lut.valid_from {
        LutStatus::NotStarted
    } else if now > lut.valid_till {
        LutStatus::Expired
    } else if days_until_expiry(lut, now) <= EXPIRY_WARNING_DAYS {
        LutStatus::Expiring
    } else {
        LutStatus::Valid
    }
}

/// Whether the expiry reminder should go out now
///
/// Fires once: active LUT, no reminder sent yet, expiry within the warning
/// window (0..=30 days).
pub fn should_send_reminder(lut: &Lut, now: NaiveDate) -> bool {
    if !lut.is_active || lut.reminder_sent_at.is_some() {
        return false;
    }
    let days = days_until_expiry(lut, now);
    (0..=EXPIRY_WARNING_DAYS).contains(&days)
}

/// Resolve the active LUT covering an invoice date
///
/// Returns `None` when no active LUT's window contains the date — an
/// inactive LUT is never a fallback, even if its window matches.
pub fn resolve_active_for_date(luts: &[Lut], date: NaiveDate) -> Option<&Lut> {
    luts.iter().find(|lut| is_valid(lut, date))
}

/// Build the expiry warning view for the reporting layer
pub fn expiry_warning(lut: &Lut, now: NaiveDate) -> LutExpiryWarning {
    let st = status(lut, now);
    let days = days_until_expiry(lut, now);
    let message = match st {
        LutStatus::NotStarted => format!(
            "LUT {} becomes valid on {}",
            lut.lut_number, lut.valid_from
        ),
        LutStatus::Expired => format!(
            "LUT {} expired on {}; exports now require IGST payment or a new LUT",
            lut.lut_number, lut.valid_till
        ),
        LutStatus::Expiring => format!(
            "LUT {} expires in {} day(s) on {}; file a renewal",
            lut.lut_number, days, lut.valid_till
        ),
        LutStatus::Valid => format!("LUT {} is valid until {}", lut.lut_number, lut.valid_till),
    };
    LutExpiryWarning {
        lut_id: lut.id,
        lut_number: lut.lut_number.clone(),
        status: st,
        days_until_expiry: days,
        message,
    }
}

/// Validate the date ordering invariant: issued <= valid_from <= valid_till
pub fn validate_dates(
    issued_on: NaiveDate,
    valid_from: NaiveDate,
    valid_till: NaiveDate,
) -> AppResult<()> {
    if issued_on > valid_from {
        return Err(AppError::with_message(
            ErrorCode::LutDatesInconsistent,
            format!(
                "LUT issue date {} is after validity start {}",
                issued_on, valid_from
            ),
        ));
    }
    if valid_from > valid_till {
        return Err(AppError::with_message(
            ErrorCode::LutDatesInconsistent,
            format!(
                "LUT validity start {} is after validity end {}",
                valid_from, valid_till
            ),
        ));
    }
    Ok(())
}

/// The write set for activating one LUT among its siblings
///
/// Contract: the caller applies the deactivations and the activation inside
/// one storage transaction, so "at most one active LUT per owner" holds at
/// every observable point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationPlan {
    /// LUT to activate
    pub activate: i64,
    /// Sibling LUTs to deactivate, currently flagged active
    pub deactivate: Vec<i64>,
}

/// Plan the activation of `target_id` among one owner's LUTs
///
/// Rejects unknown targets and date-inconsistent targets. Every other
/// currently-active sibling lands in the deactivation set.
pub fn plan_activation(luts: &[Lut], target_id: i64) -> AppResult<ActivationPlan> {
    let target = luts
        .iter()
        .find(|lut| lut.id == target_id)
        .ok_or_else(|| {
            AppError::with_message(
                ErrorCode::LutNotFound,
                format!("LUT {} not found among the owner's undertakings", target_id),
            )
        })?;

    validate_dates(target.issued_on, target.valid_from, target.valid_till)?;

    let deactivate: Vec<i64> = luts
        .iter()
        .filter(|lut| lut.id != target_id && lut.is_active)
        .map(|lut| lut.id)
        .collect();

    Ok(ActivationPlan {
        activate: target_id,
        deactivate,
    })
}

/// Reject deletion while invoices still reference the LUT
pub fn ensure_deletable(lut: &Lut, referencing_invoices: u64) -> AppResult<()> {
    if referencing_invoices > 0 {
        return Err(AppError::with_message(
            ErrorCode::LutHasInvoices,
            format!(
                "LUT {} is referenced by {} invoice(s) and cannot be deleted",
                lut.lut_number, referencing_invoices
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
