use super::*;
use shared::error::ErrorCode;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fy_lut(id: i64, active: bool) -> Lut {
    Lut {
        id,
        lut_number: format!("AD29042400{}", id),
        issued_on: date(2024, 3, 20),
        valid_from: date(2024, 4, 1),
        valid_till: date(2025, 3, 31),
        is_active: active,
        reminder_sent_at: None,
        previous_lut_id: None,
        created_at: 1_711_000_000_000,
    }
}

// ── Validity window ─────────────────────────────────────────────────

#[test]
fn test_is_valid_inclusive_bounds() {
    let lut = fy_lut(1, true);
    assert!(is_valid(&lut, date(2024, 4, 1)));
    assert!(is_valid(&lut, date(2024, 10, 15)));
    assert!(is_valid(&lut, date(2025, 3, 31)));

    assert!(!is_valid(&lut, date(2024, 3, 31)));
    assert!(!is_valid(&lut, date(2025, 4, 1)));
}

#[test]
fn test_inactive_lut_never_valid() {
    let lut = fy_lut(1, false);
    assert!(!is_valid(&lut, date(2024, 10, 15)));
}

#[test]
fn test_days_until_expiry_signed() {
    let lut = fy_lut(1, true);
    assert_eq!(days_until_expiry(&lut, date(2025, 3, 31)), 0);
    assert_eq!(days_until_expiry(&lut, date(2025, 3, 1)), 30);
    assert_eq!(days_until_expiry(&lut, date(2025, 4, 5)), -5);
}

// ── Status ──────────────────────────────────────────────────────────

#[test]
fn test_status_transitions() {
    let lut = fy_lut(1, true);
    assert_eq!(status(&lut, date(2024, 3, 31)), LutStatus::NotStarted);
    assert_eq!(status(&lut, date(2024, 6, 1)), LutStatus::Valid);
    // Exactly 30 days out is already Expiring
    assert_eq!(status(&lut, date(2025, 3, 1)), LutStatus::Expiring);
    assert_eq!(status(&lut, date(2025, 2, 28)), LutStatus::Valid);
    assert_eq!(status(&lut, date(2025, 3, 31)), LutStatus::Expiring);
    assert_eq!(status(&lut, date(2025, 4, 1)), LutStatus::Expired);
}

// ── Reminder ────────────────────────────────────────────────────────

#[test]
fn test_reminder_fires_inside_warning_window() {
    let lut = fy_lut(1, true);
    assert!(should_send_reminder(&lut, date(2025, 3, 1)));
    assert!(should_send_reminder(&lut, date(2025, 3, 31)));
}

#[test]
fn test_reminder_not_before_window_or_after_expiry() {
    let lut = fy_lut(1, true);
    assert!(!should_send_reminder(&lut, date(2025, 2, 28)));
    assert!(!should_send_reminder(&lut, date(2025, 4, 1)));
}

#[test]
fn test_reminder_fires_once() {
    let mut lut = fy_lut(1, true);
    lut.reminder_sent_at = Some(1_740_000_000_000);
    assert!(!should_send_reminder(&lut, date(2025, 3, 15)));
}

#[test]
fn test_reminder_skips_inactive() {
    let lut = fy_lut(1, false);
    assert!(!should_send_reminder(&lut, date(2025, 3, 15)));
}

// ── Resolution ──────────────────────────────────────────────────────

#[test]
fn test_resolve_active_for_date() {
    let mut old = fy_lut(1, false);
    old.valid_from = date(2023, 4, 1);
    old.valid_till = date(2024, 3, 31);
    let current = fy_lut(2, true);

    let luts = vec![old, current];
    assert_eq!(resolve_active_for_date(&luts, date(2024, 6, 1)).map(|l| l.id), Some(2));
    // The old window covers this date but the LUT is inactive: no fallback
    assert_eq!(resolve_active_for_date(&luts, date(2023, 6, 1)), None);
    assert_eq!(resolve_active_for_date(&luts, date(2025, 6, 1)), None);
}

// ── Date validation ─────────────────────────────────────────────────

#[test]
fn test_validate_dates_ordering() {
    assert!(validate_dates(date(2024, 3, 20), date(2024, 4, 1), date(2025, 3, 31)).is_ok());
    // Issue date on the window start is fine
    assert!(validate_dates(date(2024, 4, 1), date(2024, 4, 1), date(2025, 3, 31)).is_ok());

    let err = validate_dates(date(2024, 5, 1), date(2024, 4, 1), date(2025, 3, 31)).unwrap_err();
    assert_eq!(err.code, ErrorCode::LutDatesInconsistent);

    let err = validate_dates(date(2024, 3, 20), date(2025, 4, 1), date(2025, 3, 31)).unwrap_err();
    assert_eq!(err.code, ErrorCode::LutDatesInconsistent);
}

// ── Activation plan ─────────────────────────────────────────────────

#[test]
fn test_plan_activation_deactivates_active_siblings() {
    let luts = vec![fy_lut(1, true), fy_lut(2, false), fy_lut(3, true)];
    let plan = plan_activation(&luts, 2).unwrap();
    assert_eq!(plan.activate, 2);
    assert_eq!(plan.deactivate, vec![1, 3]);
}

#[test]
fn test_plan_activation_already_active_target() {
    // Re-activating the current LUT must not schedule its own deactivation
    let luts = vec![fy_lut(1, true), fy_lut(2, false)];
    let plan = plan_activation(&luts, 1).unwrap();
    assert_eq!(plan.activate, 1);
    assert!(plan.deactivate.is_empty());
}

#[test]
fn test_plan_activation_unknown_target() {
    let luts = vec![fy_lut(1, true)];
    let err = plan_activation(&luts, 99).unwrap_err();
    assert_eq!(err.code, ErrorCode::LutNotFound);
}

#[test]
fn test_plan_activation_rejects_inconsistent_dates() {
    let mut bad = fy_lut(2, false);
    bad.valid_from = date(2025, 4, 1);
    bad.valid_till = date(2024, 3, 31);
    let luts = vec![fy_lut(1, true), bad];
    let err = plan_activation(&luts, 2).unwrap_err();
    assert_eq!(err.code, ErrorCode::LutDatesInconsistent);
}

// ── Deletion guard ──────────────────────────────────────────────────

#[test]
fn test_ensure_deletable() {
    let lut = fy_lut(1, false);
    assert!(ensure_deletable(&lut, 0).is_ok());

    let err = ensure_deletable(&lut, 3).unwrap_err();
    assert_eq!(err.code, ErrorCode::LutHasInvoices);
    assert!(err.message.contains("3 invoice(s)"));
}

// ── Warning view ────────────────────────────────────────────────────

#[test]
fn test_expiry_warning_view() {
    let lut = fy_lut(1, true);

    let warning = expiry_warning(&lut, date(2025, 3, 16));
    assert_eq!(warning.status, LutStatus::Expiring);
    assert_eq!(warning.days_until_expiry, 15);
    assert!(warning.message.contains("15 day(s)"));

    let warning = expiry_warning(&lut, date(2025, 4, 10));
    assert_eq!(warning.status, LutStatus::Expired);
    assert_eq!(warning.days_until_expiry, -10);
    assert!(warning.message.contains("expired"));
}
