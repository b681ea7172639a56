use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_parse_period() {
    assert_eq!(parse_period("2024-04").unwrap(), (2024, 4));
    assert_eq!(parse_period("2024-12").unwrap(), (2024, 12));

    assert!(parse_period("2024-13").is_err());
    assert!(parse_period("2024-00").is_err());
    assert!(parse_period("2024-4").is_err());
    assert!(parse_period("24-04").is_err());
    assert!(parse_period("garbage").is_err());
    assert!(parse_period("").is_err());

    let err = parse_period("2024/04").unwrap_err();
    assert_eq!(err.code, shared::error::ErrorCode::InvalidFilingPeriod);
}

#[test]
fn test_fiscal_year_april_boundary() {
    assert_eq!(fiscal_year("2024-03").unwrap(), "2023-24");
    assert_eq!(fiscal_year("2024-04").unwrap(), "2024-25");
}

#[test]
fn test_fiscal_year_across_months() {
    assert_eq!(fiscal_year("2024-01").unwrap(), "2023-24");
    assert_eq!(fiscal_year("2024-12").unwrap(), "2024-25");
    assert_eq!(fiscal_year("2025-02").unwrap(), "2024-25");
}

#[test]
fn test_due_dates_year_rollover() {
    assert_eq!(gstr1_due_date("2024-12").unwrap(), d(2025, 1, 11));
    assert_eq!(gstr3b_due_date("2024-12").unwrap(), d(2025, 1, 20));
}

#[test]
fn test_due_dates_mid_year() {
    assert_eq!(gstr1_due_date("2024-06").unwrap(), d(2024, 7, 11));
    assert_eq!(gstr3b_due_date("2024-06").unwrap(), d(2024, 7, 20));
}

#[test]
fn test_filing_period_view() {
    let fp = filing_period("2024-12").unwrap();
    assert_eq!(fp.period, "2024-12");
    assert_eq!(fp.fiscal_year, "2024-25");
    assert_eq!(fp.gstr1_due, d(2025, 1, 11));
    assert_eq!(fp.gstr3b_due, d(2025, 1, 20));
}

#[test]
fn test_is_overdue_boundary() {
    let due = d(2024, 7, 11);
    // Same calendar day: not yet overdue
    assert!(!is_overdue(due, due));
    assert!(!is_overdue(due, d(2024, 7, 10)));
    assert!(is_overdue(due, d(2024, 7, 12)));
}

#[test]
fn test_days_until_due_sign() {
    let due = d(2024, 7, 11);
    assert_eq!(days_until_due(due, d(2024, 7, 1)), 10);
    assert_eq!(days_until_due(due, due), 0);
    assert_eq!(days_until_due(due, d(2024, 7, 14)), -3);
}

#[test]
fn test_upcoming_periods() {
    // Anchor mid-May 2024: the period just closed is April
    let periods = upcoming_periods(3, d(2024, 5, 15));
    let labels: Vec<&str> = periods.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(labels, vec!["2024-02", "2024-03", "2024-04"]);

    // Each entry carries its own due dates and fiscal year
    assert_eq!(periods[2].gstr1_due, d(2024, 5, 11));
    assert_eq!(periods[2].fiscal_year, "2024-25");
    assert_eq!(periods[0].fiscal_year, "2023-24");
}

#[test]
fn test_upcoming_periods_january_anchor() {
    // Walking back across the year boundary
    let periods = upcoming_periods(2, d(2025, 1, 5));
    let labels: Vec<&str> = periods.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(labels, vec!["2024-11", "2024-12"]);
}

#[test]
fn test_upcoming_periods_deterministic() {
    let a = upcoming_periods(6, d(2024, 8, 1));
    let b = upcoming_periods(6, d(2024, 8, 1));
    assert_eq!(a, b);
    assert_eq!(a.len(), 6);
}

#[test]
fn test_filing_schedule_overdue_derivation() {
    // Anchor 2024-05-15: April's GSTR-1 (due 05-11) is overdue,
    // GSTR-3B (due 05-20) is not
    let rows = filing_schedule(1, d(2024, 5, 15));
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.period.period, "2024-04");
    assert!(row.gstr1_overdue);
    assert_eq!(row.gstr1_days_left, -4);
    assert!(!row.gstr3b_overdue);
    assert_eq!(row.gstr3b_days_left, 5);
}
