//! Fiscal-year and filing-due-date arithmetic
//!
//! A filing period is one calendar month (`YYYY-MM`). The Indian fiscal year
//! runs April to March: months 4-12 belong to the fiscal year starting that
//! calendar year, months 1-3 to the one that started the previous year.
//! GSTR-1 is due on the 11th and GSTR-3B on the 20th of the following month.

use chrono::{Datelike, NaiveDate};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::filing::{FilingPeriod, FilingScheduleRow};

/// Parse a `YYYY-MM` period string into (year, month)
pub fn parse_period(period: &str) -> AppResult<(i32, u32)> {
    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidFilingPeriod,
            format!("'{}' is not a valid YYYY-MM filing period", period),
        )
    };

    let (year_part, month_part) = period.split_once('-').ok_or_else(invalid)?;
    if year_part.len() != 4 || month_part.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let month: u32 = month_part.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

/// Fiscal year label (`YYYY-YY`) for a filing period
///
/// `fiscal_year("2024-03")` is `"2023-24"`; `fiscal_year("2024-04")` is
/// `"2024-25"`.
pub fn fiscal_year(period: &str) -> AppResult<String> {
    let (year, month) = parse_period(period)?;
    Ok(fiscal_year_of(year, month))
}

fn fiscal_year_of(year: i32, month: u32) -> String {
    let start_year = if month >= 4 { year } else { year - 1 };
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn due_date(period: &str, day: u32) -> AppResult<NaiveDate> {
    let (year, month) = parse_period(period)?;
    let (due_year, due_month) = following_month(year, month);
    NaiveDate::from_ymd_opt(due_year, due_month, day).ok_or_else(|| {
        AppError::with_message(
            ErrorCode::InvalidFilingPeriod,
            format!("cannot derive due date for period '{}'", period),
        )
    })
}

/// GSTR-1 due date: 11th of the month following the period
pub fn gstr1_due_date(period: &str) -> AppResult<NaiveDate> {
    due_date(period, 11)
}

/// GSTR-3B due date: 20th of the month following the period
pub fn gstr3b_due_date(period: &str) -> AppResult<NaiveDate> {
    due_date(period, 20)
}

/// Build the full [`FilingPeriod`] view for a `YYYY-MM` period string
pub fn filing_period(period: &str) -> AppResult<FilingPeriod> {
    let (year, month) = parse_period(period)?;
    Ok(FilingPeriod {
        period: format!("{:04}-{:02}", year, month),
        fiscal_year: fiscal_year_of(year, month),
        gstr1_due: due_date(period, 11)?,
        gstr3b_due: due_date(period, 20)?,
    })
}

/// A return is overdue strictly after its due date (same day is not overdue)
pub fn is_overdue(due: NaiveDate, now: NaiveDate) -> bool {
    now > due
}

/// Signed day count until the due date (negative once overdue)
pub fn days_until_due(due: NaiveDate, now: NaiveDate) -> i64 {
    (due - now).num_days()
}

/// The `count` consecutive filing periods ending at the anchor's prior month
///
/// The most recent entry is the reporting period that just closed. Returned
/// in chronological order.
pub fn upcoming_periods(count: u32, anchor: NaiveDate) -> Vec<FilingPeriod> {
    let mut year = anchor.year();
    let mut month = anchor.month();

    // Walk back to the most recent closed period, then `count - 1` further
    let mut periods = Vec::with_capacity(count as usize);
    for _ in 0..count {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
        let label = format!("{:04}-{:02}", year, month);
        // Construction from a well-formed label cannot fail
        if let Ok(fp) = filing_period(&label) {
            periods.push(fp);
        }
    }
    periods.reverse();
    periods
}

/// Filing schedule dashboard rows: upcoming periods with overdue derivation
pub fn filing_schedule(count: u32, anchor: NaiveDate) -> Vec<FilingScheduleRow> {
    upcoming_periods(count, anchor)
        .into_iter()
        .map(|period| FilingScheduleRow {
            gstr1_overdue: is_overdue(period.gstr1_due, anchor),
            gstr1_days_left: days_until_due(period.gstr1_due, anchor),
            gstr3b_overdue: is_overdue(period.gstr3b_due, anchor),
            gstr3b_days_left: days_until_due(period.gstr3b_due, anchor),
            period,
        })
        .collect()
}

#[cfg(test)]
mod tests;
