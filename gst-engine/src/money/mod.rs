//! Money calculation utilities using rust_decimal for precision
//!
//! All tax arithmetic is done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Each tax component is rounded to 2 decimal
//! places independently before summation, so component totals are reproducible
//! regardless of summation order.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};

/// Rounding for monetary values (2 decimal places, half away from zero)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount (₹10,000,000,000)
const MAX_AMOUNT: f64 = 10_000_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("{} must be a finite number, got {}", field_name, value),
        ));
    }
    Ok(())
}

/// Validate a monetary amount: finite, non-negative, within bounds
pub fn require_amount(value: f64, field_name: &str) -> AppResult<()> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!("{} must be non-negative, got {}", field_name, value),
        ));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::InvalidAmount,
            format!(
                "{} exceeds maximum allowed ({}), got {}",
                field_name, MAX_AMOUNT, value
            ),
        ));
    }
    Ok(())
}

/// Validate a percentage rate: finite, within [0, 100]
pub fn require_rate(value: f64, field_name: &str) -> AppResult<()> {
    require_finite(value, field_name)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::InvalidTaxRate,
            format!("{} must be between 0 and 100, got {}", field_name, value),
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Round a Decimal to 2 decimal places, half away from zero
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with bounded inputs is always
        // within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Check whether a monetary value is zero after 2dp rounding
pub fn is_zero(value: f64) -> bool {
    round2(to_decimal(value)).is_zero()
}
