//! Tax-component computation: domestic split and reverse charge
//!
//! Reverse-charge supplies are a closed classification — import of services
//! or domestic purchase from an unregistered supplier — dispatched through
//! [`assess_rcm`]. There is no default path.
//!
//! Every component is rounded to 2 decimal places (half away from zero)
//! independently before summation. Never compute one half of an intrastate
//! split as total-minus-other: the two halves must round symmetrically.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::tax::{RcmAssessment, TaxSplit};

use crate::money::{require_amount, require_finite, require_rate, round2, to_decimal, to_f64};

/// Home currency code; amounts in INR need no conversion
pub const HOME_CURRENCY: &str = "INR";

/// A reverse-charge supply, classified into exactly one computation path
#[derive(Debug, Clone)]
pub enum RcmSupply<'a> {
    /// Cross-border service purchase: IGST on the INR value
    ImportOfServices {
        amount: f64,
        /// Currency the amount is denominated in
        currency: &'a str,
        rate_percent: f64,
        /// Required when `currency` is not INR; must be positive
        exchange_rate: Option<f64>,
    },
    /// Purchase from an unregistered domestic supplier
    UnregisteredDomestic {
        supplier_state: &'a str,
        recipient_state: &'a str,
        amount: f64,
        rate_percent: f64,
    },
}

/// Assess a reverse-charge supply
///
/// The computed tax is simultaneously the RCM liability and the claimable
/// input credit; `itc_claimable` always equals `total_tax`.
pub fn assess_rcm(supply: RcmSupply) -> AppResult<RcmAssessment> {
    match supply {
        RcmSupply::ImportOfServices {
            amount,
            currency,
            rate_percent,
            exchange_rate,
        } => import_of_services(amount, currency, rate_percent, exchange_rate),
        RcmSupply::UnregisteredDomestic {
            supplier_state,
            recipient_state,
            amount,
            rate_percent,
        } => unregistered_domestic(supplier_state, recipient_state, amount, rate_percent),
    }
}

/// Import-of-services reverse charge: single IGST component on the INR value
fn import_of_services(
    amount: f64,
    currency: &str,
    rate_percent: f64,
    exchange_rate: Option<f64>,
) -> AppResult<RcmAssessment> {
    require_amount(amount, "amount")?;
    require_rate(rate_percent, "rate_percent")?;

    let taxable = if currency.eq_ignore_ascii_case(HOME_CURRENCY) {
        round2(to_decimal(amount))
    } else {
        let rate = exchange_rate.ok_or_else(|| {
            AppError::with_message(
                ErrorCode::MissingExchangeRate,
                format!(
                    "Exchange rate is required to convert {} to {}",
                    currency, HOME_CURRENCY
                ),
            )
        })?;
        require_finite(rate, "exchange_rate")?;
        if rate <= 0.0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidExchangeRate,
                format!("Exchange rate must be positive, got {}", rate),
            ));
        }
        round2(to_decimal(amount) * to_decimal(rate))
    };

    let igst = round2(taxable * to_decimal(rate_percent) / Decimal::ONE_HUNDRED);
    let total = to_f64(igst);

    Ok(RcmAssessment {
        taxable_value: to_f64(taxable),
        igst: to_f64(igst),
        cgst: 0.0,
        sgst: 0.0,
        total_tax: total,
        itc_claimable: total,
    })
}

/// Domestic unregistered-supplier reverse charge
///
/// Same state: the rate splits into two equal CGST/SGST halves, each rounded
/// independently. Different state: single IGST component at the full rate.
fn unregistered_domestic(
    supplier_state: &str,
    recipient_state: &str,
    amount: f64,
    rate_percent: f64,
) -> AppResult<RcmAssessment> {
    require_amount(amount, "amount")?;
    require_rate(rate_percent, "rate_percent")?;
    if supplier_state.is_empty() || recipient_state.is_empty() {
        return Err(AppError::required_field("state code"));
    }

    let taxable = round2(to_decimal(amount));
    let rate = to_decimal(rate_percent);

    let (igst, cgst, sgst) = if supplier_state == recipient_state {
        let half = round2(taxable * rate / Decimal::from(200));
        (Decimal::ZERO, half, half)
    } else {
        let full = round2(taxable * rate / Decimal::ONE_HUNDRED);
        (full, Decimal::ZERO, Decimal::ZERO)
    };

    let total = to_f64(igst + cgst + sgst);

    Ok(RcmAssessment {
        taxable_value: to_f64(taxable),
        igst: to_f64(igst),
        cgst: to_f64(cgst),
        sgst: to_f64(sgst),
        total_tax: total,
        itc_claimable: total,
    })
}

/// Domestic forward-charge split computation
///
/// Interstate: full rate as a single IGST component. Intrastate: two equal
/// CGST/SGST halves. Cess, when present, is computed independently on the
/// same base and added to the total regardless of the interstate flag.
pub fn domestic_split(
    base: f64,
    rate_percent: f64,
    interstate: bool,
    cess_percent: Option<f64>,
) -> AppResult<TaxSplit> {
    require_amount(base, "base")?;
    require_rate(rate_percent, "rate_percent")?;
    if let Some(c) = cess_percent {
        require_rate(c, "cess_percent")?;
    }

    let base_dec = round2(to_decimal(base));
    let rate = to_decimal(rate_percent);

    let (igst, cgst, sgst) = if interstate {
        let full = round2(base_dec * rate / Decimal::ONE_HUNDRED);
        (full, Decimal::ZERO, Decimal::ZERO)
    } else {
        let half = round2(base_dec * rate / Decimal::from(200));
        (Decimal::ZERO, half, half)
    };

    let cess = cess_percent
        .map(|c| round2(base_dec * to_decimal(c) / Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO);

    Ok(TaxSplit {
        igst: to_f64(igst),
        cgst: to_f64(cgst),
        sgst: to_f64(sgst),
        cess: to_f64(cess),
        total: to_f64(igst + cgst + sgst + cess),
    })
}
