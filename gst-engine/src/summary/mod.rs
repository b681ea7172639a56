//! Period summary aggregation with cross-component credit offset
//!
//! Offset rules mirror the statutory credit-utilisation order: IGST credit
//! may absorb IGST, then CGST, then SGST liability; CGST and SGST credit may
//! only absorb their own component and never each other. Leftover credit of
//! any kind accumulates as a refund candidate instead of going negative.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::summary::{PeriodTaxSummary, PeriodTotals, TaxAmounts, TaxComponents};

use crate::calendar::parse_period;
use crate::money::{round2, to_decimal, to_f64};

/// Build the period tax position from pre-summed bucket totals
///
/// RCM self-credit joins ordinary input credit component-wise before the
/// offset, so a period's reverse-charge tax nets to zero cash impact while
/// still being disclosed through `rcm_liability`.
pub fn aggregate(period: &str, totals: &PeriodTotals) -> AppResult<PeriodTaxSummary> {
    parse_period(period)?;
    require_non_negative("output", &totals.output)?;
    require_non_negative("rcm", &totals.rcm)?;
    require_non_negative("itc", &totals.itc)?;

    let output = amounts(&totals.output);
    let rcm = amounts(&totals.rcm);

    let itc_available = amounts(&TaxComponents::new(
        totals.itc.igst + totals.rcm.igst,
        totals.itc.cgst + totals.rcm.cgst,
        totals.itc.sgst + totals.rcm.sgst,
    ));

    let (net_payable, accumulated_credit) = offset(&output, &itc_available);

    Ok(PeriodTaxSummary {
        period: period.to_string(),
        output_liability: output,
        rcm_liability: rcm,
        itc_available,
        net_payable,
        accumulated_credit,
    })
}

/// Apply credit against liability with the cross-component rules
///
/// Per-component offsets run first. Surplus IGST credit then covers
/// remaining CGST, then remaining SGST. Surplus CGST/SGST credit cannot
/// cross over and flows straight into the accumulated figure.
fn offset(liability: &TaxAmounts, credit: &TaxAmounts) -> (TaxAmounts, f64) {
    let mut net_igst = to_decimal(liability.igst) - to_decimal(credit.igst);
    let mut net_cgst = to_decimal(liability.cgst) - to_decimal(credit.cgst);
    let mut net_sgst = to_decimal(liability.sgst) - to_decimal(credit.sgst);

    let mut igst_surplus = -net_igst.min(Decimal::ZERO);
    net_igst = net_igst.max(Decimal::ZERO);

    if igst_surplus > Decimal::ZERO && net_cgst > Decimal::ZERO {
        let applied = igst_surplus.min(net_cgst);
        net_cgst -= applied;
        igst_surplus -= applied;
    }
    if igst_surplus > Decimal::ZERO && net_sgst > Decimal::ZERO {
        let applied = igst_surplus.min(net_sgst);
        net_sgst -= applied;
        igst_surplus -= applied;
    }

    let cgst_surplus = -net_cgst.min(Decimal::ZERO);
    let sgst_surplus = -net_sgst.min(Decimal::ZERO);
    net_cgst = net_cgst.max(Decimal::ZERO);
    net_sgst = net_sgst.max(Decimal::ZERO);

    let accumulated = round2(igst_surplus + cgst_surplus + sgst_surplus);

    let net = TaxAmounts {
        igst: to_f64(round2(net_igst)),
        cgst: to_f64(round2(net_cgst)),
        sgst: to_f64(round2(net_sgst)),
        total: to_f64(round2(net_igst + net_cgst + net_sgst)),
    };
    (net, to_f64(accumulated))
}

/// Components plus their derived total, each rounded independently
fn amounts(components: &TaxComponents) -> TaxAmounts {
    let igst = round2(to_decimal(components.igst));
    let cgst = round2(to_decimal(components.cgst));
    let sgst = round2(to_decimal(components.sgst));
    TaxAmounts {
        igst: to_f64(igst),
        cgst: to_f64(cgst),
        sgst: to_f64(sgst),
        total: to_f64(round2(igst + cgst + sgst)),
    }
}

fn require_non_negative(bucket: &str, components: &TaxComponents) -> AppResult<()> {
    for (name, value) in [
        ("igst", components.igst),
        ("cgst", components.cgst),
        ("sgst", components.sgst),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::with_message(
                ErrorCode::InvalidAmount,
                format!(
                    "Period total {}.{} must be a non-negative finite amount, got {}",
                    bucket, name, value
                ),
            ));
        }
    }
    Ok(())
}
