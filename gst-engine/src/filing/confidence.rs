//! Extraction confidence scoring and review-tier derivation
//!
//! Consumed by the upstream document-extraction review workflow: the score
//! drives how much human attention an extracted transaction candidate gets
//! before it becomes a bookkeeping record.

use shared::models::transaction::{ExtractionResult, ReviewStatus};

const BASE_SCORE: f64 = 100.0;

const PENALTY_MISSING_VENDOR: f64 = 10.0;
const PENALTY_MISSING_DATE: f64 = 10.0;
const PENALTY_MISSING_GSTIN: f64 = 5.0;
const PENALTY_UNKNOWN_CATEGORY: f64 = 25.0;

const BOOST_HINT_MATCHES: f64 = 5.0;
const BOOST_GSTIN_FOR_CREDIT: f64 = 5.0;

/// Auto-approval threshold (inclusive)
pub const AUTO_APPROVE_THRESHOLD: f64 = 90.0;
/// Review-recommended threshold (inclusive); below it review is mandatory
pub const REVIEW_THRESHOLD: f64 = 70.0;

/// Score an extraction result on the 0..=100 scale
///
/// Starts from a full score, deducts for missing expected fields and an
/// unclassified category, and adds back when the source-type hint agrees with
/// the derived classification or a GSTIN backs a credit-relevant category.
pub fn confidence_score(extraction: &ExtractionResult) -> f64 {
    let mut score = BASE_SCORE;

    if is_blank(&extraction.vendor_name) {
        score -= PENALTY_MISSING_VENDOR;
    }
    if extraction.date.is_none() {
        score -= PENALTY_MISSING_DATE;
    }
    if is_blank(&extraction.gstin) {
        score -= PENALTY_MISSING_GSTIN;
    }

    match classification_of(extraction) {
        Some(classification) => {
            if hint_matches(extraction, classification) {
                score += BOOST_HINT_MATCHES;
            }
            if credit_relevant(classification) && !is_blank(&extraction.gstin) {
                score += BOOST_GSTIN_FOR_CREDIT;
            }
        }
        None => score -= PENALTY_UNKNOWN_CATEGORY,
    }

    score.clamp(0.0, 100.0)
}

/// Review tier for a confidence score
///
/// `>= 90` auto-approved, `70..90` review recommended, `< 70` manual review.
pub fn review_status(score: f64) -> ReviewStatus {
    if score >= AUTO_APPROVE_THRESHOLD {
        ReviewStatus::AutoApproved
    } else if score >= REVIEW_THRESHOLD {
        ReviewStatus::ReviewRecommended
    } else {
        ReviewStatus::ManualRequired
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Usable classification, or None when absent/explicitly unknown
fn classification_of(extraction: &ExtractionResult) -> Option<&str> {
    let classification = extraction.classification.as_deref()?.trim();
    if classification.is_empty()
        || classification.eq_ignore_ascii_case("UNKNOWN")
        || classification.eq_ignore_ascii_case("UNCLASSIFIED")
    {
        return None;
    }
    Some(classification)
}

fn hint_matches(extraction: &ExtractionResult, classification: &str) -> bool {
    extraction
        .source_type_hint
        .as_deref()
        .map(|hint| hint.trim().eq_ignore_ascii_case(classification))
        .unwrap_or(false)
}

/// Categories where input credit hinges on the counterparty identifier
fn credit_relevant(classification: &str) -> bool {
    classification.eq_ignore_ascii_case("DOMESTIC_B2B")
        || classification.eq_ignore_ascii_case("SELF_INVOICE")
        || classification.eq_ignore_ascii_case("IMPORT_OF_SERVICES")
}
