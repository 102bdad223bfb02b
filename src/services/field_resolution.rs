// src/services/field_resolution.rs
//
// Field resolution for the finalize action
//
// Merges the extractor's metadata with manual entry into one adjudication
// payload. Extracted metadata outranks manual entry everywhere; each field
// has its own precedence chain below.
//
// RULES:
// - Pure functions over already-gathered facts; no I/O, no mutation
// - Deterministic: same input -> same output
// - Empty strings count as absent

use crate::application::ClaimFormSnapshot;
use crate::domain::{
    AdjudicationDefaults, AdjudicationMetadata, AdjudicationRequest, DepositMetadata,
    ExtractionResult,
};
use crate::format::to_number;

/// Resolve the deposit amount
///
/// Precedence:
/// 1. metadata marker `ONE_MONTH_RENT`: the monthly-rent field coerced to a
///    number, or None when that coerces to zero
/// 2. numeric metadata: used directly, manual entry ignored
/// 3. the manual deposit field, only when strictly greater than zero
pub fn resolve_deposit(
    metadata: &AdjudicationMetadata,
    form: &ClaimFormSnapshot,
) -> Option<f64> {
    match &metadata.deposit_amount {
        Some(deposit) if deposit.is_one_month_rent() => {
            let rent = to_number(&form.monthly_rent);
            if rent == 0.0 {
                None
            } else {
                Some(rent)
            }
        }
        Some(DepositMetadata::Amount(amount)) => Some(*amount),
        _ => {
            let manual = to_number(&form.deposit_amount);
            if manual > 0.0 {
                Some(manual)
            } else {
                None
            }
        }
    }
}

/// Resolve the move-out date: metadata when present and non-empty, else the
/// manual field, else None
pub fn resolve_move_out_date(
    metadata: &AdjudicationMetadata,
    form: &ClaimFormSnapshot,
) -> Option<String> {
    non_empty(metadata.move_out_date.as_deref()).or_else(|| non_empty(Some(&form.move_out_date)))
}

/// Resolve the jurisdiction: metadata, else the explicit manual selection,
/// else the lease-state field, else None
pub fn resolve_jurisdiction(
    metadata: &AdjudicationMetadata,
    form: &ClaimFormSnapshot,
) -> Option<String> {
    non_empty(metadata.jurisdiction.as_deref())
        .or_else(|| non_empty(Some(&form.jurisdiction)))
        .or_else(|| non_empty(Some(&form.lease_state)))
}

/// Assemble the adjudication payload for one finalize action
///
/// Charges come from the primary extracted list, or the fallback list when
/// the primary is empty. The checklist flags come from `defaults`;
/// `tenant_name` and `property_address` are always sent empty.
pub fn assemble_request(
    result: &ExtractionResult,
    form: &ClaimFormSnapshot,
    defaults: &AdjudicationDefaults,
) -> AdjudicationRequest {
    AdjudicationRequest {
        tenant_name: String::new(),
        property_address: String::new(),
        monthly_rent: to_number(&form.monthly_rent),
        max_benefit: to_number(&form.max_benefit),
        deposit_amount: resolve_deposit(&result.metadata, form),
        jurisdiction: resolve_jurisdiction(&result.metadata, form),
        lease_state: non_empty(Some(&form.lease_state)),
        move_out_date: resolve_move_out_date(&result.metadata, form),
        documents_present: defaults.documents_present.clone(),
        ledger_checks: defaults.ledger_checks.clone(),
        charges: result.effective_charges().to_vec(),
    }
}

/// Whitespace-only values count as absent, not just empty strings. Stricter
/// than truthiness chaining, where `" "` would win a precedence slot.
fn non_empty(value: Option<&str>) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    }
}
