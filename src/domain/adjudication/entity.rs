use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload of `POST /adjudicate`
///
/// Assembled fresh for each finalize action, never persisted. Field
/// resolution rules live in `services::field_resolution`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationRequest {
    /// Always sent empty; the backend tolerates it
    pub tenant_name: String,

    /// Always sent empty; the backend tolerates it
    pub property_address: String,

    pub monthly_rent: f64,
    pub max_benefit: f64,

    /// Resolved deposit, or None when the final payout cannot be computed
    pub deposit_amount: Option<f64>,

    /// Client-resolved jurisdiction (metadata > UI selection > lease state)
    pub jurisdiction: Option<String>,

    /// Raw lease-state entry; the backend applies the same fallback again
    pub lease_state: Option<String>,

    /// Passed through as entered or extracted, ISO date expected upstream
    pub move_out_date: Option<String>,

    pub documents_present: DocumentsPresent,
    pub ledger_checks: LedgerChecks,

    /// Extracted charges, verbatim
    pub charges: Vec<Value>,
}

/// Document checklist sent with every adjudication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsPresent {
    pub lease_addendum: bool,
    pub lease_agreement: bool,
    pub notification_to_tenant: bool,
    pub tenant_ledger: bool,
    pub invoice: bool,
    pub claim_evaluation_report: bool,
}

/// Ledger verification flags sent with every adjudication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerChecks {
    pub first_month_rent_paid: bool,
    pub first_month_rent_evidence: String,
    pub first_month_sdi_premium_paid: bool,
    pub first_month_sdi_premium_paid_evidence: String,
}

/// Static checklist values sent with every finalize action
///
/// No UI input feeds these; they are placeholders, surfaced as
/// configuration so an embedder can wire real inputs later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjudicationDefaults {
    pub documents_present: DocumentsPresent,
    pub ledger_checks: LedgerChecks,
}

impl Default for AdjudicationDefaults {
    fn default() -> Self {
        Self {
            documents_present: DocumentsPresent {
                lease_addendum: true,
                lease_agreement: true,
                notification_to_tenant: true,
                tenant_ledger: true,
                invoice: false,
                claim_evaluation_report: false,
            },
            ledger_checks: LedgerChecks {
                first_month_rent_paid: true,
                first_month_rent_evidence: String::new(),
                first_month_sdi_premium_paid: true,
                first_month_sdi_premium_paid_evidence: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_checklist_values() {
        let defaults = AdjudicationDefaults::default();

        assert!(defaults.documents_present.lease_addendum);
        assert!(defaults.documents_present.lease_agreement);
        assert!(defaults.documents_present.notification_to_tenant);
        assert!(defaults.documents_present.tenant_ledger);
        assert!(!defaults.documents_present.invoice);
        assert!(!defaults.documents_present.claim_evaluation_report);

        assert!(defaults.ledger_checks.first_month_rent_paid);
        assert_eq!(defaults.ledger_checks.first_month_rent_evidence, "");
        assert!(defaults.ledger_checks.first_month_sdi_premium_paid);
        assert_eq!(defaults.ledger_checks.first_month_sdi_premium_paid_evidence, "");
    }

    #[test]
    fn test_request_serializes_null_optionals() {
        let request = AdjudicationRequest {
            tenant_name: String::new(),
            property_address: String::new(),
            monthly_rent: 1500.0,
            max_benefit: 3000.0,
            deposit_amount: None,
            jurisdiction: None,
            lease_state: None,
            move_out_date: None,
            documents_present: AdjudicationDefaults::default().documents_present,
            ledger_checks: AdjudicationDefaults::default().ledger_checks,
            charges: Vec::new(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tenant_name"], "");
        assert!(value["deposit_amount"].is_null());
        assert!(value["jurisdiction"].is_null());
        assert_eq!(value["monthly_rent"], 1500.0);
    }
}
