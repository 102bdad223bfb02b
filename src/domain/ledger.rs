use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `POST /ledger/review`
///
/// `details` and `formatted` are owned by the review service and rendered
/// verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerReview {
    #[serde(default)]
    pub approved: bool,

    #[serde(default)]
    pub details: Value,

    #[serde(default)]
    pub formatted: Value,
}
