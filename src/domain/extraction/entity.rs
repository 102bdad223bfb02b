use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker the extractor emits when a lease pegs the deposit to one month
/// of rent instead of a dollar figure
pub const ONE_MONTH_RENT: &str = "ONE_MONTH_RENT";

/// Response of `POST /extract-charges`
///
/// Charges are opaque records owned by the extraction service; this layer
/// passes them through untouched. One result is held at a time and replaced
/// wholesale on each new submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Charges found by the LLM extractor
    #[serde(default)]
    pub charges: Vec<Value>,

    /// Charges from the naive line parser, used when the primary list is empty
    #[serde(default)]
    pub charges_fallback: Vec<Value>,

    /// Which extractor produced the primary list ("claude" or "none")
    #[serde(default)]
    pub llm_used: String,

    /// Structured fields parsed from the documents
    #[serde(default)]
    pub metadata: AdjudicationMetadata,

    /// Names of the documents that were processed
    #[serde(default)]
    pub docs: Vec<String>,

    /// Present when the LLM extractor failed and the fallback was used alone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_error: Option<String>,
}

impl ExtractionResult {
    /// Primary charges when any exist, otherwise the fallback list
    pub fn effective_charges(&self) -> &[Value] {
        if self.charges.is_empty() {
            &self.charges_fallback
        } else {
            &self.charges
        }
    }
}

/// Fields the extraction service derived from the uploaded documents
///
/// Treated as higher-precedence than manual entry when assembling the
/// adjudication payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjudicationMetadata {
    #[serde(default)]
    pub deposit_amount: Option<DepositMetadata>,

    #[serde(default)]
    pub move_out_date: Option<String>,

    #[serde(default)]
    pub jurisdiction: Option<String>,
}

/// Deposit as extracted: either a dollar figure or a textual marker
/// (`ONE_MONTH_RENT`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepositMetadata {
    Amount(f64),
    Marker(String),
}

impl DepositMetadata {
    pub fn is_one_month_rent(&self) -> bool {
        matches!(self, DepositMetadata::Marker(m) if m == ONE_MONTH_RENT)
    }
}
