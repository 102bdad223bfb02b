// src/application/presenter.rs
//
// Unified rendering contract for the flows
//
// Extraction failures surface as blocking alerts, prediction failures
// inline. Both travel through one contract; the presentation difference is
// ErrorStyle data, not divergent code paths.

use crate::domain::{ExtractionResult, LedgerReview};
use crate::error::AppError;
use serde_json::Value;

/// Which user-facing interaction cycle raised the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    Extraction,
    Finalize,
    Prediction,
    LedgerReview,
}

/// How the embedder should surface the failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStyle {
    /// Blocking user-facing alert
    Alert,
    /// Inline message next to the originating form
    Inline,
}

/// A failure ready for display. Flows hand every error over in this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayableError {
    pub flow: FlowKind,
    pub style: ErrorStyle,
    pub message: String,
}

impl DisplayableError {
    pub fn from_app_error(flow: FlowKind, style: ErrorStyle, error: &AppError) -> Self {
        Self {
            flow,
            style,
            message: error.to_string(),
        }
    }
}

/// Rendering surface the flows write to
///
/// A call to `replace_decision_panel` discards any panel rendered by a
/// previous finalize; implementations must not accumulate panels.
#[cfg_attr(test, mockall::automock)]
pub trait FlowPresenter: Send + Sync {
    fn present_failure(&self, error: &DisplayableError);

    /// Show the extracted charge lists after a successful upload
    fn render_charges(&self, result: &ExtractionResult);

    /// Show a new final decision, replacing any previous one
    fn replace_decision_panel(&self, decision: &Value);

    /// Show the predicted value (already currency-formatted) and whether
    /// the backend clipped it
    fn render_prediction(&self, formatted: &str, clipped: bool);

    fn render_ledger_review(&self, review: &LedgerReview);

    /// Enable or disable the finalize action while its request is in flight
    fn set_finalize_enabled(&self, enabled: bool);

    /// Hide the prediction result panel (reset action)
    fn hide_prediction_panel(&self);
}
