// src/services/ledger_service.rs
//
// Ledger review flow
//
// Submits the chosen documents for tenant-ledger verification. Reuses the
// upload validation rules; the review result is rendered verbatim.

use std::sync::Arc;

use crate::application::{DisplayableError, ErrorStyle, FlowKind, FlowPresenter};
use crate::domain::{validate_selection, SelectedFile};
use crate::error::AppError;
use crate::integrations::ClaimApi;
use crate::services::FlowState;

pub struct LedgerReviewService {
    api: Arc<dyn ClaimApi>,
    presenter: Arc<dyn FlowPresenter>,
    state: FlowState,
}

impl LedgerReviewService {
    pub fn new(api: Arc<dyn ClaimApi>, presenter: Arc<dyn FlowPresenter>) -> Self {
        Self {
            api,
            presenter,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Validate and submit the documents for ledger review
    ///
    /// `lease_start_date` is forwarded as-is when given; the backend uses it
    /// for first-month checks.
    pub async fn submit(&mut self, files: Vec<SelectedFile>, lease_start_date: Option<String>) {
        if let Err(violation) = validate_selection(&files) {
            self.present(&violation.into());
            return;
        }

        self.state = FlowState::Submitting;

        match self.api.review_ledger(files, lease_start_date).await {
            Ok(review) => {
                self.presenter.render_ledger_review(&review);
                self.state = FlowState::Success;
            }
            Err(error) => {
                self.present(&error);
                self.state = FlowState::Failed;
            }
        }
    }

    fn present(&self, error: &AppError) {
        self.presenter.present_failure(&DisplayableError::from_app_error(
            FlowKind::LedgerReview,
            ErrorStyle::Inline,
            error,
        ));
    }
}
