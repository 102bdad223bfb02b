// src/services/claim_intake.rs
//
// Claim intake flow: upload -> extract -> finalize
//
// Owns the file-input rows and the latest extraction result. One result
// is displayed at a time; each successful submission replaces it
// wholesale, and each successful finalize replaces the decision panel.

use std::sync::Arc;

use crate::application::{DisplayableError, ErrorStyle, FlowKind, FlowPresenter, FormState};
use crate::domain::{
    validate_selection, AdjudicationDefaults, DomainError, ExtractionResult, FileRow, FileRowSet,
    SelectedFile,
};
use crate::error::AppError;
use crate::integrations::ClaimApi;
use crate::services::field_resolution::assemble_request;
use crate::services::FlowState;

pub struct ClaimIntakeService {
    api: Arc<dyn ClaimApi>,
    form: Arc<dyn FormState>,
    presenter: Arc<dyn FlowPresenter>,
    defaults: AdjudicationDefaults,
    rows: FileRowSet,
    latest: Option<ExtractionResult>,
    state: FlowState,
}

impl ClaimIntakeService {
    pub fn new(
        api: Arc<dyn ClaimApi>,
        form: Arc<dyn FormState>,
        presenter: Arc<dyn FlowPresenter>,
    ) -> Self {
        Self::with_defaults(api, form, presenter, AdjudicationDefaults::default())
    }

    /// Construct with an explicit checklist configuration instead of the
    /// built-in defaults
    pub fn with_defaults(
        api: Arc<dyn ClaimApi>,
        form: Arc<dyn FormState>,
        presenter: Arc<dyn FlowPresenter>,
        defaults: AdjudicationDefaults,
    ) -> Self {
        Self {
            api,
            form,
            presenter,
            defaults,
            rows: FileRowSet::new(),
            latest: None,
            state: FlowState::Idle,
        }
    }

    // ========================================================================
    // FILE ROW MANAGEMENT
    // ========================================================================

    /// Append a new empty file row; returns its id
    pub fn add_row(&mut self) -> u64 {
        self.rows.add_row()
    }

    /// Delete one row. Remaining rows keep their order.
    pub fn remove_row(&mut self, id: u64) {
        self.rows.remove_row(id);
    }

    /// Attach a chosen file to a row
    pub fn set_file(&mut self, id: u64, file: SelectedFile) -> bool {
        self.rows.set_file(id, file)
    }

    pub fn clear_file(&mut self, id: u64) {
        self.rows.clear_file(id);
    }

    pub fn rows(&self) -> &[FileRow] {
        self.rows.rows()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn latest_extraction(&self) -> Option<&ExtractionResult> {
        self.latest.as_ref()
    }

    // ========================================================================
    // PRIMARY SUBMIT
    // ========================================================================

    /// Validate the selection and submit it for charge extraction
    ///
    /// Validation failures raise a blocking alert naming the offending file
    /// and nothing is sent. A request failure leaves the previous extraction
    /// result in place so the flow stays re-submittable.
    pub async fn submit(&mut self) {
        let files = self.rows.collect_files();

        if let Err(violation) = validate_selection(&files) {
            self.present(FlowKind::Extraction, ErrorStyle::Alert, &violation.into());
            return;
        }

        self.state = FlowState::Submitting;
        log::debug!("submitting {} file(s) for extraction", files.len());

        match self.api.extract_charges(files).await {
            Ok(result) => {
                self.presenter.render_charges(&result);
                self.latest = Some(result);
                self.state = FlowState::Success;
            }
            Err(error) => {
                self.present(FlowKind::Extraction, ErrorStyle::Alert, &error);
                self.state = FlowState::Failed;
            }
        }
    }

    // ========================================================================
    // FINALIZE SUB-ACTION
    // ========================================================================

    /// Assemble the adjudication payload from the stored extraction and the
    /// current form snapshot, then request a final decision
    ///
    /// The finalize action is disabled while its request is in flight and
    /// re-enabled afterwards, success or not. A new decision replaces any
    /// previously rendered panel.
    pub async fn finalize(&mut self) {
        let request = match &self.latest {
            Some(result) => {
                assemble_request(result, &self.form.claim_snapshot(), &self.defaults)
            }
            None => {
                let error: AppError = DomainError::MissingExtraction(
                    "submit documents for extraction first".to_string(),
                )
                .into();
                self.present(FlowKind::Finalize, ErrorStyle::Alert, &error);
                return;
            }
        };

        self.presenter.set_finalize_enabled(false);
        self.state = FlowState::Submitting;

        match self.api.adjudicate(request).await {
            Ok(decision) => {
                self.presenter.replace_decision_panel(&decision);
                self.state = FlowState::Success;
            }
            Err(error) => {
                self.present(FlowKind::Finalize, ErrorStyle::Alert, &error);
                self.state = FlowState::Failed;
            }
        }

        self.presenter.set_finalize_enabled(true);
    }

    fn present(&self, flow: FlowKind, style: ErrorStyle, error: &AppError) {
        self.presenter
            .present_failure(&DisplayableError::from_app_error(flow, style, error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::form::MockFormState;
    use crate::application::presenter::MockFlowPresenter;
    use crate::application::ClaimFormSnapshot;
    use crate::integrations::sdi::client::MockClaimApi;
    use mockall::predicate;
    use serde_json::json;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", b"%PDF-1.4".to_vec())
    }

    fn extraction() -> ExtractionResult {
        serde_json::from_value(json!({
            "charges": [{"category": "cleaning", "amount": 250.0, "status": "unpaid"}],
            "charges_fallback": [],
            "llm_used": "claude",
            "metadata": {"deposit_amount": "ONE_MONTH_RENT", "jurisdiction": "CA"}
        }))
        .unwrap()
    }

    fn quiet_form() -> MockFormState {
        MockFormState::new()
    }

    #[tokio::test]
    async fn test_submit_with_no_files_sends_nothing() {
        let api = MockClaimApi::new(); // no expectations: any call panics
        let mut presenter = MockFlowPresenter::new();
        presenter
            .expect_present_failure()
            .withf(|e| {
                e.flow == FlowKind::Extraction
                    && e.style == ErrorStyle::Alert
                    && e.message.contains("no files")
            })
            .times(1)
            .return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );

        service.submit().await;
        assert_eq!(service.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_submit_with_non_pdf_names_the_file() {
        let api = MockClaimApi::new();
        let mut presenter = MockFlowPresenter::new();
        presenter
            .expect_present_failure()
            .withf(|e| e.message.contains("notes.txt"))
            .times(1)
            .return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );
        let row = service.rows()[0].id;
        service.set_file(row, SelectedFile::new("notes.txt", "text/plain", vec![1]));

        service.submit().await;
        assert!(service.latest_extraction().is_none());
    }

    #[tokio::test]
    async fn test_submit_success_stores_result_and_renders() {
        let mut api = MockClaimApi::new();
        api.expect_extract_charges()
            .times(1)
            .returning(|_| Ok(extraction()));

        let mut presenter = MockFlowPresenter::new();
        presenter.expect_render_charges().times(1).return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );
        let row = service.rows()[0].id;
        service.set_file(row, pdf("lease.pdf"));

        service.submit().await;

        assert_eq!(service.state(), FlowState::Success);
        assert_eq!(service.latest_extraction().unwrap().charges.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_replaces_previous_result_wholesale() {
        let mut api = MockClaimApi::new();
        api.expect_extract_charges()
            .times(2)
            .returning(|_| Ok(extraction()));

        let mut presenter = MockFlowPresenter::new();
        presenter.expect_render_charges().times(2).return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );
        let row = service.rows()[0].id;
        service.set_file(row, pdf("lease.pdf"));

        service.submit().await;
        service.set_file(row, pdf("ledger.pdf"));
        service.submit().await;

        assert_eq!(service.state(), FlowState::Success);
    }

    #[tokio::test]
    async fn test_submit_request_failure_presents_alert() {
        let mut api = MockClaimApi::new();
        api.expect_extract_charges().times(1).returning(|_| {
            Err(AppError::Request {
                status: 500,
                body: "extractor unavailable".to_string(),
            })
        });

        let mut presenter = MockFlowPresenter::new();
        presenter
            .expect_present_failure()
            .withf(|e| e.style == ErrorStyle::Alert && e.message.contains("extractor unavailable"))
            .times(1)
            .return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );
        let row = service.rows()[0].id;
        service.set_file(row, pdf("lease.pdf"));

        service.submit().await;
        assert_eq!(service.state(), FlowState::Failed);
    }

    #[tokio::test]
    async fn test_finalize_without_extraction_is_rejected() {
        let api = MockClaimApi::new();
        let mut presenter = MockFlowPresenter::new();
        presenter
            .expect_present_failure()
            .withf(|e| e.flow == FlowKind::Finalize)
            .times(1)
            .return_const(());

        let mut service = ClaimIntakeService::new(
            Arc::new(api),
            Arc::new(quiet_form()),
            Arc::new(presenter),
        );

        service.finalize().await;
        assert_eq!(service.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_finalize_resolves_fields_and_replaces_panel() {
        let mut api = MockClaimApi::new();
        api.expect_extract_charges()
            .times(1)
            .returning(|_| Ok(extraction()));
        api.expect_adjudicate()
            .withf(|request| {
                // ONE_MONTH_RENT marker resolved against the rent field,
                // metadata jurisdiction kept over the manual selection
                request.deposit_amount == Some(1500.0)
                    && request.jurisdiction.as_deref() == Some("CA")
                    && request.monthly_rent == 1500.0
            })
            .times(1)
            .returning(|_| Ok(json!({"final_payout_available": true})));

        let mut form = MockFormState::new();
        form.expect_claim_snapshot().returning(|| ClaimFormSnapshot {
            monthly_rent: "$1,500".to_string(),
            max_benefit: "3000".to_string(),
            jurisdiction: "NY".to_string(),
            ..Default::default()
        });

        let mut presenter = MockFlowPresenter::new();
        presenter.expect_render_charges().return_const(());
        presenter
            .expect_set_finalize_enabled()
            .with(predicate::eq(false))
            .times(1)
            .return_const(());
        presenter
            .expect_replace_decision_panel()
            .times(1)
            .return_const(());
        presenter
            .expect_set_finalize_enabled()
            .with(predicate::eq(true))
            .times(1)
            .return_const(());

        let mut service =
            ClaimIntakeService::new(Arc::new(api), Arc::new(form), Arc::new(presenter));
        let row = service.rows()[0].id;
        service.set_file(row, pdf("lease.pdf"));

        service.submit().await;
        service.finalize().await;

        assert_eq!(service.state(), FlowState::Success);
    }

    #[tokio::test]
    async fn test_finalize_failure_reenables_action() {
        let mut api = MockClaimApi::new();
        api.expect_extract_charges()
            .times(1)
            .returning(|_| Ok(extraction()));
        api.expect_adjudicate().times(1).returning(|_| {
            Err(AppError::Request {
                status: 422,
                body: "bad payload".to_string(),
            })
        });

        let mut form = MockFormState::new();
        form.expect_claim_snapshot()
            .returning(ClaimFormSnapshot::default);

        let mut presenter = MockFlowPresenter::new();
        presenter.expect_render_charges().return_const(());
        presenter
            .expect_set_finalize_enabled()
            .with(predicate::eq(false))
            .times(1)
            .return_const(());
        presenter
            .expect_present_failure()
            .withf(|e| e.flow == FlowKind::Finalize && e.message.contains("bad payload"))
            .times(1)
            .return_const(());
        presenter
            .expect_set_finalize_enabled()
            .with(predicate::eq(true))
            .times(1)
            .return_const(());

        let mut service =
            ClaimIntakeService::new(Arc::new(api), Arc::new(form), Arc::new(presenter));
        let row = service.rows()[0].id;
        service.set_file(row, pdf("lease.pdf"));

        service.submit().await;
        service.finalize().await;

        assert_eq!(service.state(), FlowState::Failed);
        // the stored extraction survives, finalize can be retried
        assert!(service.latest_extraction().is_some());
    }
}
