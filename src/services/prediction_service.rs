// src/services/prediction_service.rs
//
// Prediction flow: one form, one row, one predicted payout
//
// Serializes the visible form's non-empty fields into a single-row predict
// request and renders the first prediction as currency. Failures render
// inline, never as a blocking alert.

use std::sync::Arc;

use serde_json::{Map, Number, Value};

use crate::application::{DisplayableError, ErrorStyle, FlowKind, FlowPresenter, FormState};
use crate::domain::PredictRequest;
use crate::error::AppError;
use crate::format::currency_or_raw;
use crate::integrations::ClaimApi;
use crate::services::FlowState;

pub struct PredictionService {
    api: Arc<dyn ClaimApi>,
    form: Arc<dyn FormState>,
    presenter: Arc<dyn FlowPresenter>,
    state: FlowState,
}

impl PredictionService {
    pub fn new(
        api: Arc<dyn ClaimApi>,
        form: Arc<dyn FormState>,
        presenter: Arc<dyn FlowPresenter>,
    ) -> Self {
        Self {
            api,
            form,
            presenter,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Submit the current form for a payout prediction
    pub async fn submit(&mut self) {
        let snapshot = self.form.prediction_snapshot();
        let request = PredictRequest {
            rows: vec![Self::build_row(&snapshot.fields)],
            clip_to_max_benefit: snapshot.clip_to_max_benefit,
        };

        self.state = FlowState::Submitting;

        match self.api.predict(request).await {
            Ok(response) => match response.predictions.first() {
                Some(value) => {
                    self.presenter
                        .render_prediction(&currency_or_raw(value), response.clipped);
                    self.state = FlowState::Success;
                }
                None => {
                    self.present(&AppError::Other("no predictions returned".to_string()));
                    self.state = FlowState::Failed;
                }
            },
            Err(error) => {
                self.present(&error);
                self.state = FlowState::Failed;
            }
        }
    }

    /// Clear the form and hide the result panel
    pub fn reset(&mut self) {
        self.form.clear_prediction_form();
        self.presenter.hide_prediction_panel();
        self.state = FlowState::Idle;
    }

    /// Non-empty fields only; values that read fully as numbers are sent as
    /// JSON numbers, everything else as strings
    fn build_row(
        fields: &std::collections::BTreeMap<String, String>,
    ) -> Map<String, Value> {
        let mut row = Map::new();

        for (name, value) in fields {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }

            let entry = match trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(number) => Value::Number(number),
                None => Value::String(value.clone()),
            };
            row.insert(name.clone(), entry);
        }

        row
    }

    fn present(&self, error: &AppError) {
        self.presenter.present_failure(&DisplayableError::from_app_error(
            FlowKind::Prediction,
            ErrorStyle::Inline,
            error,
        ));
    }
}
