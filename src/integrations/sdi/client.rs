// src/integrations/sdi/client.rs
//
// SDI Claim API client
//
// ARCHITECTURE:
// - Thin JSON/multipart wrapper over the claim backend
// - Maps wire payloads -> domain types (NO domain mutation)
// - Used by the flow services through the ClaimApi trait
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - One request per call, no retry; errors carry the raw response body
// - Handles all transport concerns, nothing else

use crate::domain::{
    AdjudicationRequest, ExtractionResult, LedgerReview, PredictRequest, PredictResponse,
    SelectedFile,
};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// The backend operations this layer consumes
///
/// Flows depend on this trait so they can run against a mock with no
/// server behind it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClaimApi: Send + Sync {
    /// `POST /extract-charges` with one multipart `files` part per file
    async fn extract_charges(&self, files: Vec<SelectedFile>) -> AppResult<ExtractionResult>;

    /// `POST /adjudicate`; the decision object is opaque and rendered verbatim
    async fn adjudicate(&self, request: AdjudicationRequest) -> AppResult<Value>;

    /// `POST /predict`
    async fn predict(&self, request: PredictRequest) -> AppResult<PredictResponse>;

    /// `POST /ledger/review` with the files plus an optional
    /// `lease_start_date` text part
    async fn review_ledger(
        &self,
        files: Vec<SelectedFile>,
        lease_start_date: Option<String>,
    ) -> AppResult<LedgerReview>;
}

/// SDI Claim API client over HTTP
pub struct HttpClaimApi {
    base_url: String,
    http_client: Client,
}

impl HttpClaimApi {
    /// Create a client for the given backend origin, e.g. `http://localhost:8000`
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        log::debug!("POST {}", path);

        let response = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;

        Self::parse_response(path, response).await
    }

    async fn post_form<R>(&self, path: &str, form: multipart::Form) -> AppResult<R>
    where
        R: DeserializeOwned,
    {
        log::debug!("POST {} (multipart)", path);

        let response = self
            .http_client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(path, response).await
    }

    /// Read the body first so a non-2xx error can carry the raw text
    async fn parse_response<R>(path: &str, response: Response) -> AppResult<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            log::warn!("POST {} failed with status {}", path, status);
            return Err(AppError::Request {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Build the repeated `files` parts the extraction endpoints expect
    fn files_form(files: Vec<SelectedFile>) -> AppResult<multipart::Form> {
        let mut form = multipart::Form::new();

        for file in files {
            let mut part = multipart::Part::bytes(file.bytes).file_name(file.name);
            if !file.mime_type.is_empty() {
                part = part
                    .mime_str(&file.mime_type)
                    .map_err(|e| AppError::Other(format!("invalid MIME type: {}", e)))?;
            }
            form = form.part("files", part);
        }

        Ok(form)
    }
}

#[async_trait]
impl ClaimApi for HttpClaimApi {
    async fn extract_charges(&self, files: Vec<SelectedFile>) -> AppResult<ExtractionResult> {
        let form = Self::files_form(files)?;
        self.post_form("/extract-charges", form).await
    }

    async fn adjudicate(&self, request: AdjudicationRequest) -> AppResult<Value> {
        self.post_json("/adjudicate", &request).await
    }

    async fn predict(&self, request: PredictRequest) -> AppResult<PredictResponse> {
        self.post_json("/predict", &request).await
    }

    async fn review_ledger(
        &self,
        files: Vec<SelectedFile>,
        lease_start_date: Option<String>,
    ) -> AppResult<LedgerReview> {
        let mut form = Self::files_form(files)?;
        if let Some(date) = lease_start_date {
            form = form.text("lease_start_date", date);
        }
        self.post_form("/ledger/review", form).await
    }
}
