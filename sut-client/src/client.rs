//! Typed HTTP client for the SUT engine.
//!
//! The client is pointed at a base URL and issues one call per operation.
//! In a browser-facing deployment that base URL is the local proxy mount
//! (`http://host:port/api`); server-side callers can talk to the engine
//! directly. Either way the response decoding is identical.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::error::{Result, SutError};
use crate::models::{AnalysisResponse, HealthReportRequest, HttpValidationError, JsonizeResponse};

/// Default external engine host. Overridable via the `SUT_ENGINE_URL`
/// environment variable; no API key is attached in any deployment so far.
pub const DEFAULT_ENGINE_URL: &str = "https://sut-engine.hunerai.com";

/// The two-stage engine surface plus its health probe. A trait so the
/// pipeline and workbench can run against scripted implementations in tests.
#[async_trait]
pub trait SutApi: Send + Sync {
    /// Extraction stage: free report text to structured fields.
    async fn jsonize_report(&self, text: &str) -> Result<JsonizeResponse>;

    /// Compliance stage: structured fields to per-medication verdicts.
    async fn analyze_health_report(&self, request: &HealthReportRequest)
    -> Result<AnalysisResponse>;

    async fn check_health(&self) -> Result<Value>;
}

pub struct SutClient {
    http: reqwest::Client,
    base_url: String,
}

impl SutClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SUT_ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());
        Self::new(base_url)
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        debug!("POST {} -> {}", path, status);
        decode_body(status, &text)
    }
}

#[async_trait]
impl SutApi for SutClient {
    async fn jsonize_report(&self, text: &str) -> Result<JsonizeResponse> {
        info!("jsonize request ({} chars)", text.len());
        self.post_json("/jsonize", &json!({ "text": text })).await
    }

    async fn analyze_health_report(
        &self,
        request: &HealthReportRequest,
    ) -> Result<AnalysisResponse> {
        info!(
            "analyze request ({} medications)",
            request.medication_information.len()
        );
        self.post_json("/analyze", request).await
    }

    async fn check_health(&self) -> Result<Value> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;
        decode_body(status, &text)
    }
}

/// Narrow a raw status/body pair into a typed result.
///
/// Order matters: a proxy error envelope wins over status-based mapping, a
/// 422 `detail` array becomes a validation failure, any other non-2xx maps to
/// a generic status error, and only then is the body decoded as `T`. No
/// schema validation happens beyond serde succeeding.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(error) = value.get("error").and_then(Value::as_str) {
            let details = value
                .get("details")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(SutError::Proxy {
                error: error.to_string(),
                details,
            });
        }
        if status == StatusCode::UNPROCESSABLE_ENTITY && value.get("detail").is_some() {
            if let Ok(validation) = serde_json::from_value::<HttpValidationError>(value.clone()) {
                let message = validation
                    .detail
                    .iter()
                    .map(|e| e.msg.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(SutError::Validation(message));
            }
        }
        if status.is_success() {
            return serde_json::from_value(value).map_err(SutError::from);
        }
    }
    if !status.is_success() {
        return Err(SutError::Api {
            status: status.as_u16(),
        });
    }
    serde_json::from_str(body).map_err(SutError::from)
}
