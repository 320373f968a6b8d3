//! Headless workbench session state.
//!
//! Owns everything the UI renders for one user session: the input text, the
//! two result slots, the error slot, the processing gate, latency and token
//! estimates, the telemetry ring, and per-medication feedback. Rendering is a
//! consumer concern; this module only manages state transitions.

use std::collections::HashMap;
use std::time::Instant;

use serde_json::json;
use tracing::{error, info, warn};

use crate::client::SutApi;
use crate::error::Result;
use crate::models::{AnalysisResponse, HealthReportRequest, JsonizeResponse, SutEvaluation};
use crate::sample::SAMPLE_MEDICAL_REPORT;
use crate::telemetry::{TelemetryKind, TelemetryLog};

/// Rough approximation, ~4 characters per token for mixed text.
pub fn estimate_tokens(text: &str) -> usize {
    text.len().div_ceil(4)
}

pub fn format_latency(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub input: usize,
    pub output: usize,
    pub total: usize,
}

/// Per-medication correctness feedback. Local to the session, never sent to
/// any server in this version.
#[derive(Debug, Clone, Default)]
pub struct MedicationFeedback {
    pub is_correct: Option<bool>,
    pub comment: String,
}

#[derive(Debug, Default)]
pub struct WorkbenchSession {
    pub input_text: String,
    pub extracted: Option<HealthReportRequest>,
    pub evaluation: Option<SutEvaluation>,
    pub error: Option<String>,
    pub processing: bool,
    pub latency_ms: Option<u64>,
    pub token_usage: Option<TokenUsage>,
    pub telemetry: TelemetryLog,
    pub feedback: HashMap<String, MedicationFeedback>,
}

impl WorkbenchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_sample(&mut self) {
        self.input_text = SAMPLE_MEDICAL_REPORT.to_string();
    }

    pub fn set_feedback(&mut self, medication_key: &str, is_correct: Option<bool>, comment: &str) {
        self.feedback.insert(
            medication_key.to_string(),
            MedicationFeedback {
                is_correct,
                comment: comment.to_string(),
            },
        );
    }

    pub fn reset(&mut self) {
        self.input_text.clear();
        self.extracted = None;
        self.evaluation = None;
        self.error = None;
        self.latency_ms = None;
        self.token_usage = None;
        self.feedback.clear();
    }

    /// Run the two-stage pipeline for the current input.
    ///
    /// No-op while a run is in flight or when the input is blank. A stage-two
    /// failure keeps the already-extracted structured data on display while
    /// the evaluation slot stays empty; every outcome lands in the telemetry
    /// ring. The processing gate always clears when the run settles.
    pub async fn run(&mut self, api: &dyn SutApi) {
        if self.processing {
            warn!("run ignored: a pipeline run is already in flight");
            return;
        }
        if self.input_text.trim().is_empty() {
            return;
        }

        self.processing = true;
        self.error = None;
        self.extracted = None;
        self.evaluation = None;
        self.latency_ms = None;
        self.token_usage = None;
        self.feedback.clear();

        let input_tokens = estimate_tokens(&self.input_text);
        self.telemetry.record(
            TelemetryKind::Request,
            json!({
                "endpoint": "/api/jsonize",
                "method": "POST",
                "body": { "text": format!("{}...", truncate_chars(&self.input_text, 200)) },
                "inputTokens": input_tokens,
            }),
            None,
        );

        let started = Instant::now();
        let result = self.run_stages(api).await;
        let latency = started.elapsed().as_millis() as u64;

        match result {
            Ok((jsonize, analysis, evaluation)) => {
                let output_tokens = self
                    .extracted
                    .as_ref()
                    .and_then(|data| serde_json::to_string(data).ok())
                    .map(|s| estimate_tokens(&s))
                    .unwrap_or(0);
                self.latency_ms = Some(latency);
                self.token_usage = Some(TokenUsage {
                    input: input_tokens,
                    output: output_tokens,
                    total: input_tokens + output_tokens,
                });

                // Seed a neutral feedback row per medication.
                for medication in &evaluation.medications {
                    self.feedback
                        .entry(medication.key().to_string())
                        .or_default();
                }

                self.telemetry.record(
                    TelemetryKind::Response,
                    json!({
                        "jsonizeRequestId": jsonize.request_id,
                        "analysisRequestId": analysis.request_id,
                        "overallResult": evaluation.overall_result,
                        "medicationCount": evaluation.medications.len(),
                    }),
                    Some(latency),
                );
                self.evaluation = Some(evaluation);
                info!("pipeline run finished in {}", format_latency(latency));
            }
            Err(e) => {
                let message = e.to_string();
                error!("pipeline run failed: {}", message);
                self.telemetry.record(
                    TelemetryKind::Error,
                    json!({ "error": message }),
                    Some(latency),
                );
                self.error = Some(message);
            }
        }

        self.processing = false;
    }

    // Stage one's output is stored as soon as it exists, so an analyze
    // failure still leaves the extracted report visible.
    async fn run_stages(
        &mut self,
        api: &dyn SutApi,
    ) -> Result<(JsonizeResponse, AnalysisResponse, SutEvaluation)> {
        let jsonize = api.jsonize_report(&self.input_text).await?;
        self.extracted = Some(jsonize.data.clone());

        let analysis = api.analyze_health_report(&jsonize.data).await?;
        let evaluation = analysis.evaluation()?;
        Ok((jsonize, analysis, evaluation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_estimate_rounds_up() {
        assert_eq!(estimate_tokens(""), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
    }

    #[test]
    fn latency_formatting() {
        assert_eq!(format_latency(850), "850ms");
        assert_eq!(format_latency(1250), "1.25s");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "ağrı".repeat(100);
        let cut = truncate_chars(&text, 200);
        assert_eq!(cut.chars().count(), 200);
    }
}
