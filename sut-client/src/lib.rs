pub mod client;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sample;
pub mod telemetry;
pub mod workbench;

// Re-export commonly used types
pub use client::{DEFAULT_ENGINE_URL, SutApi, SutClient};
pub use error::{Result, SutError};
pub use models::{
    AnalysisResponse, HealthReportRequest, JsonizeResponse, OverallResult, SutEvaluation,
    SutMedication, Verdict,
};
pub use pipeline::{PipelineOutcome, process_report};
pub use telemetry::{TELEMETRY_CAPACITY, TelemetryEntry, TelemetryKind, TelemetryLog};
pub use workbench::{MedicationFeedback, TokenUsage, WorkbenchSession};

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted engine double: serves the sample fixtures and fails on demand.
    struct ScriptedApi {
        fail_jsonize: bool,
        fail_analyze: bool,
        analyze_calls: AtomicUsize,
    }

    impl ScriptedApi {
        fn healthy() -> Self {
            Self {
                fail_jsonize: false,
                fail_analyze: false,
                analyze_calls: AtomicUsize::new(0),
            }
        }

        fn failing_jsonize() -> Self {
            Self {
                fail_jsonize: true,
                ..Self::healthy()
            }
        }

        fn failing_analyze() -> Self {
            Self {
                fail_analyze: true,
                ..Self::healthy()
            }
        }
    }

    #[async_trait]
    impl SutApi for ScriptedApi {
        async fn jsonize_report(&self, _text: &str) -> Result<JsonizeResponse> {
            if self.fail_jsonize {
                return Err(SutError::Api { status: 503 });
            }
            Ok(JsonizeResponse {
                request_id: "jsonize-1".to_string(),
                message: "extracted".to_string(),
                data: sample::sample_extracted_report(),
            })
        }

        async fn analyze_health_report(
            &self,
            _request: &HealthReportRequest,
        ) -> Result<AnalysisResponse> {
            self.analyze_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_analyze {
                return Err(SutError::Proxy {
                    error: "Proxy error".to_string(),
                    details: "connection reset by peer".to_string(),
                });
            }
            Ok(AnalysisResponse {
                request_id: "analyze-1".to_string(),
                message: "evaluated".to_string(),
                data: serde_json::to_string(&sample::sample_evaluation()).unwrap(),
            })
        }

        async fn check_health(&self) -> Result<Value> {
            Ok(json!({ "status": "ok" }))
        }
    }

    #[tokio::test]
    async fn pipeline_returns_both_stages_on_success() {
        let api = ScriptedApi::healthy();
        let outcome = process_report(&api, sample::SAMPLE_MEDICAL_REPORT)
            .await
            .unwrap();

        assert_eq!(outcome.jsonize.data.medication_information.len(), 3);
        let evaluation = outcome.analysis.evaluation().unwrap();
        assert!(matches!(
            evaluation.overall_result,
            OverallResult::Compliant | OverallResult::NonCompliant
        ));
        assert_eq!(
            evaluation.medications.len(),
            outcome.jsonize.data.medication_information.len()
        );
    }

    #[tokio::test]
    async fn jsonize_failure_short_circuits_analyze() {
        let api = ScriptedApi::failing_jsonize();
        let err = process_report(&api, "HASTA RAPORU").await.unwrap_err();

        assert_eq!(err.to_string(), "API Error: 503");
        assert_eq!(api.analyze_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn analyze_failure_propagates_without_outcome() {
        let api = ScriptedApi::failing_analyze();
        let err = process_report(&api, "HASTA RAPORU").await.unwrap_err();

        assert!(matches!(err, SutError::Proxy { .. }));
        assert_eq!(api.analyze_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn workbench_run_fills_all_slots() {
        let api = ScriptedApi::healthy();
        let mut session = WorkbenchSession::new();
        session.load_sample();
        session.run(&api).await;

        assert!(session.error.is_none());
        assert!(!session.processing);
        let extracted = session.extracted.as_ref().unwrap();
        assert_eq!(extracted.medication_information.len(), 3);

        let evaluation = session.evaluation.as_ref().unwrap();
        assert_eq!(evaluation.medications.len(), 3);
        assert_eq!(session.feedback.len(), 3);
        // The not-found medication keys on its ingredient name.
        assert!(session.feedback.contains_key("Tirzepatid"));

        assert!(session.token_usage.unwrap().total > 0);
        assert!(session.latency_ms.is_some());
        assert!(
            session
                .telemetry
                .latest_of(TelemetryKind::Response)
                .is_some()
        );
    }

    #[tokio::test]
    async fn workbench_keeps_extracted_data_when_analyze_fails() {
        let api = ScriptedApi::failing_analyze();
        let mut session = WorkbenchSession::new();
        session.load_sample();
        session.run(&api).await;

        // Error surfaced, evaluation panel stays empty, structured data kept.
        let error = session.error.as_ref().unwrap();
        assert!(error.contains("connection reset by peer"));
        assert!(session.evaluation.is_none());
        assert!(session.extracted.is_some());
        assert!(!session.processing);
        assert!(session.telemetry.latest_of(TelemetryKind::Error).is_some());
    }

    #[tokio::test]
    async fn workbench_ignores_blank_input() {
        let api = ScriptedApi::healthy();
        let mut session = WorkbenchSession::new();
        session.input_text = "   \n".to_string();
        session.run(&api).await;

        assert!(session.telemetry.is_empty());
        assert!(session.extracted.is_none());
        assert!(session.error.is_none());
    }

    #[tokio::test]
    async fn three_verdicts_branch_exhaustively() {
        let evaluation = sample::sample_evaluation();
        let mut compliant = 0;
        let mut non_compliant = 0;
        let mut not_found = 0;
        for medication in &evaluation.medications {
            match medication.result {
                Verdict::Compliant => compliant += 1,
                Verdict::NonCompliant => non_compliant += 1,
                Verdict::NotFound => {
                    not_found += 1;
                    assert!(medication.sgk_code.is_none());
                }
            }
        }
        assert_eq!((compliant, non_compliant, not_found), (1, 1, 1));
    }

    mod live_http {
        //! `SutClient` against a throwaway in-process engine.

        use super::*;
        use axum::{Json, Router, extract::Json as BodyJson, routing::post};
        use tokio::net::TcpListener;

        async fn spawn_fake_engine() -> String {
            let router = Router::new()
                .route(
                    "/jsonize",
                    post(|BodyJson(body): BodyJson<Value>| async move {
                        assert!(body["text"].is_string());
                        Json(json!({
                            "request_id": "jsonize-live",
                            "message": "extracted",
                            "data": sample::sample_extracted_report(),
                        }))
                    }),
                )
                .route(
                    "/analyze",
                    post(|BodyJson(_body): BodyJson<Value>| async move {
                        Json(json!({
                            "request_id": "analyze-live",
                            "message": "evaluated",
                            "data": serde_json::to_string(&sample::sample_evaluation()).unwrap(),
                        }))
                    }),
                );

            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            format!("http://{addr}")
        }

        #[tokio::test]
        async fn sample_report_round_trips_through_http() {
            let base_url = spawn_fake_engine().await;
            let client = SutClient::new(base_url);

            let outcome = process_report(&client, sample::SAMPLE_MEDICAL_REPORT)
                .await
                .unwrap();
            assert_eq!(outcome.jsonize.request_id, "jsonize-live");
            assert_eq!(outcome.jsonize.data.medication_information.len(), 3);

            let evaluation = outcome.analysis.evaluation().unwrap();
            assert_eq!(evaluation.overall_result, OverallResult::NonCompliant);
        }

        #[tokio::test]
        async fn network_failure_is_a_transport_error() {
            // Port 0 is never connectable.
            let client = SutClient::new("http://127.0.0.1:0");
            let err = process_report(&client, "HASTA RAPORU").await.unwrap_err();
            assert!(matches!(err, SutError::Transport(_)));
        }
    }
}
