//! Two-stage analysis pipeline: jsonize, then analyze.
//!
//! Strictly sequential saga with no compensation step. Both stages are
//! read-only against the report, so a failure simply propagates; there is
//! nothing to undo, no retry and no timeout.

use tracing::info;

use crate::client::SutApi;
use crate::error::Result;
use crate::models::{AnalysisResponse, JsonizeResponse};

/// Both stage results of one successful run. Never constructed with an
/// analysis but without the jsonize result it was derived from.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub jsonize: JsonizeResponse,
    pub analysis: AnalysisResponse,
}

/// Run jsonize and feed its structured output into analyze.
///
/// Short-circuits on the first failure: analyze is never called when jsonize
/// fails, and a stage-two failure yields no partial outcome (callers that
/// want to keep the stage-one data across an analyze failure track the stages
/// separately, as the workbench session does).
pub async fn process_report(api: &dyn SutApi, text: &str) -> Result<PipelineOutcome> {
    info!("starting report pipeline");

    let jsonize = api.jsonize_report(text).await?;
    info!(
        "jsonize succeeded (request {}, {} medications)",
        jsonize.request_id,
        jsonize.data.medication_information.len()
    );

    let analysis = api.analyze_health_report(&jsonize.data).await?;
    info!("analyze succeeded (request {})", analysis.request_id);

    Ok(PipelineOutcome { jsonize, analysis })
}
