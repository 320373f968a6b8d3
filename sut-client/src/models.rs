//! Wire types exchanged with the SUT engine.
//!
//! The engine speaks camelCase JSON for the report payloads and snake_case for
//! the response envelopes; the serde renames below mirror that. Extraction
//! output can be partial, so every report struct tolerates missing fields and
//! backfills defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SutError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Facility {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportInformation {
    pub report_no: String,
    pub report_date: String,
    pub protocol_no: String,
    pub report_type: String,
    pub facility: Facility,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Demographic {
    pub gender: String,
    pub date_of_birth: String,
    pub age: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Diagnosis {
    pub code: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Patient {
    pub demographic: Demographic,
    pub diagnoses: Vec<Diagnosis>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Usage {
    pub frequency: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicationInformation {
    pub active_ingredient: String,
    pub sgk_code: String,
    pub brand_name: String,
    pub form: String,
    pub dose: String,
    pub usage: Usage,
    pub added_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Doctor {
    pub full_name: String,
    pub specialty: String,
    pub diploma_no: String,
    pub registration_no: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notes {
    pub clinical_summary: String,
    pub dosage_details: String,
    pub allergies: String,
    pub contraindications: String,
    pub side_effects: String,
    pub monitoring: String,
    pub lifestyle: String,
    pub emergency_instructions: String,
    pub additional_comments: String,
}

/// Structured representation of one medical report. Produced by the jsonize
/// stage, consumed by the analyze stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthReportRequest {
    pub title: String,
    pub report_information: ReportInformation,
    pub patient: Patient,
    pub medication_information: Vec<MedicationInformation>,
    pub doctors: Vec<Doctor>,
    pub findings: Vec<Finding>,
    pub notes: Notes,
}

/// Envelope returned by the jsonize endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonizeResponse {
    pub request_id: String,
    pub message: String,
    pub data: HealthReportRequest,
}

/// Envelope returned by the analyze endpoint.
///
/// `data` is a JSON-encoded *string*, not an object; the engine double-encodes
/// the evaluation. Use [`AnalysisResponse::evaluation`] for the nested parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub request_id: String,
    pub message: String,
    pub data: String,
}

impl AnalysisResponse {
    pub fn evaluation(&self) -> Result<SutEvaluation> {
        serde_json::from_str(&self.data).map_err(SutError::from)
    }
}

/// Per-medication compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Uygun")]
    Compliant,
    #[serde(rename = "Uygun Değil")]
    NonCompliant,
    /// Active ingredient missing from the SUT database. Needs a distinct
    /// affordance: the ingredient has to be added upstream before it can be
    /// evaluated at all.
    #[serde(rename = "Bulunamadı")]
    NotFound,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Compliant => "Uygun",
            Verdict::NonCompliant => "Uygun Değil",
            Verdict::NotFound => "Bulunamadı",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate verdict for the whole report. The engine never reports an
/// overall "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallResult {
    #[serde(rename = "Uygun")]
    Compliant,
    #[serde(rename = "Uygun Değil")]
    NonCompliant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SutMedication {
    /// Absent when the ingredient was not found in the SUT database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sgk_code: Option<String>,
    pub active_ingredient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    pub result: Verdict,
    pub evaluation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sut_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl SutMedication {
    /// Stable key for per-medication UI state; falls back to the ingredient
    /// name when no SGK code exists (the "Bulunamadı" case).
    pub fn key(&self) -> &str {
        self.sgk_code.as_deref().unwrap_or(&self.active_ingredient)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SutEvaluation {
    pub medications: Vec<SutMedication>,
    pub overall_result: OverallResult,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// One entry of the engine's HTTP 422 payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpValidationError {
    pub detail: Vec<ValidationError>,
}
