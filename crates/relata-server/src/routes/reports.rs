use std::collections::BTreeMap;

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tracing::info;

use relata_core::filenames;
use relata_core::models::patient::{Gender, PatientRecord, TherapeuticApproach};
use relata_core::models::report_type::ReportType;
use relata_core::models::tone::Tone;
use relata_export::docx::markdown_to_docx;
use relata_export::styles::DocumentStyles;
use relata_openai::prompt::build_prompt;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub report_type: ReportType,
    pub tone: Tone,
    pub patient: PatientInput,
    pub fields: BTreeMap<String, String>,
}

/// Patient form data as submitted; validated into a [`PatientRecord`].
#[derive(Deserialize)]
pub struct PatientInput {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub evaluation_date: jiff::civil::Date,
    pub approach: TherapeuticApproach,
}

#[derive(Serialize)]
pub struct GenerateResponse {
    /// Markdown-ish report text, shown as a preview before export.
    pub content: String,
    /// Suggested download filename for the exported document.
    pub filename: String,
}

/// Build the prompt, invoke the generator, and return the report text.
///
/// One blocking call chain per request; a failure aborts this attempt only
/// and the client may immediately retry.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let generator = state.generator.as_ref().ok_or_else(|| {
        ApiError::MissingConfiguration("OPENAI_API_KEY não configurada".to_string())
    })?;

    let patient = PatientRecord::new(
        req.patient.name,
        req.patient.age,
        req.patient.gender,
        req.patient.evaluation_date,
        req.patient.approach,
    )?;

    let prompt = build_prompt(req.report_type, req.tone, &patient, &req.fields)?;

    info!(report_type = req.report_type.id(), "generating report");
    let content = generator.generate(&prompt).await?;

    let filename = filenames::report_docx(req.report_type, jiff::Zoned::now().date());

    Ok(Json(GenerateResponse { content, filename }))
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub report_type: ReportType,
    pub content: String,
}

/// Convert generated report text to a downloadable DOCX document.
pub async fn export_report(
    Json(req): Json<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = markdown_to_docx(&req.content, &DocumentStyles::default())?;
    let filename = filenames::report_docx(req.report_type, jiff::Zoned::now().date());

    info!(report_type = req.report_type.id(), bytes = bytes.len(), "report exported");

    let headers = [
        (header::CONTENT_TYPE, filenames::DOCX_MIME.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, bytes))
}
