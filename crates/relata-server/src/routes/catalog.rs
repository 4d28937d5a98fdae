use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use relata_core::models::patient::{Gender, TherapeuticApproach};
use relata_core::models::report_type::ReportType;
use relata_core::models::tone::Tone;
use relata_forms::{FieldDef, schema_for};

use crate::error::ApiError;

/// One selectable option in a form selector.
#[derive(Serialize)]
pub struct CatalogEntry {
    id: &'static str,
    label: &'static str,
}

pub async fn list_report_types() -> Json<Vec<CatalogEntry>> {
    Json(
        ReportType::ALL
            .iter()
            .map(|t| CatalogEntry {
                id: t.id(),
                label: t.label(),
            })
            .collect(),
    )
}

pub async fn get_report_fields(
    Path(id): Path<String>,
) -> Result<Json<Vec<FieldDef>>, ApiError> {
    let report_type = ReportType::from_id(&id)
        .ok_or_else(|| ApiError::NotFound(format!("report type not found: {id}")))?;
    Ok(Json(schema_for(report_type).to_vec()))
}

pub async fn list_tones() -> Json<Vec<CatalogEntry>> {
    Json(
        Tone::ALL
            .iter()
            .map(|t| CatalogEntry {
                id: t.id(),
                label: t.label(),
            })
            .collect(),
    )
}

pub async fn list_genders() -> Json<Vec<CatalogEntry>> {
    Json(
        Gender::ALL
            .iter()
            .map(|g| CatalogEntry {
                id: g.id(),
                label: g.label(),
            })
            .collect(),
    )
}

pub async fn list_approaches() -> Json<Vec<CatalogEntry>> {
    Json(
        TherapeuticApproach::ALL
            .iter()
            .map(|a| CatalogEntry {
                id: a.id(),
                label: a.label(),
            })
            .collect(),
    )
}
