//! relata-forms
//!
//! Free-text field schemas for each report type. Pure data — no HTTP
//! dependency. Defines which inputs a report form collects and the order
//! in which they are rendered and fed into the prompt.

pub mod schemas;

use serde::Serialize;

use relata_core::models::report_type::ReportType;

/// A single free-text input in a report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Stable key used in field-value maps and in the prompt.
    pub key: &'static str,
    /// Portuguese label shown next to the input.
    pub label: &'static str,
}

/// Ordered field schema for a report type.
///
/// Total over [`ReportType`]: every variant has a non-empty schema with
/// unique keys. Order is the render order and the order fields appear in
/// the generated prompt. Unknown identifiers are rejected upstream by
/// [`ReportType::from_id`] — there is no empty-schema fallback.
pub fn schema_for(report_type: ReportType) -> &'static [FieldDef] {
    match report_type {
        ReportType::Devolutiva => schemas::DEVOLUTIVA,
        ReportType::Evolucao => schemas::EVOLUCAO,
        ReportType::Anamnese => schemas::ANAMNESE,
        ReportType::AvaliacaoInicial => schemas::AVALIACAO_INICIAL,
        ReportType::Alta => schemas::ALTA,
        ReportType::Personalidade => schemas::PERSONALIDADE,
        ReportType::Neuropsicologica => schemas::NEUROPSICOLOGICA,
        ReportType::Acompanhamento => schemas::ACOMPANHAMENTO,
        ReportType::Intervencao => schemas::INTERVENCAO,
        ReportType::Diagnostico => schemas::DIAGNOSTICO,
        ReportType::Emocional => schemas::EMOCIONAL,
        ReportType::Escolar => schemas::ESCOLAR,
        ReportType::Infantil => schemas::INFANTIL,
        ReportType::Profissional => schemas::PROFISSIONAL,
        ReportType::Familiar => schemas::FAMILIAR,
        ReportType::Sessao => schemas::SESSAO,
        ReportType::Feedback => schemas::FEEDBACK,
    }
}

/// The keys of a report type's schema, in declaration order.
pub fn field_keys(report_type: ReportType) -> impl Iterator<Item = &'static str> {
    schema_for(report_type).iter().map(|f| f.key)
}
