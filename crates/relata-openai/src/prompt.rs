//! Prompt assembly for report generation.
//!
//! Builds the single natural-language prompt sent to the model: a role
//! sentence naming the report type, the tone directive, the patient data
//! block, and every form field in schema order. Field values are passed
//! through verbatim — free text is not escaped or truncated, so the caller
//! owns any prompt-injection concerns.

use std::collections::BTreeMap;

use relata_core::error::CoreError;
use relata_core::models::patient::PatientRecord;
use relata_core::models::report_type::ReportType;
use relata_core::models::tone::Tone;
use relata_forms::schema_for;

/// Assemble the generation prompt.
///
/// `fields` must contain a value for every key in the report type's schema;
/// a missing key is a [`CoreError::MissingField`]. Extra keys are ignored —
/// the schema, not the map, drives iteration, which also fixes the output
/// order. Pure and deterministic: identical inputs produce an identical
/// string.
pub fn build_prompt(
    report_type: ReportType,
    tone: Tone,
    patient: &PatientRecord,
    fields: &BTreeMap<String, String>,
) -> Result<String, CoreError> {
    let mut prompt = format!(
        "Você é um assistente especializado em psicologia, focado na geração de {}.\n\n",
        report_type.label()
    );

    prompt.push_str(&format!("Tom do relatório: {}\n\n", tone.instruction()));

    prompt.push_str("Dados do paciente:\n");
    prompt.push_str(&format!("Nome: {}\n", patient.name));
    prompt.push_str(&format!("Idade: {} anos\n", patient.age));
    prompt.push_str(&format!("Gênero: {}\n", patient.gender.label()));
    prompt.push_str(&format!(
        "Data da avaliação: {}\n",
        patient.evaluation_date.strftime("%d/%m/%Y")
    ));
    prompt.push_str(&format!(
        "Abordagem terapêutica: {}\n\n",
        patient.approach.label()
    ));

    prompt.push_str("Informações específicas:\n");
    for def in schema_for(report_type) {
        let value = fields
            .get(def.key)
            .ok_or_else(|| CoreError::MissingField(def.key.to_string()))?;
        prompt.push_str(&format!("{}: {}\n", def.key, value));
    }

    prompt.push_str("\nPor favor, gere um relatório profissional e detalhado.");

    Ok(prompt)
}
