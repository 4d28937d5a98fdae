use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The category of psychological report being generated.
///
/// Each variant carries a stable snake_case identifier (used in URLs, wire
/// payloads, and artifact filenames) and a Portuguese display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    Devolutiva,
    Evolucao,
    Anamnese,
    AvaliacaoInicial,
    Alta,
    Personalidade,
    Neuropsicologica,
    Acompanhamento,
    Intervencao,
    Diagnostico,
    Emocional,
    Escolar,
    Infantil,
    Profissional,
    Familiar,
    Sessao,
    Feedback,
}

impl ReportType {
    /// Every supported report type, in catalog order.
    pub const ALL: [ReportType; 17] = [
        ReportType::Devolutiva,
        ReportType::Evolucao,
        ReportType::Anamnese,
        ReportType::AvaliacaoInicial,
        ReportType::Alta,
        ReportType::Personalidade,
        ReportType::Neuropsicologica,
        ReportType::Acompanhamento,
        ReportType::Intervencao,
        ReportType::Diagnostico,
        ReportType::Emocional,
        ReportType::Escolar,
        ReportType::Infantil,
        ReportType::Profissional,
        ReportType::Familiar,
        ReportType::Sessao,
        ReportType::Feedback,
    ];

    /// Stable identifier, e.g. `"avaliacao_inicial"`.
    pub fn id(self) -> &'static str {
        match self {
            ReportType::Devolutiva => "devolutiva",
            ReportType::Evolucao => "evolucao",
            ReportType::Anamnese => "anamnese",
            ReportType::AvaliacaoInicial => "avaliacao_inicial",
            ReportType::Alta => "alta",
            ReportType::Personalidade => "personalidade",
            ReportType::Neuropsicologica => "neuropsicologica",
            ReportType::Acompanhamento => "acompanhamento",
            ReportType::Intervencao => "intervencao",
            ReportType::Diagnostico => "diagnostico",
            ReportType::Emocional => "emocional",
            ReportType::Escolar => "escolar",
            ReportType::Infantil => "infantil",
            ReportType::Profissional => "profissional",
            ReportType::Familiar => "familiar",
            ReportType::Sessao => "sessao",
            ReportType::Feedback => "feedback",
        }
    }

    /// Portuguese display label, e.g. `"Relatório de Devolutiva"`.
    pub fn label(self) -> &'static str {
        match self {
            ReportType::Devolutiva => "Relatório de Devolutiva",
            ReportType::Evolucao => "Relatório de Evolução",
            ReportType::Anamnese => "Relatório de Anamnese",
            ReportType::AvaliacaoInicial => "Relatório de Avaliação Psicológica Inicial",
            ReportType::Alta => "Relatório de Alta Terapêutica",
            ReportType::Personalidade => "Relatório de Avaliação de Personalidade",
            ReportType::Neuropsicologica => "Relatório de Avaliação Neuropsicológica",
            ReportType::Acompanhamento => "Relatório de Acompanhamento Terapêutico",
            ReportType::Intervencao => "Relatório de Intervenção Comportamental",
            ReportType::Diagnostico => "Relatório de Diagnóstico Psicológico",
            ReportType::Emocional => "Relatório de Avaliação Emocional",
            ReportType::Escolar => "Relatório para Escolas",
            ReportType::Infantil => "Relatório de Avaliação Infantil",
            ReportType::Profissional => "Relatório de Avaliação para Orientação Profissional",
            ReportType::Familiar => "Relatório de Avaliação Familiar",
            ReportType::Sessao => "Relatório de Sessão Terapêutica",
            ReportType::Feedback => "Relatório de Feedback para o Paciente e Família",
        }
    }

    /// Look up a report type by its identifier.
    pub fn from_id(id: &str) -> Option<ReportType> {
        ReportType::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl FromStr for ReportType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::from_id(s).ok_or_else(|| CoreError::InvalidReportType(s.to_string()))
    }
}
