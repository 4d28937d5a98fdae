//! Per-report-type field tables.
//!
//! Keys are stable wire identifiers; labels are the Portuguese strings the
//! form shows. Order matters: it is preserved through rendering and prompt
//! assembly.

use crate::FieldDef;

const fn field(key: &'static str, label: &'static str) -> FieldDef {
    FieldDef { key, label }
}

pub const DEVOLUTIVA: &[FieldDef] = &[
    field("resultados_avaliacao", "Resultados da Avaliação"),
    field("interpretacao", "Interpretação dos Resultados"),
    field("recomendacoes", "Recomendações"),
    field("recursos_utilizados", "Recursos e Testes Utilizados"),
];

pub const EVOLUCAO: &[FieldDef] = &[
    field("periodo_avaliado", "Período Avaliado"),
    field("objetivos_terapeuticos", "Objetivos Terapêuticos"),
    field("progresso", "Progresso Observado"),
    field("desafios", "Desafios Encontrados"),
    field("estrategias", "Estratégias Utilizadas"),
];

pub const ANAMNESE: &[FieldDef] = &[
    field("queixa_principal", "Queixa Principal"),
    field("historico_sintomas", "Histórico dos Sintomas"),
    field("historico_familiar", "Histórico Familiar"),
    field("historico_medico", "Histórico Médico"),
    field("desenvolvimento", "História do Desenvolvimento"),
];

pub const AVALIACAO_INICIAL: &[FieldDef] = &[
    field("demanda", "Demanda Inicial"),
    field("sintomas_atuais", "Sintomas Atuais"),
    field("historico_tratamentos", "Histórico de Tratamentos"),
    field("suporte_social", "Rede de Suporte Social"),
];

pub const ALTA: &[FieldDef] = &[
    field("motivo_alta", "Motivo da Alta"),
    field("objetivos_alcancados", "Objetivos Alcançados"),
    field("progresso_final", "Progresso Final"),
    field("recomendacoes_futuras", "Recomendações Futuras"),
];

pub const PERSONALIDADE: &[FieldDef] = &[
    field("instrumentos_utilizados", "Instrumentos de Avaliação Utilizados"),
    field("resultados_personalidade", "Resultados da Avaliação de Personalidade"),
    field("perfil_psicologico", "Perfil Psicológico"),
    field("implicacoes_praticas", "Implicações Práticas"),
];

pub const NEUROPSICOLOGICA: &[FieldDef] = &[
    field("funcoes_avaliadas", "Funções Cognitivas Avaliadas"),
    field("instrumentos_neuropsicologicos", "Instrumentos Neuropsicológicos Utilizados"),
    field("resultados_cognitivos", "Resultados por Função Cognitiva"),
    field("conclusao_diagnostica", "Conclusão Diagnóstica"),
    field("recomendacoes_reabilitacao", "Recomendações para Reabilitação"),
];

pub const ACOMPANHAMENTO: &[FieldDef] = &[
    field("periodo_acompanhamento", "Período de Acompanhamento"),
    field("objetivos_alcancados", "Objetivos Alcançados"),
    field("evolucao_observada", "Evolução Observada"),
    field("aspectos_relevantes", "Aspectos Relevantes"),
    field("proximos_passos", "Próximos Passos"),
];

pub const INTERVENCAO: &[FieldDef] = &[
    field("comportamentos_alvo", "Comportamentos-Alvo"),
    field("estrategias_intervencao", "Estratégias de Intervenção"),
    field("resultados_obtidos", "Resultados Obtidos"),
    field("ajustes_necessarios", "Ajustes Necessários"),
];

pub const DIAGNOSTICO: &[FieldDef] = &[
    field("sintomas_apresentados", "Sintomas Apresentados"),
    field("criterios_diagnosticos", "Critérios Diagnósticos"),
    field("diagnostico_diferencial", "Diagnóstico Diferencial"),
    field("conclusao_diagnostica", "Conclusão Diagnóstica"),
    field("plano_tratamento", "Plano de Tratamento"),
];

pub const EMOCIONAL: &[FieldDef] = &[
    field("estado_emocional", "Estado Emocional Atual"),
    field("fatores_estresse", "Fatores de Estresse"),
    field("recursos_enfrentamento", "Recursos de Enfrentamento"),
    field("suporte_social", "Suporte Social"),
    field("recomendacoes", "Recomendações"),
];

pub const ESCOLAR: &[FieldDef] = &[
    field("desempenho_academico", "Desempenho Acadêmico"),
    field("comportamento_escolar", "Comportamento em Ambiente Escolar"),
    field("relacoes_interpessoais", "Relações Interpessoais"),
    field("necessidades_especificas", "Necessidades Específicas"),
    field("recomendacoes_escola", "Recomendações para a Escola"),
];

pub const INFANTIL: &[FieldDef] = &[
    field("desenvolvimento_atual", "Desenvolvimento Atual"),
    field("comportamento_observado", "Comportamento Observado"),
    field("interacao_social", "Interação Social"),
    field("aspectos_familiares", "Aspectos Familiares"),
    field("recomendacoes_pais", "Recomendações aos Pais"),
];

pub const PROFISSIONAL: &[FieldDef] = &[
    field("interesses_profissionais", "Interesses Profissionais"),
    field("habilidades_identificadas", "Habilidades Identificadas"),
    field("valores_trabalho", "Valores Relacionados ao Trabalho"),
    field("areas_recomendadas", "Áreas Recomendadas"),
    field("plano_desenvolvimento", "Plano de Desenvolvimento"),
];

pub const FAMILIAR: &[FieldDef] = &[
    field("dinamica_familiar", "Dinâmica Familiar"),
    field("padroes_relacionamento", "Padrões de Relacionamento"),
    field("conflitos_identificados", "Conflitos Identificados"),
    field("recursos_familiares", "Recursos Familiares"),
    field("recomendacoes_familia", "Recomendações para a Família"),
];

pub const SESSAO: &[FieldDef] = &[
    field("temas_abordados", "Temas Abordados"),
    field("tecnicas_utilizadas", "Técnicas Utilizadas"),
    field("respostas_paciente", "Respostas do Paciente"),
    field("insights_obtidos", "Insights Obtidos"),
    field("planejamento_proxima", "Planejamento para Próxima Sessão"),
];

pub const FEEDBACK: &[FieldDef] = &[
    field("progresso_observado", "Progresso Observado"),
    field("pontos_positivos", "Pontos Positivos"),
    field("areas_desenvolvimento", "Áreas para Desenvolvimento"),
    field("orientacoes_praticas", "Orientações Práticas"),
    field("proximos_objetivos", "Próximos Objetivos"),
];
