use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Oldest accepted patient age, inclusive.
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculino,
    Feminino,
    NaoBinario,
    PrefiroNaoEspecificar,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Masculino,
        Gender::Feminino,
        Gender::NaoBinario,
        Gender::PrefiroNaoEspecificar,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Feminino => "feminino",
            Gender::NaoBinario => "nao_binario",
            Gender::PrefiroNaoEspecificar => "prefiro_nao_especificar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
            Gender::NaoBinario => "Não-binário",
            Gender::PrefiroNaoEspecificar => "Prefiro não especificar",
        }
    }
}

/// Therapeutic approach under which the patient is being seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TherapeuticApproach {
    TerapiaCognitivoComportamental,
    Psicanalise,
    TerapiaHumanista,
    TerapiaSistemica,
    TerapiaIntegrativa,
    TerapiaAba,
    GestaltTerapia,
    TerapiaAnalitica,
    TerapiaCentradaNaPessoa,
    TerapiaComportamental,
}

impl TherapeuticApproach {
    pub const ALL: [TherapeuticApproach; 10] = [
        TherapeuticApproach::TerapiaCognitivoComportamental,
        TherapeuticApproach::Psicanalise,
        TherapeuticApproach::TerapiaHumanista,
        TherapeuticApproach::TerapiaSistemica,
        TherapeuticApproach::TerapiaIntegrativa,
        TherapeuticApproach::TerapiaAba,
        TherapeuticApproach::GestaltTerapia,
        TherapeuticApproach::TerapiaAnalitica,
        TherapeuticApproach::TerapiaCentradaNaPessoa,
        TherapeuticApproach::TerapiaComportamental,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TherapeuticApproach::TerapiaCognitivoComportamental => {
                "terapia_cognitivo_comportamental"
            }
            TherapeuticApproach::Psicanalise => "psicanalise",
            TherapeuticApproach::TerapiaHumanista => "terapia_humanista",
            TherapeuticApproach::TerapiaSistemica => "terapia_sistemica",
            TherapeuticApproach::TerapiaIntegrativa => "terapia_integrativa",
            TherapeuticApproach::TerapiaAba => "terapia_aba",
            TherapeuticApproach::GestaltTerapia => "gestalt_terapia",
            TherapeuticApproach::TerapiaAnalitica => "terapia_analitica",
            TherapeuticApproach::TerapiaCentradaNaPessoa => "terapia_centrada_na_pessoa",
            TherapeuticApproach::TerapiaComportamental => "terapia_comportamental",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TherapeuticApproach::TerapiaCognitivoComportamental => {
                "Terapia Cognitivo-Comportamental"
            }
            TherapeuticApproach::Psicanalise => "Psicanálise",
            TherapeuticApproach::TerapiaHumanista => "Terapia Humanista",
            TherapeuticApproach::TerapiaSistemica => "Terapia Sistêmica",
            TherapeuticApproach::TerapiaIntegrativa => "Terapia Integrativa",
            TherapeuticApproach::TerapiaAba => "Terapia ABA",
            TherapeuticApproach::GestaltTerapia => "Gestalt-terapia",
            TherapeuticApproach::TerapiaAnalitica => "Terapia Analítica",
            TherapeuticApproach::TerapiaCentradaNaPessoa => "Terapia Centrada na Pessoa",
            TherapeuticApproach::TerapiaComportamental => "Terapia Comportamental",
        }
    }
}

/// Patient metadata collected once per generation. Immutable after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub evaluation_date: jiff::civil::Date,
    pub approach: TherapeuticApproach,
}

impl PatientRecord {
    /// Build a record, rejecting ages above [`MAX_AGE`].
    pub fn new(
        name: impl Into<String>,
        age: u8,
        gender: Gender,
        evaluation_date: jiff::civil::Date,
        approach: TherapeuticApproach,
    ) -> Result<PatientRecord, CoreError> {
        if age > MAX_AGE {
            return Err(CoreError::AgeOutOfRange(age));
        }
        Ok(PatientRecord {
            name: name.into(),
            age,
            gender,
            evaluation_date,
            approach,
        })
    }
}
