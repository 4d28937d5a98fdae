use serde::{Deserialize, Serialize};

/// Writing-style directive injected into the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    FormalTecnico,
    AcessivelDidatico,
    ColaborativoEmpatico,
}

impl Tone {
    pub const ALL: [Tone; 3] = [
        Tone::FormalTecnico,
        Tone::AcessivelDidatico,
        Tone::ColaborativoEmpatico,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Tone::FormalTecnico => "formal_tecnico",
            Tone::AcessivelDidatico => "acessivel_didatico",
            Tone::ColaborativoEmpatico => "colaborativo_empatico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::FormalTecnico => "Tom Formal e Técnico",
            Tone::AcessivelDidatico => "Tom Acessível e Didático",
            Tone::ColaborativoEmpatico => "Tom Colaborativo e Empático",
        }
    }

    /// The full natural-language instruction placed in the prompt.
    pub fn instruction(self) -> &'static str {
        match self {
            Tone::FormalTecnico => {
                "Use linguagem técnica e profissional, priorizando termos científicos \
                 e mantendo um tom objetivo e formal."
            }
            Tone::AcessivelDidatico => {
                "Use linguagem clara e acessível, explicando conceitos técnicos de \
                 forma didática e compreensível."
            }
            Tone::ColaborativoEmpatico => {
                "Use linguagem acolhedora e empática, mantendo o profissionalismo \
                 mas priorizando a conexão humana."
            }
        }
    }

    pub fn from_id(id: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|t| t.id() == id)
    }
}
