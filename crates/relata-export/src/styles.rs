use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Title placed as the centered document heading.
    pub title: String,

    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Heading font size in points.
    pub heading_size: usize,

    /// Spacing after each body paragraph, in points.
    pub paragraph_spacing_pt: u32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            title: "Relatório Psicológico".to_string(),
            body_font: "Times New Roman".to_string(),
            heading_size: 16,
            paragraph_spacing_pt: 12,
        }
    }
}
