use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use crate::error::ExportError;
use crate::markdown::{clean_markdown, split_paragraphs};
use crate::styles::DocumentStyles;

/// Generate a DOCX report document from model output.
///
/// The document is a fixed centered title followed by one plain paragraph
/// per blank-line-separated unit of the cleaned text. Empty input (or input
/// with no non-blank paragraphs) produces a document containing only the
/// title, not an error.
pub fn markdown_to_docx(text: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx =
        Docx::new().add_style(heading_style("Heading1", "heading 1", styles.heading_size));

    docx = docx.add_paragraph(
        Paragraph::new()
            .style("Heading1")
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(styles.title.as_str())),
    );

    let cleaned = clean_markdown(text);
    let units = split_paragraphs(&cleaned);
    let paragraphs = units.len();
    for unit in units {
        docx = docx.add_paragraph(body_paragraph(unit, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    debug!(paragraphs, bytes = bytes.len(), "docx generated");

    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        // LineSpacing::after is in twentieths of a point
        .line_spacing(LineSpacing::new().after(styles.paragraph_spacing_pt * 20))
        .add_run(
            Run::new()
                .add_text(text)
                .fonts(RunFonts::new().ascii(&styles.body_font)),
        )
}
