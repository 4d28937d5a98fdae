//! Download artifact naming conventions.
//!
//! Pure string functions — no document dependency. These define the
//! canonical names of generated report artifacts offered for download.

use jiff::civil::Date;

use crate::models::report_type::ReportType;

/// MIME type of the exported document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Download filename for a generated report, e.g.
/// `relatorio_devolutiva_20240115.docx`.
pub fn report_docx(report_type: ReportType, date: Date) -> String {
    format!(
        "relatorio_{}_{}.docx",
        report_type.id(),
        date.strftime("%Y%m%d")
    )
}
