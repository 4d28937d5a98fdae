//! Markdown cleanup for generated report text.
//!
//! The model returns markdown-ish prose. The exported document keeps only
//! plain paragraphs: emphasis markers are removed (styling is discarded,
//! not translated to rich-text runs), heading markers are stripped, and
//! bullet markers become a bullet glyph.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of one or two asterisks, anywhere (`*italic*`, `**bold**`).
static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*{1,2}").unwrap());

/// A run of `#` plus one whitespace character at the start of a line.
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s").unwrap());

/// A hyphen plus one whitespace character at the start of a line.
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^-\s").unwrap());

/// Strip markdown markup, in fixed order: emphasis, headings, bullets.
///
/// Idempotent: cleaning already-clean text is a no-op.
pub fn clean_markdown(text: &str) -> String {
    let text = EMPHASIS.replace_all(text, "");
    let text = HEADING.replace_all(&text, "");
    let text = BULLET.replace_all(&text, "\u{2022} ");
    text.into_owned()
}

/// Split on blank-line boundaries (two consecutive newlines), trim each
/// unit, and drop empty ones.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}
