use relata_export::markdown::{clean_markdown, split_paragraphs};

#[test]
fn emphasis_markers_are_removed_not_translated() {
    assert_eq!(clean_markdown("**Bold** and *italic* text"), "Bold and italic text");
    // Three asterisks are consumed as a pair plus a single.
    assert_eq!(clean_markdown("***both***"), "both");
}

#[test]
fn heading_markers_are_stripped_at_line_start_only() {
    assert_eq!(clean_markdown("# Título\ncorpo"), "Título\ncorpo");
    assert_eq!(clean_markdown("### Seção"), "Seção");
    // A hash mid-line is content, not markup.
    assert_eq!(clean_markdown("caso #3 em análise"), "caso #3 em análise");
}

#[test]
fn bullet_markers_become_a_bullet_glyph() {
    assert_eq!(clean_markdown("- item um\n- item dois"), "• item um\n• item dois");
    // A hyphen mid-line is untouched.
    assert_eq!(clean_markdown("bem-estar"), "bem-estar");
}

#[test]
fn cleanup_is_idempotent() {
    let once = clean_markdown("**Bold** text\n\n- item one\n\n# Heading\nplain line");
    let twice = clean_markdown(&once);
    assert_eq!(once, twice);
}

#[test]
fn paragraphs_split_on_blank_lines() {
    let units = split_paragraphs("primeiro\n\nsegundo\n\n\n\nterceiro");
    assert_eq!(units, ["primeiro", "segundo", "terceiro"]);
}

#[test]
fn empty_input_yields_no_paragraphs() {
    assert!(split_paragraphs("").is_empty());
    assert!(split_paragraphs("\n\n\n\n").is_empty());
    assert!(split_paragraphs("   \n\n\t").is_empty());
}

#[test]
fn single_newline_does_not_split() {
    // A heading marker is removed but its text stays joined to the next
    // line when no blank line separates them.
    let cleaned = clean_markdown("# Heading\nplain line");
    let units = split_paragraphs(&cleaned);
    assert_eq!(units, ["Heading\nplain line"]);
}

#[test]
fn worked_example_end_to_end() {
    let cleaned = clean_markdown("**Bold** text\n\n- item one\n\n# Heading\nplain line");
    let units = split_paragraphs(&cleaned);
    assert_eq!(units, ["Bold text", "• item one", "Heading\nplain line"]);
}
