//! Integration tests for the text line breaker.

use wallaby_layout::{split_into_lines, FontOracle, LineBoxFragment, TextLayout, WhiteSpace};

/// Deterministic metrics for tests: every glyph is 1.0 wide, lines are
/// 10.0 tall, no extra spacing.
struct TestFont;

impl FontOracle for TestFont {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32
    }

    fn glyph_width(&self, _c: char) -> f32 {
        1.0
    }

    fn glyph_spacing(&self) -> f32 {
        0.0
    }

    fn glyph_height(&self) -> f32 {
        10.0
    }
}

fn layout(text: &str, width: f32, mode: WhiteSpace) -> TextLayout {
    split_into_lines(text, width, mode, &TestFont)
}

fn fragment_text<'a>(layout: &'a TextLayout, fragment: &LineBoxFragment) -> &'a str {
    &layout.text[fragment.start..fragment.start + fragment.length]
}

/// The text of each line, with fragments concatenated.
fn line_texts(layout: &TextLayout) -> Vec<String> {
    layout
        .lines
        .iter()
        .map(|line| {
            line.fragments
                .iter()
                .map(|f| fragment_text(layout, f))
                .collect()
        })
        .collect()
}

#[test]
fn test_normal_collapses_whitespace() {
    let layout = layout("a   b\n  c", 100.0, WhiteSpace::Normal);
    assert_eq!(layout.text, "a b c");
    assert_eq!(line_texts(&layout), ["a b c"]);
}

#[test]
fn test_normal_wraps_on_word_boundaries() {
    let layout = layout("aaa bbb ccc", 7.0, WhiteSpace::Normal);
    assert_eq!(line_texts(&layout), ["aaa bbb", "ccc"]);
}

#[test]
fn test_leading_space_on_fresh_line_is_discarded() {
    let layout = layout("aaa bbb ccc", 7.0, WhiteSpace::Normal);
    // The space between "bbb" and "ccc" forced the wrap; it must not
    // reappear at the head of the second line.
    let second = &layout.lines[1];
    assert_eq!(fragment_text(&layout, &second.fragments[0]), "ccc");
}

#[test]
fn test_word_wider_than_container_overflows_alone() {
    let layout = layout("aaaaaaaaaa bb", 4.0, WhiteSpace::Normal);
    // The oversized word is placed on its own (fresh) line and overflows;
    // the following word starts a new line.
    assert_eq!(line_texts(&layout), ["aaaaaaaaaa", "bb"]);
}

#[test]
fn test_space_width_is_one_space_advance() {
    let layout = layout("a   b", 100.0, WhiteSpace::Normal);
    // The collapsed space run costs exactly one glyph advance.
    let space = &layout.lines[0].fragments[1];
    assert_eq!(fragment_text(&layout, space), " ");
    assert!((space.width - 1.0).abs() < f32::EPSILON);
}

#[test]
fn test_nowrap_never_wraps() {
    let layout = layout("aaa bbb ccc", 2.0, WhiteSpace::Nowrap);
    assert_eq!(layout.text, "aaa bbb ccc");
    assert_eq!(line_texts(&layout), ["aaa bbb ccc"]);
}

#[test]
fn test_nowrap_still_collapses() {
    let layout = layout("a \t b", 100.0, WhiteSpace::Nowrap);
    assert_eq!(layout.text, "a b");
}

#[test]
fn test_pre_preserves_whitespace_and_breaks() {
    let layout = layout("a  b\ncc", 1.0, WhiteSpace::Pre);
    // No collapsing, no width wrapping; only the newline breaks.
    assert_eq!(layout.text, "a  b\ncc");
    assert_eq!(line_texts(&layout), ["a  b", "cc"]);
}

#[test]
fn test_pre_line_collapses_but_preserves_breaks() {
    let layout = layout("a   b\n\nc", 100.0, WhiteSpace::PreLine);
    assert_eq!(layout.text, "a b\n\nc");
    // The blank line between the two breaks survives.
    assert_eq!(layout.lines.len(), 3);
    assert!(layout.lines[1].fragments.is_empty());
    assert_eq!(line_texts(&layout), ["a b", "", "c"]);
}

#[test]
fn test_pre_line_wraps_on_width() {
    let layout = layout("aaa bbb\nc", 3.0, WhiteSpace::PreLine);
    assert_eq!(line_texts(&layout), ["aaa", "bbb", "c"]);
}

#[test]
fn test_pre_wrap_preserves_spaces_and_wraps() {
    let layout = layout("aa  bb", 3.0, WhiteSpace::PreWrap);
    // Spaces keep their full width and wrap like any other chunk.
    assert_eq!(layout.text, "aa  bb");
    assert_eq!(line_texts(&layout), ["aa", "  ", "bb"]);
}

#[test]
fn test_pre_wrap_forced_break() {
    let layout = layout("aa\nbb", 100.0, WhiteSpace::PreWrap);
    assert_eq!(line_texts(&layout), ["aa", "bb"]);
}

#[test]
fn test_all_whitespace_normal_contributes_single_space() {
    let layout = layout(" \n\t  ", 100.0, WhiteSpace::Normal);
    // The node's text reduces to one space, which is then discarded as
    // leading whitespace on the (empty) first line.
    assert_eq!(layout.text, " ");
    assert_eq!(layout.lines.len(), 1);
    assert!(layout.lines[0].fragments.is_empty());
}

#[test]
fn test_trailing_newline_leaves_no_empty_line() {
    let layout = layout("ab\n", 100.0, WhiteSpace::Pre);
    assert_eq!(line_texts(&layout), ["ab"]);
}

#[test]
fn test_fragment_ranges_reference_collapsed_text() {
    let layout = layout("x   y", 100.0, WhiteSpace::Normal);
    assert_eq!(layout.text, "x y");
    let fragments = &layout.lines[0].fragments;
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragment_text(&layout, &fragments[0]), "x");
    assert_eq!(fragment_text(&layout, &fragments[1]), " ");
    assert_eq!(fragment_text(&layout, &fragments[2]), "y");
}

#[test]
fn test_fragment_height_comes_from_font() {
    let layout = layout("hi", 100.0, WhiteSpace::Normal);
    assert!((layout.lines[0].fragments[0].height - 10.0).abs() < f32::EPSILON);
}

#[test]
fn test_approximate_font_metrics() {
    use wallaby_layout::ApproximateFont;
    let font = ApproximateFont::new(10.0);
    // 0.6x advance width, 1.2x line height
    assert!((font.glyph_width('a') - 6.0).abs() < f32::EPSILON);
    assert!((font.glyph_height() - 12.0).abs() < f32::EPSILON);
    assert!((font.width("abc") - 18.0).abs() < f32::EPSILON);
}

#[test]
fn test_white_space_keyword_parsing() {
    assert_eq!(WhiteSpace::from_keyword("normal"), Some(WhiteSpace::Normal));
    assert_eq!(WhiteSpace::from_keyword("nowrap"), Some(WhiteSpace::Nowrap));
    assert_eq!(WhiteSpace::from_keyword("pre"), Some(WhiteSpace::Pre));
    assert_eq!(WhiteSpace::from_keyword("pre-line"), Some(WhiteSpace::PreLine));
    assert_eq!(WhiteSpace::from_keyword("pre-wrap"), Some(WhiteSpace::PreWrap));
    assert_eq!(WhiteSpace::from_keyword("inherit"), None);
}

#[test]
fn test_white_space_mode_flags() {
    assert!(WhiteSpace::Normal.collapses());
    assert!(WhiteSpace::Normal.wraps_lines());
    assert!(!WhiteSpace::Normal.preserves_newlines());

    assert!(WhiteSpace::Nowrap.collapses());
    assert!(!WhiteSpace::Nowrap.wraps_lines());

    assert!(!WhiteSpace::Pre.collapses());
    assert!(!WhiteSpace::Pre.wraps_lines());
    assert!(WhiteSpace::Pre.preserves_newlines());

    assert!(WhiteSpace::PreLine.collapses());
    assert!(WhiteSpace::PreLine.wraps_lines());
    assert!(WhiteSpace::PreLine.preserves_newlines());

    assert!(!WhiteSpace::PreWrap.collapses());
    assert!(WhiteSpace::PreWrap.wraps_lines());
    assert!(WhiteSpace::PreWrap.preserves_newlines());
}
