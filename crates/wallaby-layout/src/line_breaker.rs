//! Text line breaking and line box construction.
//!
//! [§ 9.4.2 Inline formatting contexts](https://www.w3.org/TR/CSS2/visuren.html#inline-formatting)
//!
//! "In an inline formatting context, boxes are laid out horizontally, one
//! after the other, beginning at the top of a containing block."
//!
//! [§ 16.6 The 'white-space' property](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
//!
//! "This property declares how white space inside the element is handled."
//!
//! The pipeline is: collapse whitespace (mode permitting), split the
//! resulting text into chunks (words when wrapping, raw lines when not),
//! then greedily fill chunks into line boxes of the container width.

/// Font metrics oracle for text measurement during layout.
///
/// [§ 10.8 Line height calculations](https://www.w3.org/TR/CSS2/visudet.html#line-height)
///
/// "CSS assumes that every font has font metrics that specify a
/// characteristic height above the baseline and a depth below it."
///
/// Implementors provide the per-glyph advance widths and line height used
/// for line breaking and fragment placement.
pub trait FontOracle {
    /// Total advance width of a string.
    fn width(&self, text: &str) -> f32;

    /// Advance width of a single glyph.
    fn glyph_width(&self, c: char) -> f32;

    /// Extra spacing applied after a glyph.
    fn glyph_spacing(&self) -> f32;

    /// Height of a line of text in this font.
    fn glyph_height(&self) -> f32;
}

/// Approximate font metrics using fixed ratios.
///
/// Implementation note: Without access to actual font data, we use fixed
/// ratio approximations. The average advance width of Latin glyphs in a
/// proportional font is approximately 0.6× the font size (typical for
/// Helvetica/Arial body text). Line height uses 1.2×, the upper end of the
/// recommended range for `line-height: normal`.
///
/// This is used as a fallback when no font is available, and in tests.
pub struct ApproximateFont {
    font_size: f32,
}

impl ApproximateFont {
    #[must_use]
    pub const fn new(font_size: f32) -> Self {
        Self { font_size }
    }
}

impl FontOracle for ApproximateFont {
    fn width(&self, text: &str) -> f32 {
        text.chars().map(|c| self.glyph_width(c)).sum()
    }

    fn glyph_width(&self, _c: char) -> f32 {
        const CHAR_WIDTH_RATIO: f32 = 0.6;
        self.font_size * CHAR_WIDTH_RATIO
    }

    fn glyph_spacing(&self) -> f32 {
        0.0
    }

    fn glyph_height(&self) -> f32 {
        const LINE_HEIGHT_RATIO: f32 = 1.2;
        self.font_size * LINE_HEIGHT_RATIO
    }
}

/// [§ 16.6 The 'white-space' property](https://www.w3.org/TR/CSS2/text.html#white-space-prop)
///
/// "Values have the following meanings:
///
/// normal
///   This value directs user agents to collapse sequences of white space,
///   and break lines as necessary to fill line boxes.
///
/// pre
///   This value prevents user agents from collapsing sequences of white
///   space. Lines are only broken at preserved newline characters.
///
/// nowrap
///   This value collapses white space as for 'normal', but suppresses line
///   breaks within text.
///
/// pre-wrap
///   This value prevents user agents from collapsing sequences of white
///   space. Lines are broken at preserved newline characters, and as
///   necessary to fill line boxes.
///
/// pre-line
///   This value directs user agents to collapse sequences of white space.
///   Lines are broken at preserved newline characters, and as necessary to
///   fill line boxes."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhiteSpace {
    /// "collapse sequences of white space, and break lines as necessary"
    #[default]
    Normal,
    /// "collapses white space as for 'normal', but suppresses line breaks"
    Nowrap,
    /// "prevents ... collapsing ... only broken at preserved newline characters"
    Pre,
    /// "collapse sequences of white space ... broken at preserved newlines
    /// and as necessary"
    PreLine,
    /// "prevents ... collapsing ... broken at preserved newlines and as necessary"
    PreWrap,
}

impl WhiteSpace {
    /// Parse a CSS `white-space` keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "normal" => Some(Self::Normal),
            "nowrap" => Some(Self::Nowrap),
            "pre" => Some(Self::Pre),
            "pre-line" => Some(Self::PreLine),
            "pre-wrap" => Some(Self::PreWrap),
            _ => None,
        }
    }

    /// Whether whitespace runs collapse to a single space.
    #[must_use]
    pub const fn collapses(self) -> bool {
        matches!(self, Self::Normal | Self::Nowrap | Self::PreLine)
    }

    /// Whether lines wrap at soft break opportunities to fit the container.
    #[must_use]
    pub const fn wraps_lines(self) -> bool {
        matches!(self, Self::Normal | Self::PreLine | Self::PreWrap)
    }

    /// Whether `\n` is preserved as a forced line break.
    #[must_use]
    pub const fn preserves_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreLine | Self::PreWrap)
    }
}

/// A placed piece of text: a byte range into the laid-out text plus its
/// measured extent.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBoxFragment {
    /// Byte offset of the fragment's text in [`TextLayout::text`].
    pub start: usize,
    /// Byte length of the fragment's text.
    pub length: usize,
    /// Measured advance width.
    pub width: f32,
    /// Line height contributed by the fragment.
    pub height: f32,
}

/// One visual line: the fragments placed on it, left to right.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineBox {
    pub fragments: Vec<LineBoxFragment>,
    width: f32,
}

impl LineBox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupied width of the line so far.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    fn add_fragment(&mut self, fragment: LineBoxFragment) {
        self.width += fragment.width;
        self.fragments.push(fragment);
    }
}

/// The output of line breaking: the post-collapse text and the line boxes
/// whose fragments reference it.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// The text actually laid out (whitespace-collapsed when the mode
    /// collapses). Fragment ranges index into this string.
    pub text: String,
    /// Completed line boxes, top to bottom.
    pub lines: Vec<LineBox>,
}

/// A chunk of text produced by the chunking pass: a word or whitespace run
/// (when wrapping) or a raw line (when not). A `is_break` chunk marks a
/// preserved newline and produces no fragment of its own.
struct Chunk {
    start: usize,
    length: usize,
    is_break: bool,
}

/// Split `raw_text` into line boxes for a container of `container_width`.
///
/// The whitespace mode decides collapsing, soft wrapping, and whether `\n`
/// forces a break (see [`WhiteSpace`]). Fragment ranges index into the
/// returned layout's own `text`, not the raw input.
#[must_use]
pub fn split_into_lines(
    raw_text: &str,
    container_width: f32,
    mode: WhiteSpace,
    font: &dyn FontOracle,
) -> TextLayout {
    let text = text_for_rendering(raw_text, mode);
    let chunks = chunk_text(&text, mode.wraps_lines(), mode.preserves_newlines());

    let space_width = font.glyph_width(' ') + font.glyph_spacing();
    let mut lines = vec![LineBox::new()];
    let mut available_width = container_width;

    for chunk in &chunks {
        // A preserved newline opens a new line and places nothing.
        if chunk.is_break {
            lines.push(LineBox::new());
            available_width = container_width;
            continue;
        }

        let chunk_text = &text[chunk.start..chunk.start + chunk.length];

        let (chunk_width, is_collapsible_space) = if mode.wraps_lines() {
            // After the collapse pass a collapsible whitespace run is
            // exactly one space, costing one space advance.
            let is_space = mode.collapses()
                && chunk_text.chars().next().is_some_and(char::is_whitespace);
            if is_space {
                (space_width, true)
            } else {
                (font.width(chunk_text) + font.glyph_spacing(), false)
            }
        } else {
            (font.width(chunk_text), false)
        };

        if mode.wraps_lines() {
            // A non-leading chunk that exceeds the remaining width opens a
            // new line.
            let line_is_started = lines
                .last()
                .is_some_and(|line| line.width() > 0.0);
            if line_is_started && chunk_width > available_width {
                lines.push(LineBox::new());
                available_width = container_width;
            }
            // Leading collapsible whitespace on a fresh line is discarded.
            if is_collapsible_space
                && lines.last().is_some_and(|line| line.fragments.is_empty())
            {
                continue;
            }
        }

        if let Some(line) = lines.last_mut() {
            line.add_fragment(LineBoxFragment {
                start: chunk.start,
                length: chunk.length,
                width: chunk_width,
                height: font.glyph_height(),
            });
        }
        available_width -= chunk_width;

        // The placed chunk may itself have overflowed a fresh line; later
        // chunks start on the next one.
        if mode.wraps_lines() && available_width < 0.0 {
            lines.push(LineBox::new());
            available_width = container_width;
        }
    }

    // A trailing preserved newline leaves an empty line box behind; it has
    // no visual extent, so drop it.
    if lines.len() > 1 && lines.last().is_some_and(|line| line.fragments.is_empty()) {
        lines.pop();
    }

    TextLayout { text, lines }
}

/// The text a node contributes to layout under the given mode.
///
/// [§ 16.6.1 The 'white-space' processing model](https://www.w3.org/TR/CSS2/text.html#white-space-model)
///
/// All-whitespace text under `normal` contributes a single space. The value
/// is built per call; fragments index into the returned string.
fn text_for_rendering(raw_text: &str, mode: WhiteSpace) -> String {
    if mode == WhiteSpace::Normal && raw_text.chars().all(char::is_whitespace) {
        return String::from(" ");
    }
    if mode.collapses() {
        collapse_whitespace(raw_text, mode.preserves_newlines())
    } else {
        raw_text.to_string()
    }
}

/// Collapse each whitespace run to a single space.
///
/// When newlines are preserved (`pre-line`), a run keeps one `\n` per
/// newline it contained - the forced breaks survive collapsing, the
/// surrounding spaces and tabs do not.
fn collapse_whitespace(raw_text: &str, preserve_newlines: bool) -> String {
    let mut out = String::with_capacity(raw_text.len());
    let mut chars = raw_text.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }
        let mut newlines = usize::from(c == '\n');
        while let Some(&next) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            newlines += usize::from(next == '\n');
            chars.next();
        }
        if preserve_newlines && newlines > 0 {
            for _ in 0..newlines {
                out.push('\n');
            }
        } else {
            out.push(' ');
        }
    }
    out
}

/// Split text into chunks.
///
/// When wrapping, a chunk boundary falls at every whitespace/non-whitespace
/// transition (words and space runs alternate). When newlines are
/// preserved, the newline itself becomes an `is_break` chunk. When neither
/// applies, the whole text is one chunk.
fn chunk_text(text: &str, wrap_lines: bool, wrap_breaks: bool) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let Some(first) = text.chars().next() else {
        return chunks;
    };

    let mut start_of_chunk = 0;
    let mut last_was_space = first.is_whitespace();
    let mut last_was_newline = false;

    let commit = |chunks: &mut Vec<Chunk>, start: &mut usize, end: usize, is_break: bool| {
        let length = end - *start;
        if is_break || length > 0 {
            chunks.push(Chunk {
                start: *start,
                length,
                is_break,
            });
        }
        *start = end;
    };

    for (idx, c) in text.char_indices() {
        if last_was_newline {
            last_was_newline = false;
            commit(&mut chunks, &mut start_of_chunk, idx, true);
        }
        if wrap_breaks && c == '\n' {
            // Commit the text before the newline; the newline itself is
            // committed as a break chunk once we move past it.
            last_was_newline = true;
            commit(&mut chunks, &mut start_of_chunk, idx, false);
        }
        if wrap_lines {
            let is_space = c.is_whitespace();
            if is_space != last_was_space {
                last_was_space = is_space;
                commit(&mut chunks, &mut start_of_chunk, idx, false);
            }
        }
    }
    if last_was_newline {
        commit(&mut chunks, &mut start_of_chunk, text.len(), true);
    }
    if start_of_chunk != text.len() {
        commit(&mut chunks, &mut start_of_chunk, text.len(), false);
    }

    chunks
}
