use serde::Serialize;

/// A decorated span: inclusive start, exclusive end, byte-offset columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Range {
    #[must_use]
    pub fn new(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Span within a single line.
    #[must_use]
    pub fn on_line(line: usize, start_col: usize, end_col: usize) -> Self {
        Self::new(line, start_col, line, end_col)
    }
}

/// One entry of the cursor's ancestor heading chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveHeading {
    pub level: u8,
    pub range: Range,
}

/// Everything one scan produces, one list per decoration category.
///
/// Lists are in ascending document order. A disabled feature yields an
/// empty list even when the construct occurs in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecorationSet {
    pub fenced_code: Vec<Range>,
    pub indented_code: Vec<Range>,
    pub inline_code: Vec<Range>,
    pub quote_text: Vec<Range>,
    pub quote_markers: Vec<Range>,
    pub thematic_breaks: Vec<Range>,
    pub strikethrough: Vec<Range>,
    pub hard_breaks: Vec<Range>,
    pub active_headings: Vec<ActiveHeading>,
    pub setext_h1: Vec<Range>,
    pub setext_h2: Vec<Range>,
}
