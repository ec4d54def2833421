use super::kinds::list_item::ListItem;

/// Block-level classification of the previous logical line.
///
/// The scanner keeps exactly one of these as lookbehind state. Multi-line
/// blocks are consumed atomically, so "previous" means previous *logical*
/// line: the line after a fenced block sees `FencedCode`, never the last
/// code line's own shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    StartOfDoc,
    FencedCode,
    IndentedCode,
    Heading,
    ThematicBreak,
    List,
    /// Continuation text inside a list item's paragraph.
    ListParagraph,
    /// Blank line separating two list paragraphs; list state survives it.
    ListBlank,
    Blank,
    Text,
    Quote,
}

impl LineKind {
    /// List state in any form: item line, continuation paragraph, or the
    /// blank between two list paragraphs.
    pub fn in_list(self) -> bool {
        matches!(self, Self::List | Self::ListParagraph | Self::ListBlank)
    }

    /// Whether an indented line directly after this one opens an indented
    /// code block. List zones never admit one; neither do quotes or plain
    /// text, where indentation is just a continuation.
    pub fn admits_indented_code(self) -> bool {
        matches!(
            self,
            Self::StartOfDoc | Self::Blank | Self::Heading | Self::FencedCode | Self::ThematicBreak
        )
    }
}

/// Follow-state for a line that opened no block and carried no quote or
/// heading.
///
/// Inside list state, a blank drops to `ListBlank` rather than `Blank`; a
/// non-indented line after that blank finally leaves the list, while any
/// other non-item line continues the item's paragraph lazily.
pub fn plain_line_kind(prev: LineKind, text: &str) -> LineKind {
    let blank = text.trim().is_empty();
    if prev.in_list() {
        if blank {
            LineKind::ListBlank
        } else if ListItem::opens(text) {
            LineKind::List
        } else if ListItem::continues(text) {
            LineKind::ListParagraph
        } else if prev == LineKind::ListBlank {
            LineKind::Text
        } else {
            LineKind::ListParagraph
        }
    } else if blank {
        LineKind::Blank
    } else if ListItem::opens(text) {
        LineKind::List
    } else {
        LineKind::Text
    }
}
