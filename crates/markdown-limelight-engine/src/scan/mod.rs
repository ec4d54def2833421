//! The single-pass block scanner.
//!
//! One forward pass classifies every line and extracts decoration ranges.
//! Blocks that span lines (fenced code, indented code, Setext heading
//! pairs) are consumed atomically, so their interior lines are never
//! reinterpreted: a `#` line inside an open fence is code, not a heading.
//! Everything else flows through the inline extractor and the
//! quote/heading/list checks, in that priority order.

pub mod inline;
pub mod kinds;
pub mod outline;
pub mod zone;

use tracing::{debug, trace};

use crate::cancel::CancelFlag;
use crate::document::Document;
use crate::features::FeatureToggles;
use crate::ranges::{DecorationSet, Range};

use kinds::block_quote::BlockQuote;
use kinds::code_fence::{CodeFence, FenceMarker};
use kinds::heading::{self, Heading};
use kinds::indented_code::IndentedCode;
use kinds::thematic_break::ThematicBreak;
use zone::LineKind;

/// Raw detection results, collected before feature toggles are applied.
///
/// Headings are kept as records rather than ranges: they feed the
/// active-heading chain, the Setext ranges, and nothing else directly.
#[derive(Debug, Default)]
struct Harvest {
    fenced_code: Vec<Range>,
    indented_code: Vec<Range>,
    inline_code: Vec<Range>,
    quote_text: Vec<Range>,
    quote_markers: Vec<Range>,
    thematic_breaks: Vec<Range>,
    strikethrough: Vec<Range>,
    hard_breaks: Vec<Range>,
    headings: Vec<Heading>,
}

/// Classifies every line of `doc` and extracts decoration ranges.
///
/// Pure in its inputs: equal `(doc, cursor_line, toggles)` yield equal
/// output. Returns `None` when `cancel` fires mid-scan; partial results
/// are discarded, never returned.
pub fn scan(
    doc: &Document,
    cursor_line: Option<usize>,
    toggles: &FeatureToggles,
    cancel: &CancelFlag,
) -> Option<DecorationSet> {
    let mut harvest = Harvest::default();
    let mut prev = LineKind::StartOfDoc;
    let mut idx = 0;

    while idx < doc.line_count() && !cancel.is_cancelled() {
        let text = doc.line(idx);

        if let Some(marker) = CodeFence::open(text) {
            idx = fenced_block(doc, idx, marker, &mut harvest, cancel);
            prev = LineKind::FencedCode;
        } else if IndentedCode::indent(text) && prev.admits_indented_code() {
            idx = indented_block(doc, idx, &mut harvest, cancel);
            prev = LineKind::IndentedCode;
        } else if ThematicBreak::matches(text) {
            harvest.thematic_breaks.push(Range::on_line(idx, 0, text.len()));
            prev = LineKind::ThematicBreak;
        } else {
            let spans = inline::scan_line(text);
            harvest
                .inline_code
                .extend(spans.code.iter().map(|&(s, e)| Range::on_line(idx, s, e)));
            harvest
                .strikethrough
                .extend(spans.strikethrough.iter().map(|&(s, e)| Range::on_line(idx, s, e)));

            if let Some(prefix) = BlockQuote::split(text, prev.in_list()) {
                for &col in &prefix.markers {
                    harvest.quote_markers.push(Range::on_line(idx, col, col + 1));
                }
                harvest
                    .quote_text
                    .push(Range::on_line(idx, prefix.text_start, text.len()));
                push_hard_break(&mut harvest, idx, text);
                prev = if prev.in_list() {
                    LineKind::ListParagraph
                } else {
                    LineKind::Quote
                };
            } else if prev == LineKind::Quote && !text.trim().is_empty() {
                // lazy continuation: the whole unmarked line is quote text
                harvest.quote_text.push(Range::on_line(idx, 0, text.len()));
                push_hard_break(&mut harvest, idx, text);
                prev = LineKind::Quote;
            } else if let Some(found) = heading::detect(text, idx, doc.get(idx + 1)) {
                idx = found.end_line;
                harvest.headings.push(found);
                prev = LineKind::Heading;
            } else {
                push_hard_break(&mut harvest, idx, text);
                prev = zone::plain_line_kind(prev, text);
            }
        }

        idx += 1;
    }

    if cancel.is_cancelled() {
        debug!(line = idx, "scan cancelled, discarding partial ranges");
        return None;
    }

    trace!(
        lines = doc.line_count(),
        headings = harvest.headings.len(),
        "scan complete"
    );
    Some(assemble(harvest, cursor_line, toggles))
}

fn push_hard_break(harvest: &mut Harvest, idx: usize, text: &str) {
    if let Some((start, end)) = inline::hard_break(text) {
        harvest.hard_breaks.push(Range::on_line(idx, start, end));
    }
}

/// Consumes a fenced block from its opening line. Emits the interior range
/// (empty blocks emit nothing) and returns the index of the closing fence,
/// or `line_count` when the block runs unterminated to the end.
fn fenced_block(
    doc: &Document,
    open_idx: usize,
    marker: FenceMarker,
    harvest: &mut Harvest,
    cancel: &CancelFlag,
) -> usize {
    let mut end = open_idx + 1;
    while end < doc.line_count() && !CodeFence::closes(marker, doc.line(end)) {
        if cancel.is_cancelled() {
            return end;
        }
        end += 1;
    }
    if open_idx + 1 < end {
        let last = end - 1;
        harvest
            .fenced_code
            .push(Range::new(open_idx + 1, 0, last, doc.line(last).len()));
    }
    end
}

/// Consumes an indented code run starting at `start_idx`.
///
/// Blank lines inside the run are bridged; the range still ends at the
/// last indented line. Returns the index *before* the terminating
/// non-blank, non-indented line so the scanner re-examines it next
/// iteration (or `line_count` when the run reaches the end).
fn indented_block(
    doc: &Document,
    start_idx: usize,
    harvest: &mut Harvest,
    cancel: &CancelFlag,
) -> usize {
    let mut last_indented = start_idx;
    let mut cur = start_idx;
    loop {
        cur += 1;
        if cur >= doc.line_count() || cancel.is_cancelled() {
            break;
        }
        let text = doc.line(cur);
        if IndentedCode::indent(text) {
            last_indented = cur;
        } else if !text.trim().is_empty() {
            cur -= 1;
            break;
        }
    }
    harvest.indented_code.push(Range::new(
        start_idx,
        0,
        last_indented,
        doc.line(last_indented).len(),
    ));
    cur
}

fn assemble(harvest: Harvest, cursor_line: Option<usize>, toggles: &FeatureToggles) -> DecorationSet {
    let active = outline::active_headings(&harvest.headings, cursor_line);
    let (setext_h1, setext_h2) = setext_ranges(&harvest.headings);

    fn pick<T>(enabled: bool, found: Vec<T>) -> Vec<T> {
        if enabled { found } else { Vec::new() }
    }

    DecorationSet {
        fenced_code: pick(toggles.fenced_code, harvest.fenced_code),
        indented_code: pick(toggles.indented_code, harvest.indented_code),
        inline_code: pick(toggles.inline_code, harvest.inline_code),
        quote_text: pick(toggles.quote_text, harvest.quote_text),
        quote_markers: pick(toggles.quote_markers, harvest.quote_markers),
        thematic_breaks: pick(toggles.thematic_breaks, harvest.thematic_breaks),
        strikethrough: pick(toggles.strikethrough, harvest.strikethrough),
        hard_breaks: pick(toggles.hard_breaks, harvest.hard_breaks),
        active_headings: pick(toggles.active_headings, active),
        setext_h1: pick(toggles.setext_h1, setext_h1),
        setext_h2: pick(toggles.setext_h2, setext_h2),
    }
}

fn setext_ranges(headings: &[Heading]) -> (Vec<Range>, Vec<Range>) {
    let mut h1 = Vec::new();
    let mut h2 = Vec::new();
    for heading in headings.iter().filter(|h| h.setext) {
        let range = Range::on_line(heading.line, heading.start_col, heading.end_col);
        match heading.level {
            1 => h1.push(range),
            _ => h2.push(range),
        }
    }
    (h1, h2)
}
