use std::sync::OnceLock;

use regex::Regex;

/// A detected heading, ATX or Setext, with the byte span of its visible
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    /// 1–6 for ATX; Setext underlines reach only 1 (`=`) and 2 (`-`).
    pub level: u8,
    /// Line holding the visible heading text.
    pub line: usize,
    pub start_col: usize,
    pub end_col: usize,
    /// Last physical line of the construct: the underline for Setext,
    /// `line` itself for ATX. The scanner resumes after this line.
    pub end_line: usize,
    pub setext: bool,
}

fn atx_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^( {0,3})((#{1,6}) .*\S)\s*").expect("atx heading pattern"))
}

fn underline_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ {0,3}(={3,}|-{3,})\s*$").expect("setext underline pattern"))
}

/// Detects a heading whose text sits on `line`.
///
/// ATX is tried first; otherwise any non-blank line followed by a Setext
/// underline becomes a heading. This is also what gives Setext priority
/// over the thematic-break reading of a dash line: the underline is
/// consumed here, as part of the heading, before the scanner ever
/// classifies it on its own.
pub fn detect(text: &str, line: usize, next_line: Option<&str>) -> Option<Heading> {
    if text.trim().is_empty() {
        return None;
    }
    if let Some(caps) = atx_re().captures(text) {
        let indent = caps[1].len();
        let visible = strip_closing_sequence(&caps[2]);
        return Some(Heading {
            level: caps[3].len() as u8,
            line,
            start_col: indent,
            end_col: indent + visible.len(),
            end_line: line,
            setext: false,
        });
    }
    let underline = next_line?;
    let caps = underline_re().captures(underline)?;
    let level = if caps[1].starts_with('=') { 1 } else { 2 };
    Some(Heading {
        level,
        line,
        start_col: text.len() - text.trim_start().len(),
        end_col: text.trim_end().len(),
        end_line: line + 1,
        setext: true,
    })
}

/// Drops an ATX closing sequence: a trailing `#` run preceded by a space or
/// tab, plus the whitespace before it. A run glued to the text stays.
fn strip_closing_sequence(visible: &str) -> &str {
    let without_hashes = visible.trim_end_matches('#');
    if without_hashes.len() == visible.len() {
        return visible;
    }
    let before = without_hashes.trim_end_matches([' ', '\t']);
    if before.len() < without_hashes.len() {
        before
    } else {
        visible
    }
}
