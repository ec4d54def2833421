//! Sub-line extraction: inline code spans, strikethrough runs, and
//! trailing-double-space hard breaks.
//!
//! Only runs on lines the block scanner did not consume as code, and code
//! spans are raw zones: their bytes are masked before the strikethrough
//! pass so `~~` inside backticks never opens or closes a run.

use std::sync::OnceLock;

use regex::Regex;

/// The backtick delimiting inline code spans.
const TICK: u8 = b'`';

/// Byte spans found on one plain, quote, or heading line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineSpans {
    /// Interior of each code span, backticks excluded.
    pub code: Vec<(usize, usize)>,
    /// Full extent of each strikethrough run, `~~` markers included.
    pub strikethrough: Vec<(usize, usize)>,
}

pub fn scan_line(text: &str) -> InlineSpans {
    let mut spans = InlineSpans::default();
    let wants_strike = text.contains("~~");
    let mut masked: Option<Vec<u8>> = wants_strike.then(|| text.as_bytes().to_vec());

    let b = text.as_bytes();
    let mut i = 0;
    while let Some(open) = find_byte(b, TICK, i) {
        let Some(close) = find_byte(b, TICK, open + 1) else {
            // unmatched opener never closes, even across lines
            break;
        };
        spans.code.push((open + 1, close));
        if let Some(m) = masked.as_mut() {
            for byte in &mut m[open..=close] {
                *byte = b'X';
            }
        }
        i = close + 1;
    }

    if let Some(m) = masked {
        strikethrough_runs(&m, &mut spans.strikethrough);
    }
    spans
}

fn find_byte(haystack: &[u8], needle: u8, from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|p| from + p)
}

/// Matched `~~` pairs, GitHub-style: an opener is not preceded by `~` and
/// is followed by non-whitespace that isn't `~`; a closer is preceded by
/// non-whitespace that isn't `~` and not followed by `~`. Runs never nest;
/// scanning resumes after each closer.
fn strikethrough_runs(b: &[u8], out: &mut Vec<(usize, usize)>) {
    let mut i = 0;
    while i + 2 < b.len() {
        let opens = b[i] == b'~'
            && b[i + 1] == b'~'
            && (i == 0 || b[i - 1] != b'~')
            && b[i + 2] != b'~'
            && !b[i + 2].is_ascii_whitespace();
        if !opens {
            i += 1;
            continue;
        }
        match closing_marker(b, i + 2) {
            Some(close) => {
                out.push((i, close + 2));
                i = close + 2;
            }
            None => break,
        }
    }
}

fn closing_marker(b: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j + 2 <= b.len() {
        if b[j] == b'~'
            && b[j + 1] == b'~'
            && b[j - 1] != b'~'
            && !b[j - 1].is_ascii_whitespace()
            && (j + 2 == b.len() || b[j + 2] != b'~')
        {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// Trailing-double-whitespace hard line break on an otherwise plain line.
///
/// Suppressed on anything matching the non-plain shapes below; the block
/// scanner additionally never calls this for headings, fences, code
/// blocks, or thematic breaks it consumed itself.
pub fn hard_break(text: &str) -> Option<(usize, usize)> {
    if text.trim().is_empty() {
        return None;
    }
    let mut rev = text.char_indices().rev();
    let (_, last) = rev.next()?;
    let (prev_idx, prev) = rev.next()?;
    if !last.is_whitespace() || !prev.is_whitespace() {
        return None;
    }
    if non_plain_line(text) {
        return None;
    }
    Some((prev_idx, text.len()))
}

/// Heading-, underline-, code-, rule-, and table-shaped lines that a
/// trailing double space must not decorate.
fn non_plain_line(text: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(?:#{1,6} .*|={2,}|-{2,}|\s{4}.*|\t.*|\*{3,}|_{3,}|\|.*\|)\s*$")
            .expect("non-plain line pattern")
    })
    .is_match(text)
}
