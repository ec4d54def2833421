use std::sync::OnceLock;

use regex::Regex;

pub struct ThematicBreak;

impl ThematicBreak {
    /// 0–3 leading spaces, then 3+ of one of `*` `-` `_`, then only
    /// trailing whitespace.
    ///
    /// The scanner must try Setext detection before this for `-` runs: a
    /// dash line directly under plain text is a level-2 underline, not a
    /// break.
    pub fn matches(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^ {0,3}(?:\*{3,}|-{3,}|_{3,})\s*$").expect("thematic break pattern")
        })
        .is_match(line)
    }
}
