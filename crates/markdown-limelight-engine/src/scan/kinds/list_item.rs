use std::sync::OnceLock;

use regex::Regex;

pub struct ListItem;

impl ListItem {
    /// Bullet or ordinal item: up to 2 leading spaces, `-`/`*`/`+` or
    /// `digits.`, required whitespace, non-blank content.
    pub fn opens(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^ {0,2}(?:[-*+]|[0-9]+\.)\s+\S").expect("list item pattern"))
            .is_match(line)
    }

    /// Indented continuation of a list paragraph: 2+ spaces, or any run of
    /// spaces ending in a tab.
    pub fn continues(line: &str) -> bool {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(?: {2,}| *\t)").expect("list continuation pattern"))
            .is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_and_ordinals_open_items() {
        assert!(ListItem::opens("- item"));
        assert!(ListItem::opens("* item"));
        assert!(ListItem::opens("+ item"));
        assert!(ListItem::opens("12. item"));
        assert!(ListItem::opens("  - nested"));
    }

    #[test]
    fn markers_need_content_and_shallow_indent() {
        assert!(!ListItem::opens("-"));
        assert!(!ListItem::opens("- "));
        assert!(!ListItem::opens("   - too deep"));
        assert!(!ListItem::opens("-item"));
    }

    #[test]
    fn continuation_indents() {
        assert!(ListItem::continues("  text"));
        assert!(ListItem::continues("    text"));
        assert!(ListItem::continues("\ttext"));
        assert!(ListItem::continues(" \ttext"));
        assert!(!ListItem::continues(" text"));
        assert!(!ListItem::continues("text"));
    }
}
