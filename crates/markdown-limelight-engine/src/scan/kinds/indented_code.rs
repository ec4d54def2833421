pub struct IndentedCode;

impl IndentedCode {
    /// A code-level indent: four spaces, or any run of spaces ending in a
    /// tab. Whether such a line actually opens an indented code block
    /// depends on the previous logical line's zone; the scanner owns that
    /// decision.
    pub fn indent(line: &str) -> bool {
        let b = line.as_bytes();
        let mut i = 0;
        while i < b.len() && b[i] == b' ' {
            i += 1;
        }
        i >= 4 || b.get(i) == Some(&b'\t')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_spaces_is_indented() {
        assert!(IndentedCode::indent("    code"));
    }

    #[test]
    fn spaces_then_tab_is_indented() {
        assert!(IndentedCode::indent("  \tcode"));
        assert!(IndentedCode::indent("\tcode"));
    }

    #[test]
    fn shallow_indent_is_not() {
        assert!(!IndentedCode::indent("   code"));
        assert!(!IndentedCode::indent("code"));
        assert!(!IndentedCode::indent(""));
    }
}
