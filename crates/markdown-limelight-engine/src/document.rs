use xi_rope::Rope;

/// Read-only, line-addressable view of a Markdown buffer.
///
/// Line text excludes the trailing newline. All column offsets reported by
/// the scanner are byte offsets into these line strings.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Materializes per-line strings from the host buffer's rope.
    ///
    /// Uses `lines_raw` so CRLF endings are handled without shifting line
    /// boundaries; the terminators themselves are stripped.
    pub fn from_rope(rope: &Rope) -> Self {
        let lines = rope
            .lines_raw(..)
            .map(|line| line.trim_end_matches(['\r', '\n']).to_string())
            .collect();
        Self { lines }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of the line at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` is out of range; use [`Document::get`] for lookahead.
    #[must_use]
    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::from_rope(&Rope::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_without_terminators() {
        let doc = Document::from("alpha\nbeta\ngamma");
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line(0), "alpha");
        assert_eq!(doc.line(2), "gamma");
    }

    #[test]
    fn strips_crlf() {
        let doc = Document::from("alpha\r\nbeta\r\n");
        assert_eq!(doc.line(0), "alpha");
        assert_eq!(doc.line(1), "beta");
    }

    #[test]
    fn empty_buffer_has_no_lines() {
        let doc = Document::from("");
        assert_eq!(doc.line_count(), 0);
        assert_eq!(doc.get(0), None);
    }
}
