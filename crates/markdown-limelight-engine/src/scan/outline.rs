use crate::ranges::{ActiveHeading, Range};

use super::kinds::heading::Heading;

/// Ancestor chain of headings above a cursor line.
///
/// Entries run outermost to innermost with strictly increasing levels.
/// Pushing a heading first pops every entry at the same or a deeper
/// level, so a sibling replaces its predecessor and children never
/// outlive a new parent. The heading occupying the cursor line itself
/// still pops (it closes its siblings' sections) but is not pushed:
/// only strict ancestors are reported.
#[derive(Debug, Default)]
pub struct ActiveHeadingStack {
    entries: Vec<ActiveHeading>,
}

impl ActiveHeadingStack {
    pub fn observe(&mut self, heading: &Heading, cursor_line: usize) {
        if heading.line > cursor_line {
            return;
        }
        self.pop_while_level_at_least(heading.level);
        if heading.line < cursor_line {
            self.entries.push(ActiveHeading {
                level: heading.level,
                range: Range::on_line(heading.line, heading.start_col, heading.end_col),
            });
        }
    }

    fn pop_while_level_at_least(&mut self, level: u8) {
        while self.entries.last().is_some_and(|top| top.level >= level) {
            self.entries.pop();
        }
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<ActiveHeading> {
        self.entries
    }
}

/// Folds the scan's heading list into the ancestor chain for
/// `cursor_line`. No cursor, no chain.
pub fn active_headings(headings: &[Heading], cursor_line: Option<usize>) -> Vec<ActiveHeading> {
    let Some(cursor) = cursor_line else {
        return Vec::new();
    };
    let mut stack = ActiveHeadingStack::default();
    for heading in headings {
        stack.observe(heading, cursor);
    }
    stack.into_entries()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn atx(level: u8, line: usize, end_col: usize) -> Heading {
        Heading {
            level,
            line,
            start_col: 0,
            end_col,
            end_line: line,
            setext: false,
        }
    }

    #[test]
    fn sibling_replaces_sibling() {
        let headings = [atx(1, 0, 11), atx(2, 2, 13), atx(2, 4, 13)];
        let chain = active_headings(&headings, Some(6));
        assert_eq!(
            chain.iter().map(|h| (h.level, h.range.start_line)).collect::<Vec<_>>(),
            vec![(1, 0), (2, 4)]
        );
    }

    #[test]
    fn deeper_heading_pops_everything_at_or_below_its_level() {
        let headings = [atx(1, 0, 11), atx(3, 2, 13), atx(2, 4, 12)];
        let chain = active_headings(&headings, Some(6));
        assert_eq!(
            chain.iter().map(|h| (h.level, h.range.start_line)).collect::<Vec<_>>(),
            vec![(1, 0), (2, 4)]
        );
    }

    #[test]
    fn heading_on_the_cursor_line_is_excluded_but_still_pops() {
        let headings = [atx(1, 0, 11), atx(2, 2, 12), atx(3, 4, 13)];
        let chain = active_headings(&headings, Some(4));
        assert_eq!(
            chain.iter().map(|h| h.level).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn levels_strictly_increase_outermost_to_innermost() {
        let headings = [
            atx(2, 0, 10),
            atx(1, 2, 10),
            atx(4, 4, 10),
            atx(3, 6, 10),
            atx(4, 8, 10),
        ];
        let chain = active_headings(&headings, Some(10));
        let levels: Vec<u8> = chain.iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 3, 4]);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn no_cursor_no_chain() {
        let headings = [atx(1, 0, 11)];
        assert_eq!(active_headings(&headings, None), vec![]);
    }

    #[test]
    fn headings_after_the_cursor_are_ignored() {
        let headings = [atx(1, 0, 11), atx(2, 8, 12)];
        let chain = active_headings(&headings, Some(3));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].level, 1);
    }
}
