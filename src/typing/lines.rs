use std::ops::Range;

/// Target text broken into display rows, with the scroll position that
/// keeps the cursor's row second from the top once past the first row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineLayout {
    rows: Vec<Range<usize>>,
}

impl LineLayout {
    /// Word-wraps `text` into rows of at most `width` visible characters.
    /// A row keeps the space that ended its last word. Words longer than
    /// `width` are split.
    pub fn wrap(text: &str, width: usize) -> Self {
        let width = width.max(1);
        let chars: Vec<char> = text.chars().collect();
        let mut rows = Vec::new();
        let mut row_start = 0;
        let mut i = 0;

        while i < chars.len() {
            let word_start = i;
            while i < chars.len() && chars[i] != ' ' {
                i += 1;
            }
            let word_end = i;
            while i < chars.len() && chars[i] == ' ' {
                i += 1;
            }

            if word_end - row_start > width && word_start > row_start {
                rows.push(row_start..word_start);
                row_start = word_start;
            }
            while word_end - row_start > width {
                rows.push(row_start..row_start + width);
                row_start += width;
            }
        }
        if row_start < chars.len() {
            rows.push(row_start..chars.len());
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Range<usize>] {
        &self.rows
    }

    /// Row holding character `cursor`. A cursor past the end sits on the last row.
    pub fn row_of(&self, cursor: usize) -> usize {
        self.rows
            .partition_point(|r| r.end <= cursor)
            .min(self.rows.len().saturating_sub(1))
    }

    pub fn scroll_offset(&self, cursor: usize) -> usize {
        self.row_of(cursor).saturating_sub(1)
    }

    /// Up to `count` rows starting at the scroll offset for `cursor`.
    pub fn visible_rows(&self, cursor: usize, count: usize) -> &[Range<usize>] {
        let start = self.scroll_offset(cursor).min(self.rows.len());
        let end = (start + count).min(self.rows.len());
        &self.rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = LineLayout::wrap("the quick brown fox", 10);
        assert_eq!(lines.rows(), &[0..10, 10..19]);
    }

    #[test]
    fn splits_overlong_words() {
        let lines = LineLayout::wrap("abcdefgh ij", 3);
        assert_eq!(lines.rows(), &[0..3, 3..6, 6..9, 9..11]);
    }

    #[test]
    fn empty_text_has_no_rows() {
        let lines = LineLayout::wrap("", 10);
        assert!(lines.rows().is_empty());
        assert_eq!(lines.row_of(0), 0);
        assert!(lines.visible_rows(0, 3).is_empty());
    }

    #[rstest]
    #[case(0, 0)]
    #[case(5, 0)]
    #[case(10, 0)]
    #[case(20, 1)]
    #[case(25, 1)]
    #[case(30, 2)]
    #[case(99, 2)]
    fn cursor_row_stays_second(#[case] cursor: usize, #[case] offset: usize) {
        // four rows of "aaaa bbbb " style text
        let lines = LineLayout::wrap("aaaa bbbb cccc dddd eeee ffff gggg hhhh", 10);
        assert_eq!(lines.rows().len(), 4);
        assert_eq!(lines.scroll_offset(cursor), offset);
    }

    #[test]
    fn visible_window_is_clamped() {
        let lines = LineLayout::wrap("aaaa bbbb cccc dddd eeee ffff gggg hhhh", 10);
        assert_eq!(lines.visible_rows(35, 3), &[20..30, 30..39]);
        assert_eq!(lines.visible_rows(0, 3).len(), 3);
    }
}
