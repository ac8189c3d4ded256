//! Line splitting and blank-input detection.
//!
//! A line ends at `\n`, `\r\n`, a lone `\r`, or one of the other Unicode line
//! boundaries: vertical tab, form feed, the file/group/record separators
//! (`\x1c`..=`\x1e`), NEL (`\u{85}`), LINE SEPARATOR and PARAGRAPH SEPARATOR.
//! A trailing boundary does not start an extra empty line, and empty input
//! has no lines at all.

use core::iter::FusedIterator;
use core::ops::Range;

/// Returns true if `c` ends a line.
#[must_use]
pub const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Returns true if `c` counts as blank when deciding whether input is empty.
///
/// This is Unicode `White_Space` plus the ASCII information separators
/// `\x1c`..=`\x1f`.
#[must_use]
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Returns true if `text` is empty or made only of blank characters.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

/// One line of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without its terminator.
    pub text: &'a str,
    /// Byte offset of the content in the document.
    pub start: usize,
    /// Byte offset one past the terminator (or the end of the document).
    pub end: usize,
}

impl Line<'_> {
    /// Byte span of the content, excluding the terminator.
    #[must_use]
    pub const fn content(&self) -> Range<usize> {
        self.start..self.start + self.text.len()
    }
}

/// Iterator over the [`Line`]s of a document.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    input: &'a str,
    pos: usize,
    number: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        let start = self.pos;
        let rest = self.input.get(start..).filter(|rest| !rest.is_empty())?;

        let (content_len, full_len) = match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((at, '\r')) if rest[at + 1..].starts_with('\n') => (at, at + 2),
            Some((at, c)) => (at, at + c.len_utf8()),
            None => (rest.len(), rest.len()),
        };

        self.pos = start + full_len;
        self.number += 1;
        Some(Line {
            number: self.number,
            text: &rest[..content_len],
            start,
            end: self.pos,
        })
    }
}

impl FusedIterator for Lines<'_> {}

/// Split `input` into lines.
#[must_use]
pub const fn lines(input: &str) -> Lines<'_> {
    Lines {
        input,
        pos: 0,
        number: 0,
    }
}
