//! Raw tag matching.
//!
//! The tag grammar is: `<`, an optional `/`, one or more ASCII alphanumerics,
//! any run of characters other than `>`, then `>`. Matches never overlap and
//! are found left to right.
//!
//! The scanner works on bytes. Every delimiter it looks for is ASCII, so every
//! index it slices at is a char boundary.

use core::ops::Range;

/// A substring matching the tag grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// The matched text, from `<` to `>` inclusive.
    pub text: &'a str,
    /// Byte offset of the `<` in the scanned input.
    pub start: usize,
    /// Byte offset one past the `>`.
    pub end: usize,
    /// Byte offsets of the alphanumeric run following `<` or `</`.
    name_start: usize,
    name_end: usize,
}

impl<'a> TagMatch<'a> {
    /// Byte span of the match in the scanned input.
    #[must_use]
    pub const fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The tag name: the first maximal run of ASCII alphanumerics in the match.
    ///
    /// Attributes, namespaces and hyphenated suffixes are not part of the
    /// name, so `<svg:rect>` is named `svg` and `<my-tag>` is named `my`.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        let name = &self.text[self.name_start - self.start..self.name_end - self.start];
        (!name.is_empty()).then_some(name)
    }

    /// Returns true if the match starts with `</`.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.text.starts_with("</")
    }

    /// Returns true if the match ends with `/>`.
    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.text.ends_with("/>")
    }
}

/// Iterator over every [`TagMatch`] in a string.
///
/// The tokenizer feeds it one line at a time. The highlighter feeds it the
/// whole document, where the attribute run may cross line breaks.
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    /// Create a scanner positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Try to match the grammar at byte offset `start`, which holds a `<`.
    fn match_at(&self, start: usize) -> Option<TagMatch<'a>> {
        let bytes = self.input.as_bytes();
        let mut cursor = start + 1;
        if bytes.get(cursor) == Some(&b'/') {
            cursor += 1;
        }

        let name_start = cursor;
        while bytes.get(cursor).is_some_and(u8::is_ascii_alphanumeric) {
            cursor += 1;
        }
        if cursor == name_start {
            return None;
        }
        let name_end = cursor;

        let close = cursor + bytes[cursor..].iter().position(|&b| b == b'>')?;
        let end = close + 1;
        Some(TagMatch {
            text: &self.input[start..end],
            start,
            end,
            name_start,
            name_end,
        })
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let offset = bytes[self.pos..].iter().position(|&b| b == b'<')?;
            let start = self.pos + offset;
            if let Some(found) = self.match_at(start) {
                self.pos = found.end;
                return Some(found);
            }
            self.pos = start + 1;
        }
        None
    }
}

/// Byte spans of every tag in `input`.
#[must_use]
pub fn tag_spans(input: &str) -> Vec<Range<usize>> {
    TagScanner::new(input).map(|m| m.span()).collect()
}
