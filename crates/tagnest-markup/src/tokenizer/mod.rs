//! Line-oriented tag tokenizer.
//!
//! Each line is scanned independently, so a tag that is split across a line
//! break is never recognized.

/// Raw tag matching shared with the highlighter.
pub mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use scanner::{TagMatch, TagScanner, tag_spans};
pub use token::{TagKind, TagToken};

use crate::lines::lines;

/// Extract the tags on one line, left to right.
///
/// `line_number` is 1-based and is copied into every token. Candidates with
/// no alphanumeric name are dropped.
#[must_use]
pub fn tokenize_line(line: &str, line_number: usize) -> Vec<TagToken> {
    TagScanner::new(line)
        .filter_map(|found| {
            let name = found.name()?;
            let kind = if found.is_closing() {
                TagKind::Closing
            } else if found.is_self_closing() {
                TagKind::SelfClosing
            } else {
                TagKind::Opening
            };
            Some(TagToken::new(name, kind, line_number))
        })
        .collect()
}

/// Tokenizes a whole document, one line at a time.
///
/// Lines are split by [`lines`](crate::lines::lines), so a lone `\r` or a
/// Unicode line separator also starts a new line.
pub struct TagTokenizer<'a> {
    input: &'a str,
    token_stream: Vec<TagToken>,
}

impl<'a> TagTokenizer<'a> {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            token_stream: Vec::new(),
        }
    }

    /// Scan every line and collect the tokens in document order.
    pub fn run(&mut self) {
        self.token_stream.clear();
        for line in lines(self.input) {
            let tokens = tokenize_line(line.text, line.number);
            tracing::trace!(line = line.number, count = tokens.len(), "tokenized line");
            self.token_stream.extend(tokens);
        }
    }

    /// Consume the tokenizer, returning its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<TagToken> {
        self.token_stream
    }
}

/// Tokenize a whole document.
#[must_use]
pub fn tokenize(input: &str) -> Vec<TagToken> {
    let mut tokenizer = TagTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}
