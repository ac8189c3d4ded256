use std::collections::BTreeSet;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use super::diagnostic::Diagnostic;
use crate::lines::is_blank;
use crate::tokenizer::{TagKind, TagToken, tokenize};

/// An element waiting on the stack for its closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    /// Tag name.
    pub name: String,
    /// Number of entries below this one when it was pushed.
    pub depth: usize,
    /// Line of the opening tag.
    pub line: usize,
}

/// One completed element in the nesting view.
///
/// Entries are appended in completion order: an element appears when its
/// closing tag matches, immediately if it is self-closing, or during the final
/// drain if it was never closed. Children therefore precede their parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TreeEntry {
    /// Tag name.
    pub name: String,
    /// Number of open ancestors when the element was opened.
    pub depth: usize,
    /// Line of the opening (or self-closing) tag.
    pub line: usize,
}

impl TreeEntry {
    /// Create a new tree entry.
    #[must_use]
    pub fn new(name: impl Into<String>, depth: usize, line: usize) -> Self {
        Self {
            name: name.into(),
            depth,
            line,
        }
    }
}

impl From<StackEntry> for TreeEntry {
    fn from(entry: StackEntry) -> Self {
        Self {
            name: entry.name,
            depth: entry.depth,
            line: entry.line,
        }
    }
}

/// Everything a validation pass produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Diagnostics in the order they were found.
    pub errors: Vec<Diagnostic>,
    /// Completed elements in completion order.
    pub tree: Vec<TreeEntry>,
}

impl ParseResult {
    /// Returns true if no diagnostics were reported.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The diagnostics rendered as user-facing messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Distinct lines referenced by the diagnostics, ascending.
    #[must_use]
    pub fn lines_with_errors(&self) -> BTreeSet<usize> {
        self.errors.iter().filter_map(Diagnostic::line).collect()
    }
}

/// What to do when a closing tag does not match the top of the stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Recovery {
    /// Report a mismatch and drop the top entry.
    ///
    /// The dropped entry is not restored, so one misnamed closing tag can
    /// cause further extra-closing or unclosed reports for elements that were
    /// written correctly.
    #[default]
    Discard,
    /// Report a mismatch, then look further down the stack for an element of
    /// the same name.
    ///
    /// If one is found, every element above it is reported as unclosed and the
    /// match completes normally. If none is found, the closing tag is reported
    /// as extra and the stack is left alone.
    Resync,
}

/// Stack-based nesting validator over a token stream.
pub struct Validator {
    /// Input tokens from the tokenizer.
    tokens: Vec<TagToken>,

    /// Open elements, innermost last.
    stack: Vec<StackEntry>,

    /// Mismatch handling strategy.
    recovery: Recovery,

    errors: Vec<Diagnostic>,
    tree: Vec<TreeEntry>,
}

impl Validator {
    /// Create a new validator from a token stream.
    #[must_use]
    pub const fn new(tokens: Vec<TagToken>) -> Self {
        Self {
            tokens,
            stack: Vec::new(),
            recovery: Recovery::Discard,
            errors: Vec::new(),
            tree: Vec::new(),
        }
    }

    /// Select how mismatched closing tags are handled.
    #[must_use]
    pub const fn with_recovery(mut self, recovery: Recovery) -> Self {
        self.recovery = recovery;
        self
    }

    /// Process every token, drain the stack, and return the result.
    #[must_use]
    pub fn run(mut self) -> ParseResult {
        let tokens = std::mem::take(&mut self.tokens);
        for token in tokens {
            tracing::trace!(%token, line = token.line, depth = self.stack.len(), "process token");
            match token.kind {
                TagKind::Closing => self.process_closing(token),
                TagKind::SelfClosing => self.tree.push(TreeEntry {
                    name: token.name,
                    depth: self.stack.len(),
                    line: token.line,
                }),
                TagKind::Opening => self.stack.push(StackEntry {
                    name: token.name,
                    depth: self.stack.len(),
                    line: token.line,
                }),
            }
        }
        self.drain_unclosed();

        ParseResult {
            errors: self.errors,
            tree: self.tree,
        }
    }

    fn process_closing(&mut self, token: TagToken) {
        let Some(top) = self.stack.last() else {
            self.errors.push(Diagnostic::ExtraClosingTag {
                name: token.name,
                line: token.line,
            });
            return;
        };

        if top.name == token.name {
            if let Some(entry) = self.stack.pop() {
                self.tree.push(entry.into());
            }
            return;
        }

        let mismatch = Diagnostic::TagMismatch {
            expected: top.name.clone(),
            found: token.name.clone(),
            line: token.line,
        };

        match self.recovery {
            Recovery::Discard => {
                let _ = self.stack.pop();
                self.errors.push(mismatch);
            }
            Recovery::Resync => {
                let Some(position) = self.stack.iter().rposition(|e| e.name == token.name) else {
                    self.errors.push(Diagnostic::ExtraClosingTag {
                        name: token.name,
                        line: token.line,
                    });
                    return;
                };
                self.errors.push(mismatch);
                while self.stack.len() > position + 1 {
                    if let Some(entry) = self.stack.pop() {
                        self.report_unclosed(entry);
                    }
                }
                if let Some(entry) = self.stack.pop() {
                    self.tree.push(entry.into());
                }
            }
        }
    }

    /// Report every element still open, innermost first.
    fn drain_unclosed(&mut self) {
        while let Some(entry) = self.stack.pop() {
            self.report_unclosed(entry);
        }
    }

    fn report_unclosed(&mut self, entry: StackEntry) {
        self.errors.push(Diagnostic::UnclosedTag {
            name: entry.name.clone(),
            line: entry.line,
        });
        self.tree.push(entry.into());
    }
}

/// Validate `text` with the default [`Recovery::Discard`] policy.
///
/// Empty or whitespace-only input yields a single
/// [`Diagnostic::EmptyInput`] and an empty tree.
#[must_use]
pub fn validate(text: &str) -> ParseResult {
    validate_with(text, Recovery::default())
}

/// Validate `text` with the given recovery policy.
#[must_use]
pub fn validate_with(text: &str, recovery: Recovery) -> ParseResult {
    if is_blank(text) {
        tracing::debug!("empty input");
        return ParseResult {
            errors: vec![Diagnostic::EmptyInput],
            tree: Vec::new(),
        };
    }

    let tokens = tokenize(text);
    let token_count = tokens.len();
    let result = Validator::new(tokens).with_recovery(recovery).run();
    tracing::debug!(
        tokens = token_count,
        errors = result.errors.len(),
        elements = result.tree.len(),
        %recovery,
        "validated document"
    );
    result
}
