use serde::{Serialize, Serializer};

/// Message reported for empty or whitespace-only input.
pub const EMPTY_INPUT_MESSAGE: &str = "⚠ File is empty!";

/// A structural problem found while validating a document.
///
/// Diagnostics are collected, never thrown. The `Display` form is the exact
/// message shown to users, and every kind except [`Diagnostic::EmptyInput`]
/// starts with `Line N:` so that line numbers can be recovered from the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Diagnostic {
    /// The input was empty or whitespace-only.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,

    /// A closing tag arrived with nothing open.
    #[error("Line {line}: Extra closing tag </{name}>")]
    ExtraClosingTag {
        /// Name of the closing tag.
        name: String,
        /// Line of the closing tag.
        line: usize,
    },

    /// A closing tag did not match the most recently opened element.
    #[error("Line {line}: Tag mismatch! Expected </{expected}> but found </{found}>")]
    TagMismatch {
        /// Name on top of the stack.
        expected: String,
        /// Name of the closing tag.
        found: String,
        /// Line of the closing tag.
        line: usize,
    },

    /// An element was never closed.
    #[error("Line {line}: Missing closing tag for <{name}>")]
    UnclosedTag {
        /// Name of the open element.
        name: String,
        /// Line the element was opened on.
        line: usize,
    },
}

impl Diagnostic {
    /// The line this diagnostic points at, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::EmptyInput => None,
            Self::ExtraClosingTag { line, .. }
            | Self::TagMismatch { line, .. }
            | Self::UnclosedTag { line, .. } => Some(*line),
        }
    }
}

impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
