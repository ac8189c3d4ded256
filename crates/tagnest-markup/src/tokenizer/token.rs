use std::fmt;

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Classification of a tag occurrence.
///
/// A substring beginning with `</` is [`TagKind::Closing`]. Any other substring
/// ending with `/>` is [`TagKind::SelfClosing`]. Everything else is
/// [`TagKind::Opening`]. A token is never both closing and self-closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TagKind {
    /// `<name ...>`
    Opening,
    /// `</name ...>`
    Closing,
    /// `<name .../>`
    SelfClosing,
}

/// A tag extracted from one line of input.
///
/// Tokens are produced in document order: line-major, then left to right
/// within a line. They only live for the duration of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TagToken {
    /// The first run of ASCII alphanumerics inside the tag.
    pub name: String,
    /// Opening, closing or self-closing.
    pub kind: TagKind,
    /// 1-based line the tag was found on.
    pub line: usize,
}

impl TagToken {
    /// Create a new token.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TagKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }

    /// Create an opening tag token.
    #[must_use]
    pub fn opening(name: impl Into<String>, line: usize) -> Self {
        Self::new(name, TagKind::Opening, line)
    }

    /// Create a closing tag token.
    #[must_use]
    pub fn closing(name: impl Into<String>, line: usize) -> Self {
        Self::new(name, TagKind::Closing, line)
    }

    /// Create a self-closing tag token.
    #[must_use]
    pub fn self_closing(name: impl Into<String>, line: usize) -> Self {
        Self::new(name, TagKind::SelfClosing, line)
    }

    /// Returns true if this is a closing tag.
    #[must_use]
    pub const fn is_closing(&self) -> bool {
        matches!(self.kind, TagKind::Closing)
    }
}

impl fmt::Display for TagToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TagKind::Opening => write!(f, "<{}>", self.name),
            TagKind::Closing => write!(f, "</{}>", self.name),
            TagKind::SelfClosing => write!(f, "<{}/>", self.name),
        }
    }
}
