//! Structural validator for markup-like text.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - extracts opening, closing and self-closing tags line by
//!   line, keeping only the tag name and the line it was found on
//! - **Validator** - matches tags with a stack and reports extra closing tags,
//!   mismatches and unclosed elements, together with a depth-annotated list of
//!   completed elements
//!
//! Validation is pure: every call owns its state, never panics, and reports
//! malformed input as diagnostics rather than errors.
//!
//! # Not Implemented
//!
//! - DOM construction
//! - Attribute parsing
//! - Comments, CDATA and doctype handling
//! - Void elements (`<br>` without a slash is an opening tag)
//!
//! # Example
//!
//! ```
//! let result = tagnest_markup::validate("<a><b></b></a>");
//! assert!(result.is_valid());
//! assert_eq!(result.tree[0].name, "b");
//! ```

/// Line splitting shared by the tokenizer and the highlighter.
pub mod lines;
/// Line-oriented tag tokenizer.
pub mod tokenizer;
/// Nesting validator and its diagnostics.
pub mod validator;

pub use lines::{Line, Lines, is_blank, lines};
pub use tokenizer::{
    TagKind, TagScanner, TagToken, TagTokenizer, tag_spans, tokenize, tokenize_line,
};
pub use validator::{
    Diagnostic, EMPTY_INPUT_MESSAGE, ParseResult, Recovery, StackEntry, TreeEntry, Validator,
    validate, validate_with,
};
