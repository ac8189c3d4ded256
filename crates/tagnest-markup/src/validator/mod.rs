//! Stack-based nesting validator.

/// Diagnostic kinds and their messages.
pub mod diagnostic;
/// The validator state machine and its results.
pub mod engine;

pub use diagnostic::{Diagnostic, EMPTY_INPUT_MESSAGE};
pub use engine::{
    ParseResult, Recovery, StackEntry, TreeEntry, Validator, validate, validate_with,
};
