//! Text rendering of validation results.
//!
//! The report lists every diagnostic verbatim, in order, followed by the
//! nesting view. Diagnostic wording is never altered here: the highlighter and
//! saved reports both depend on the `Line N:` prefix.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use serde::Serialize;
use tagnest_common::Palette;
use tagnest_markup::{ParseResult, TagToken, TreeEntry};

/// Banner shown when no diagnostics were reported.
pub const VALID_BANNER: &str = "🎉 HTML is valid!";
/// Banner shown above the diagnostic list.
pub const ERRORS_BANNER: &str = "❌ Errors found:";
/// Heading above the nesting view.
pub const TREE_HEADING: &str = "HTML Tree Structure:";
/// Indentation per nesting level.
const INDENT: &str = "    ";

/// Renders reports with an optional color palette.
pub struct Renderer {
    palette: Palette,
    color: bool,
}

impl Renderer {
    /// Create a renderer. With `color` off the output is plain text.
    #[must_use]
    pub const fn new(palette: Palette, color: bool) -> Self {
        Self { palette, color }
    }

    fn paint(&self, text: &str, color: owo_colors::Rgb) -> String {
        if self.color {
            text.style(Palette::fg(color)).to_string()
        } else {
            text.to_string()
        }
    }

    /// The full report: banner, diagnostics, then the tree view.
    #[must_use]
    pub fn report(&self, result: &ParseResult) -> String {
        let mut out = String::new();
        if result.is_valid() {
            let _ = writeln!(out, "{}", self.paint(VALID_BANNER, self.palette.success));
        } else {
            let _ = writeln!(out, "{}", self.paint(ERRORS_BANNER, self.palette.error));
            out.push('\n');
            for message in result.messages() {
                let bullet = format!("• {message}");
                let _ = writeln!(out, "{}", self.paint(&bullet, self.palette.error));
            }
        }
        out.push('\n');
        let _ = writeln!(out, "{TREE_HEADING}");
        out.push_str(&self.tree_view(&result.tree));
        out
    }

    /// One line per tree entry, indented by depth.
    #[must_use]
    pub fn tree_view(&self, tree: &[TreeEntry]) -> String {
        let mut out = String::new();
        for entry in tree {
            if !self.color {
                out.push_str(&tree_line(entry));
                out.push('\n');
                continue;
            }
            let annotation = format!("(Line {})", entry.line);
            let _ = writeln!(
                out,
                "{}{} {}",
                INDENT.repeat(entry.depth),
                entry.name,
                self.paint(&annotation, self.palette.text_secondary)
            );
        }
        out
    }
}

/// Plain tree line for one entry, e.g. `    b (Line 1)`.
#[must_use]
pub fn tree_line(entry: &TreeEntry) -> String {
    format!("{}{} (Line {})", INDENT.repeat(entry.depth), entry.name, entry.line)
}

/// One line per token: kind, name and line.
#[must_use]
pub fn token_dump(tokens: &[TagToken]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Tags ({}) ===", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {i:3}: {:<12} {:<12} line {}",
            token.kind.to_string(),
            token.name,
            token.line
        );
    }
    out.push('\n');
    out
}

/// Machine-readable report.
#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    #[serde(flatten)]
    result: &'a ParseResult,
}

/// Pretty-printed JSON with `valid`, `errors` (messages) and `tree`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json_report(result: &ParseResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        valid: result.is_valid(),
        result,
    })
}
