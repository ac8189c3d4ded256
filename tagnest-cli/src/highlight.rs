//! Highlighted source view.
//!
//! Tag substrings are found by running the tag scanner over the whole
//! document, independently of validation. Error lines are recovered from the
//! `Line N:` prefix of each message, so this works on saved or
//! externally produced reports too.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::ops::Range;

use owo_colors::OwoColorize;
use tagnest_common::Palette;
use tagnest_markup::{lines, tag_spans};

/// The line number named by a message's first `Line <digits>:` occurrence.
#[must_use]
pub fn message_line(message: &str) -> Option<usize> {
    message.match_indices("Line ").find_map(|(at, prefix)| {
        let rest = &message[at + prefix.len()..];
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || rest.as_bytes().get(digits) != Some(&b':') {
            return None;
        }
        rest[..digits].parse().ok()
    })
}

/// Distinct line numbers referenced by `messages`, ascending.
#[must_use]
pub fn error_lines<S: AsRef<str>>(messages: &[S]) -> BTreeSet<usize> {
    messages
        .iter()
        .filter_map(|m| message_line(m.as_ref()))
        .collect()
}

/// A piece of one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    range: Range<usize>,
    is_tag: bool,
}

/// Split the content `line` (byte range in the document) into plain and tag
/// segments. `next_span` indexes the first span that may touch this line and
/// is advanced past every span that ends on it.
fn segments(
    line: Range<usize>,
    full_end: usize,
    spans: &[Range<usize>],
    next_span: &mut usize,
) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut cursor = line.start;

    while let Some(span) = spans.get(*next_span) {
        if span.start >= line.end {
            break;
        }
        let start = span.start.max(line.start);
        let end = span.end.min(line.end);
        if start > cursor {
            out.push(Segment {
                range: cursor..start,
                is_tag: false,
            });
        }
        if end > start {
            out.push(Segment {
                range: start..end,
                is_tag: true,
            });
        }
        cursor = cursor.max(end);
        if span.end > full_end {
            // Continues onto the next line.
            break;
        }
        *next_span += 1;
    }

    if cursor < line.end {
        out.push(Segment {
            range: cursor..line.end,
            is_tag: false,
        });
    }
    out
}

/// Render `source` with a line-number gutter, tags colored and error lines
/// shaded.
///
/// Lines named by an error are marked with `!` in the gutter, so the view is
/// still useful with `color` off.
#[must_use]
pub fn render_source<S: AsRef<str>>(
    source: &str,
    messages: &[S],
    palette: &Palette,
    color: bool,
) -> String {
    let spans = tag_spans(source);
    let flagged = error_lines(messages);
    let width = lines(source).count().max(1).to_string().len();

    let mut out = String::new();
    let mut next_span = 0;

    for line in lines(source) {
        let is_error = flagged.contains(&line.number);
        let marker = if is_error { '!' } else { ' ' };
        let _ = write!(out, "{marker}{:>width$} | ", line.number);

        for segment in segments(line.content(), line.end, &spans, &mut next_span) {
            let text = &source[segment.range];
            if !color {
                out.push_str(text);
            } else if is_error {
                let _ = write!(out, "{}", text.style(palette.error_line_style(segment.is_tag)));
            } else if segment.is_tag {
                let _ = write!(out, "{}", text.style(palette.tag_style()));
            } else {
                out.push_str(text);
            }
        }
        out.push('\n');
    }
    out
}
