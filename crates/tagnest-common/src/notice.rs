//! User-facing notices with colored terminal output.
//!
//! Notices are one-line messages for the person running the tool ("No errors
//! to save!"), as opposed to `tracing` events, which are for debugging. They go
//! to stderr so that reports on stdout stay clean.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

use crate::theme::Palette;

/// Global set of notices we've already printed (to deduplicate)
static SEEN: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether notices are styled.
static COLOR: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI styling for notices.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Format a notice line without printing it.
#[must_use]
pub fn format_notice(component: &str, message: &str, palette: &Palette) -> String {
    let line = format!("[tagnest {component}] {message}");
    if COLOR.load(Ordering::Relaxed) {
        line.style(Palette::fg(palette.warning)).to_string()
    } else {
        line
    }
}

/// Print a notice to stderr.
pub fn notice(component: &str, message: &str, palette: &Palette) {
    eprintln!("{}", format_notice(component, message, palette));
}

/// Print a notice once per unique message.
///
/// Returns true if the notice was printed.
#[must_use = "the result tells whether the notice was printed"]
pub fn notice_once(component: &str, message: &str, palette: &Palette) -> bool {
    let key = format!("[{component}] {message}");
    let first = match SEEN.lock() {
        Ok(mut guard) => guard.get_or_insert_with(HashSet::new).insert(key),
        Err(_) => true,
    };

    if first {
        notice(component, message, palette);
    }
    first
}
