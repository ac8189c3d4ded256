//! Loading documents and saving error reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extensions accepted as input, compared case-insensitively.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["html", "htm", "txt"];

/// Extension given to an error report saved without one.
pub const REPORT_EXTENSION: &str = "txt";

/// Error type for document loading and report saving.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input file is not a markup or text file.
    #[error(
        "unsupported file type '{}': expected one of {}",
        .path.display(),
        ACCEPTED_EXTENSIONS.join(", ")
    )]
    UnsupportedExtension {
        /// Path that was rejected.
        path: PathBuf,
    },

    /// Neither a file nor inline text was given.
    #[error("no input: pass a FILE or --html")]
    MissingInput,

    /// Failed to read the input file.
    #[error("failed to read '{}'", .path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the error report.
    #[error("failed to write '{}'", .path.display())]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// What [`save_errors`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The report was written to this path.
    Saved(PathBuf),
    /// There were no errors, so nothing was written.
    NothingToSave,
}

/// Check that `path` has one of the [`ACCEPTED_EXTENSIONS`].
///
/// # Errors
///
/// Returns [`DocumentError::UnsupportedExtension`] otherwise.
pub fn check_extension(path: &Path) -> Result<(), DocumentError> {
    let accepted = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        });

    if accepted {
        Ok(())
    } else {
        Err(DocumentError::UnsupportedExtension {
            path: path.to_path_buf(),
        })
    }
}

/// Read a document from disk.
///
/// # Errors
///
/// Returns an error if the extension is not accepted or the file cannot be
/// read as UTF-8.
pub fn load(path: &Path) -> Result<String, DocumentError> {
    check_extension(path)?;
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "loaded document");
    Ok(content)
}

/// The document text: `inline` if given, otherwise the contents of `path`.
///
/// # Errors
///
/// Returns [`DocumentError::MissingInput`] when both are absent, or any error
/// from [`load`].
pub fn read_input(inline: Option<String>, path: Option<&Path>) -> Result<String, DocumentError> {
    match (inline, path) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => load(path),
        (None, None) => Err(DocumentError::MissingInput),
    }
}

/// Write the newline-joined error messages to `path`.
///
/// A path without an extension gets [`REPORT_EXTENSION`]. Nothing is written
/// when `messages` is empty.
///
/// # Errors
///
/// Returns [`DocumentError::Write`] if the file cannot be written.
pub fn save_errors(path: &Path, messages: &[String]) -> Result<SaveOutcome, DocumentError> {
    if messages.is_empty() {
        tracing::debug!("no errors to save");
        return Ok(SaveOutcome::NothingToSave);
    }

    let path = if path.extension().is_none() {
        path.with_extension(REPORT_EXTENSION)
    } else {
        path.to_path_buf()
    };

    fs::write(&path, messages.join("\n")).map_err(|source| DocumentError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = messages.len(), "saved error report");
    Ok(SaveOutcome::Saved(path))
}
