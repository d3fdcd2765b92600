//! Source-text ingestion — file upload and stdin paths.
//!
//! The app accepts arbitrary user files; RTF documents are routed through
//! [`extract_plain_text`](crate::rtf::extract_plain_text) while everything
//! else passes through unchanged.  Detection keys off the `.rtf` extension,
//! with a content sniff (`{\rtf` prefix) as fallback for extensionless
//! files, so a plain-text file that happens to contain braces is never
//! mangled by the extractor.
//!
//! [`truncate_chars`] enforces the source-length cap (2 000 characters in
//! the default config) without ever splitting a multibyte character.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rtf::extract_plain_text;

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Errors that can occur while ingesting source text.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// The file exists but could not be read as text.
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("cannot read stdin: {0}")]
    Stdin(std::io::Error),
}

// ---------------------------------------------------------------------------
// Format detection
// ---------------------------------------------------------------------------

/// How a source file's content should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// RTF markup — run through the extractor.
    Rtf,
    /// Anything else — used verbatim.
    PlainText,
}

/// Decide how to interpret a file: `.rtf` extension wins, then a `{\rtf`
/// content prefix, otherwise plain text.
pub fn detect_format(path: &Path, content: &str) -> SourceFormat {
    let is_rtf_ext = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("rtf"));
    if is_rtf_ext || content.starts_with("{\\rtf") {
        SourceFormat::Rtf
    } else {
        SourceFormat::PlainText
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a source file and return its text content, extracting plain text
/// from RTF markup when the file is RTF.
///
/// # Errors
///
/// [`InputError::FileNotFound`] when the path does not exist;
/// [`InputError::Read`] for any other I/O failure.
pub fn load_source(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match detect_format(path, &content) {
        SourceFormat::Rtf => {
            log::debug!("extracting RTF content from {}", path.display());
            Ok(extract_plain_text(&content))
        }
        SourceFormat::PlainText => Ok(content),
    }
}

/// Read all of standard input as source text (no RTF interpretation —
/// piped text is taken verbatim).
pub fn read_stdin() -> Result<String, InputError> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// Length cap
// ---------------------------------------------------------------------------

/// Prefix of `s` containing at most `max` characters, never splitting a
/// multibyte character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((offset, _)) => &s[..offset],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
