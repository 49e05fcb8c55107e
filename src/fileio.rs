//! Document loading and saving.
//!
//! Opening a path that does not exist is not an error: it seeds a fresh
//! one-line buffer and reports [`OpenStatus::NewFile`] so the editor can
//! create untitled documents. Save failures are recoverable; the in-memory
//! buffer is never touched by a failed write.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::buffer::Buffer;

/// How a document open resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    /// The file existed and was read.
    Opened,
    /// The file does not exist yet; an empty buffer was created for it.
    NewFile,
}

/// Load `path` into a fresh buffer.
///
/// # Errors
///
/// Returns an error only for read failures other than a missing file
/// (e.g. permissions); a missing file yields `(empty buffer, NewFile)`.
pub fn open_document(path: &Path) -> Result<(Buffer, OpenStatus)> {
    match fs::read_to_string(path) {
        Ok(text) => Ok((Buffer::from_text(&text), OpenStatus::Opened)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Ok((Buffer::new(), OpenStatus::NewFile))
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read {}", path.display()))
        }
    }
}

/// Write the buffer to `path`, each line terminated with a newline.
///
/// # Errors
///
/// Returns an error when the destination cannot be written.
pub fn save_document(buffer: &Buffer, path: &Path) -> Result<()> {
    fs::write(path, buffer.to_text())
        .with_context(|| format!("Failed to write {}", path.display()))
}
