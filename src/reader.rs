// src/reader.rs
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{CountError, Result};

/// Reads the whole file at `path` as UTF-8 text.
///
/// # Errors
/// Returns [`CountError::NotFound`] if nothing exists at `path`, and
/// [`CountError::Io`] for any other failure, including invalid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| CountError::from_io(e, path))?;
    debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
