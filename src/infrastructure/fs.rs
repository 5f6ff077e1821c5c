use std::fs;
use std::path::Path;

use crate::domain::error::{MigrateError, Result};

/// Read a file as UTF-8, falling back to lossy conversion when the
/// input carries stray non-UTF-8 bytes.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .map_err(|e| MigrateError::IoError(format!("failed to read {}: {}", path.display(), e)))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => Ok(String::from_utf8_lossy(err.as_bytes()).to_string()),
    }
}

pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)
        .map_err(|e| MigrateError::IoError(format!("failed to write {}: {}", path.display(), e)))
}
