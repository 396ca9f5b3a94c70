//! Blocklist file access.

use std::fs;
use std::io;
use std::path::Path;

use blocklist_format::{parse_document, Document};

use crate::error::SyncError;

/// Raw text of a file plus its parsed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedFile {
    pub text: String,
    pub document: Document,
}

/// Read a file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, SyncError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SyncError::io(path, e)),
    }
}

/// Load and parse a blocklist; a missing file is an empty document.
pub fn load_or_empty(path: &Path) -> Result<LoadedFile, SyncError> {
    match read_optional(path)? {
        Some(text) => {
            let document = parse_document(&text);
            Ok(LoadedFile { text, document })
        }
        None => {
            tracing::info!(path = %path.display(), "target missing, starting from an empty list");
            Ok(LoadedFile::default())
        }
    }
}

/// Write atomically to file (write-then-rename)
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), SyncError> {
    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, contents).map_err(|e| SyncError::io(&temp_path, e))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(SyncError::io(path, e));
    }
    Ok(())
}
