use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("{path:?} is not a usable storage directory: {source}")]
    StorageDir { path: PathBuf, source: io::Error },
    #[error("failed to replace {path:?}: {source}")]
    Replace { path: PathBuf, source: io::Error },
}

/// Creates `dir` (and parents) unless it already exists as a directory.
pub fn ensure_storage_dir(dir: &Path) -> Result<(), PersistError> {
    fs::create_dir_all(dir).map_err(|source| PersistError::StorageDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Replaces `path` with `content` via a sibling temp file and rename.
///
/// A crash mid-write leaves the previous slot value intact.
pub fn write_atomically(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    ensure_storage_dir(dir)?;

    let replace_err = |source: io::Error| PersistError::Replace {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(replace_err)?;
    tmp.write_all(content.as_bytes()).map_err(replace_err)?;
    tmp.as_file().sync_all().map_err(replace_err)?;
    tmp.persist(path).map_err(|err| replace_err(err.error))?;
    Ok(())
}
