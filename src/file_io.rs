// src/file_io.rs
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::error::EditError;

/// Reads the whole torrent file into memory.
pub fn read_torrent_file(path: &Path) -> Result<Vec<u8>, EditError> {
    fs::read(path).map_err(|e| EditError::io("read", path, e))
}

/// Replaces the file at `path` with `contents`.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over the target, so a failed write never leaves a truncated
/// torrent behind. The original file's permissions are carried over.
///
/// Symlinks are followed: the file they point to is replaced and the link
/// itself stays in place.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), EditError> {
    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)
        .map_err(|e| EditError::io("create a temporary file next to", path, e))?;
    tmp.write_all(contents)
        .map_err(|e| EditError::io("write new contents for", path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| EditError::io("flush new contents for", path, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| EditError::io("copy permissions of", path, e))?;
    }

    debug!("renaming {} over {}", tmp.path().display(), target.display());
    tmp.persist(&target)
        .map_err(|e| EditError::io("replace", path, e.error))?;
    Ok(())
}

/// The real file behind `path`. A path that cannot be resolved, such as one
/// that does not exist yet, is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
