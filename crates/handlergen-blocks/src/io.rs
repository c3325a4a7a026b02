//! Atomic I/O operations with file locking

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::writer::update_block;

/// Replace the file at `path` with `content` in one step.
///
/// The bytes go to a named temp file beside `path`, held under an exclusive
/// lock and synced before being renamed over the target. A reader sees either
/// the old file or the new one. If any step fails the temp file is deleted.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut staged = tempfile::Builder::new()
        .prefix(".handlergen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| Error::io(dir, e))?;

    staged.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;
    staged
        .write_all(content)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| Error::io(staged.path(), e))?;

    staged
        .persist(path)
        .map_err(|e| Error::io(path, e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote file atomically");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Replace the body of block `id` in the file at `path`.
///
/// The file is only rewritten when the body actually changes. Returns
/// whether a write happened.
///
/// # Errors
/// Returns `Error::BlockNotFound` (carrying `path`) if the file has no such
/// block, or an I/O error.
pub fn splice_file(path: &Path, id: &str, block_content: &str) -> Result<bool> {
    let current = read_text(path)?;
    let updated = update_block(&current, id, block_content).map_err(|e| match e {
        Error::BlockNotFound { id, .. } => Error::BlockNotFound {
            id,
            path: PathBuf::from(path),
        },
        other => other,
    })?;

    if updated == current {
        debug!(path = %path.display(), block = id, "block already up to date");
        return Ok(false);
    }

    write_atomic(path, updated.as_bytes())?;
    info!(path = %path.display(), block = id, "updated managed block");
    Ok(true)
}
