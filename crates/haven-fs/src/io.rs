//! Atomic artifact I/O
//!
//! All artifact writes go through `write_atomic`: content lands in a temp
//! file in the target directory, is flushed, and is renamed into place.
//! A failed write never leaves a half-written artifact behind.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use backoff::ExponentialBackoff;
use fs2::FileExt;

use crate::{Error, Result};

/// Upper bound on rename retries for transient filesystem errors.
const RENAME_RETRY_WINDOW: Duration = Duration::from_secs(2);

/// Write content atomically to a file.
///
/// Parent directories are created as needed. The temp file is written in
/// the same directory as the target so the final rename stays on one
/// filesystem. An advisory lock guards the temp file while it is open.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    let policy = ExponentialBackoff {
        max_elapsed_time: Some(RENAME_RETRY_WINDOW),
        ..ExponentialBackoff::default()
    };
    backoff::retry(policy, || {
        fs::rename(&temp_path, path).map_err(backoff::Error::transient)
    })
    .map_err(|err| match err {
        backoff::Error::Permanent(e) | backoff::Error::Transient { err: e, .. } => {
            Error::io(path, e)
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
