//! Destination pre-flight checks.
//! The gate runs strictly before any write and guarantees the engine never
//! silently clobbers a populated directory. It only looks at existence and
//! emptiness, never at file contents.

use crate::error::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Reports whether `path` is an existing directory with at least one entry.
///
/// # Errors
/// * `Error::DestinationNotADirectory` if the path exists but is a file
pub fn is_non_empty_dir(path: &Path) -> Result<bool> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(Error::IoError(err)),
    };
    if !metadata.is_dir() {
        return Err(Error::DestinationNotADirectory {
            destination: path.display().to_string(),
        });
    }
    Ok(fs::read_dir(path)?.next().is_some())
}

/// Fails when the destination holds existing entries and the caller did not
/// explicitly authorize overwriting them.
pub fn ensure_safe_destination(path: &Path, allow_overwrite: bool) -> Result<()> {
    if is_non_empty_dir(path)? && !allow_overwrite {
        return Err(Error::DestinationNotEmpty { destination: path.display().to_string() });
    }
    Ok(())
}
