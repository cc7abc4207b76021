//! Output sink: writes a composed header to a new file.

use crate::error::{Error, Result};
use crate::header::HeaderBlock;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    /// False when the permission change failed; the file is still written.
    pub executable: bool,
}

/// Writes `block` to a new file at `path` and marks it executable.
///
/// # Errors
/// * `Error::AlreadyExists` if `path` exists; nothing is written
/// * `Error::IoError` if the file cannot be created or written
pub fn write_header<P: AsRef<Path>>(path: P, block: &HeaderBlock) -> Result<Written> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::AlreadyExists { path: path.display().to_string() });
    }

    debug!("Writing header to {}", path.display());
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(block.to_string().as_bytes())?;
    file.flush()?;

    let executable = match make_executable(path) {
        Ok(()) => true,
        Err(e) => {
            warn!("Cannot make {} executable: {}", path.display(), e);
            false
        }
    };

    Ok(Written { path: path.to_path_buf(), executable })
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use crate::constants::SCRIPT_MODE;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(SCRIPT_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(path: &Path) -> Result<()> {
    debug!("No permission model, leaving {} as is", path.display());
    let _ = fs::metadata(path)?;
    Ok(())
}
