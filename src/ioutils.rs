use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
/// An existing file at the destination is overwritten.
pub fn write_bytes<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Applies a permission mode to an existing file. No-op on non-Unix hosts,
/// where modes do not map onto the filesystem model.
#[cfg(unix)]
pub fn set_mode<P: AsRef<Path>>(path: P, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path.as_ref(), std::fs::Permissions::from_mode(mode))
        .map_err(Error::IoError)
}

#[cfg(not(unix))]
pub fn set_mode<P: AsRef<Path>>(_path: P, _mode: u32) -> Result<()> {
    Ok(())
}
