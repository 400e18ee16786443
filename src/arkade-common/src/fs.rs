use anyhow::{bail, Context, Result};
use std::fs::{self, File, OpenOptions, Permissions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

const EXECUTABLE_MODE: u32 = 0o755;

/// Copies a regular file to `dst`, creating or truncating it, and marks the result
/// executable. Returns the number of bytes written.
pub fn copy_file(src: &Path, dst: &Path) -> Result<u64> {
    let metadata =
        fs::metadata(src).with_context(|| format!("Failed to read {}", src.display()))?;
    if !metadata.is_file() {
        bail!("{} is not a regular file", src.display());
    }

    let mut source =
        File::open(src).with_context(|| format!("Failed to open {}", src.display()))?;
    let mut destination = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(EXECUTABLE_MODE)
        .open(dst)
        .with_context(|| format!("Failed to create {}", dst.display()))?;

    let copied = io::copy(&mut source, &mut destination).with_context(|| {
        format!("Failed to copy {} to {}", src.display(), dst.display())
    })?;

    // `mode` above only applies when the file is newly created
    fs::set_permissions(dst, Permissions::from_mode(EXECUTABLE_MODE))
        .with_context(|| format!("Failed to set permissions on {}", dst.display()))?;

    Ok(copied)
}
