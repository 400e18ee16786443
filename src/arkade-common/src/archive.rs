use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tar::{Archive, Entry, EntryType};
use tracing::debug;

/// Unpacks a gzipped tarball into `dest`, dropping the first `strip_components` path
/// components of every entry (like `tar --strip-components`).
///
/// Entries left with an empty path after stripping are skipped. Nothing is ever written
/// outside `dest`:
/// - entries containing `..` or absolute paths are rejected
/// - entries whose parent directory inside `dest` is a symlink are rejected
/// - symlinks must point to a relative path without `..`
/// - hard links must point to a regular file unpacked earlier from the same archive
pub fn untar<R: Read>(reader: R, dest: &Path, strip_components: usize) -> Result<()> {
    let mut archive = Archive::new(GzDecoder::new(reader));
    archive.set_preserve_permissions(true);

    for entry in archive
        .entries()
        .context("Failed to read archive entries")?
    {
        let mut entry = entry.context("Failed to read archive entry")?;
        let entry_type = entry.header().entry_type();
        if entry_type.is_pax_global_extensions() || entry_type.is_pax_local_extensions() {
            continue;
        }

        let path = entry
            .path()
            .context("Failed to read archive entry path")?
            .into_owned();
        let Some(relative) = strip_path(&path, strip_components)? else {
            continue;
        };
        ensure_no_symlink_parents(dest, &relative)?;
        let target = dest.join(&relative);

        if entry_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        match entry_type {
            EntryType::Link => {
                unpack_hard_link(&entry, dest, &target, strip_components)?;
            }
            EntryType::Symlink => {
                let link_name = read_link_name(&entry)?;
                if !is_contained(&link_name) {
                    bail!(
                        "Archive symlink {} -> {} escapes the destination",
                        path.display(),
                        link_name.display()
                    );
                }
                entry
                    .unpack(&target)
                    .with_context(|| format!("Failed to unpack {}", path.display()))?;
            }
            _ => {
                entry
                    .unpack(&target)
                    .with_context(|| format!("Failed to unpack {}", path.display()))?;
            }
        }
        debug!(entry = %path.display(), target = %target.display(), "unpacked");
    }

    Ok(())
}

fn strip_path(path: &Path, strip_components: usize) -> Result<Option<PathBuf>> {
    if !is_contained(path) {
        bail!("Archive entry {} escapes the destination", path.display())
    }

    let stripped: PathBuf = path
        .components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .skip(strip_components)
        .collect();
    if stripped.as_os_str().is_empty() {
        Ok(None)
    } else {
        Ok(Some(stripped))
    }
}

/// True when `path` is relative and never steps up with `..`.
fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}

/// Fails when a directory already unpacked between `dest` and `relative` is a symlink,
/// since writing through it could land outside `dest`.
fn ensure_no_symlink_parents(dest: &Path, relative: &Path) -> Result<()> {
    let Some(parent) = relative.parent() else {
        return Ok(());
    };

    let mut current = dest.to_path_buf();
    for component in parent.components() {
        current.push(component);
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => bail!(
                "Archive entry {} passes through symlink {}",
                relative.display(),
                current.display()
            ),
            Ok(_) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => break,
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to inspect {}", current.display()))
            }
        }
    }

    Ok(())
}

fn read_link_name<R: Read>(entry: &Entry<'_, R>) -> Result<PathBuf> {
    let path = entry.path().context("Failed to read archive entry path")?;
    entry
        .link_name()
        .context("Failed to read archive link name")?
        .map(|name| name.into_owned())
        .with_context(|| format!("Archive link {} has no target", path.display()))
}

/// Hard link sources are archive paths, so they get the same stripping as entry paths
/// and must resolve to a regular file already unpacked into `dest`.
fn unpack_hard_link<R: Read>(
    entry: &Entry<'_, R>,
    dest: &Path,
    target: &Path,
    strip_components: usize,
) -> Result<()> {
    let link_name = read_link_name(entry)?;
    let Some(relative) = strip_path(&link_name, strip_components)? else {
        bail!("Archive hard link {} has an empty target", target.display());
    };
    ensure_no_symlink_parents(dest, &relative)?;

    let source = dest.join(&relative);
    let metadata = fs::symlink_metadata(&source).with_context(|| {
        format!(
            "Archive hard link target {} was not unpacked",
            link_name.display()
        )
    })?;
    if !metadata.is_file() {
        bail!(
            "Archive hard link target {} is not a regular file",
            link_name.display()
        );
    }

    match fs::remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to replace {}", target.display()))
        }
    }
    fs::hard_link(&source, target).with_context(|| {
        format!(
            "Failed to link {} to {}",
            target.display(),
            source.display()
        )
    })
}
