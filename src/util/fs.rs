//! Filesystem utilities.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use filetime::FileTime;
use walkdir::WalkDir;

/// Recursively copy every file under `src` whose name ends with
/// `extension` to the same relative path under `dest`.
///
/// Parent directories are created as needed and source modification times
/// are preserved on the copies. Nothing in `dest` is ever deleted; callers
/// clear stale content first.
pub fn copy_matching(src: &Path, dest: &Path, extension: &str) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("failed to walk {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(extension) {
            continue;
        }

        // Walked paths are always under the walk root.
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let dest_path = dest.join(rel);
        if let Some(parent) = dest_path.parent() {
            ensure_dir(parent)?;
        }

        fs::copy(entry.path(), &dest_path).with_context(|| {
            format!(
                "failed to copy {} to {}",
                entry.path().display(),
                dest_path.display()
            )
        })?;

        let meta = entry.metadata()?;
        let mtime = FileTime::from_last_modification_time(&meta);
        filetime::set_file_mtime(&dest_path, mtime).with_context(|| {
            format!("failed to set mtime on {}", dest_path.display())
        })?;
    }
    Ok(())
}

/// Remove a directory and all its contents, if it exists.
pub fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove directory: {}", path.display()))?;
    }
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}
