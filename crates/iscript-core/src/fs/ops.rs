//! Filesystem adapter: directory listing and path arithmetic.
//!
//! Every function here is stateless and uncached; the only state involved
//! is whatever the filesystem holds at the time of the call.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{Entry, EntryKind};

/// Reads the immediate children of `path` as [`Entry`] values.
///
/// Entries are sorted by file name (byte order) so that reloading an
/// unchanged directory always yields the same sequence. Symlinks report the
/// kind of their target; a dangling link is reported as a file. Children
/// whose directory entry cannot be read are skipped.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use iscript_core::list_directory;
/// use std::path::Path;
///
/// for entry in list_directory(Path::new("/etc")).unwrap() {
///     println!("{}", entry.display_name());
/// }
/// ```
pub fn list_directory(path: &Path) -> CoreResult<Vec<Entry>> {
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut entries: Vec<Entry> = read_dir
        .filter_map(Result::ok)
        .map(|dir_entry| {
            let child = dir_entry.path();
            let kind = match std::fs::metadata(&child) {
                Ok(m) if m.is_dir() => EntryKind::Directory,
                _ => EntryKind::File,
            };
            Entry::new(child, kind)
        })
        .collect();

    entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));
    Ok(entries)
}

/// Returns the parent of `dir`, or `dir` itself at the filesystem root.
pub fn parent_of(dir: &Path) -> PathBuf {
    dir.parent().unwrap_or(dir).to_path_buf()
}

/// Returns `true` when `dir` has no parent distinct from itself.
pub fn is_root(dir: &Path) -> bool {
    parent_of(dir) == dir
}

/// Appends `name` to `dir` using the platform separator.
pub fn join(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Returns the process's current working directory.
pub fn cwd() -> CoreResult<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Turns user-typed path text into a canonical absolute path.
///
/// A leading `~` expands to the home directory and relative input is
/// joined onto `base` before canonicalization, so the result names an
/// existing location with symlinks resolved.
///
/// # Errors
///
/// - [`CoreError::InvalidPath`]: the input is blank.
/// - [`CoreError::NotFound`] / [`CoreError::PermissionDenied`] /
///   [`CoreError::Io`]: canonicalization failed.
pub fn resolve(base: &Path, input: &str) -> CoreResult<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidPath(input.to_string()));
    }

    let joined = expand(base, trimmed);
    joined
        .canonicalize()
        .map_err(|e| CoreError::from_io(&joined, e))
}

/// The absolute, not yet canonical, path that `input` names relative to
/// `base`: trimmed, `~` expanded, relative input joined onto `base`.
pub fn expand(base: &Path, input: &str) -> PathBuf {
    let expanded = shellexpand::tilde(input.trim());
    let candidate = Path::new(expanded.as_ref());
    if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        base.join(candidate)
    }
}
