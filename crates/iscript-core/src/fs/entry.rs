//! Explorer entry representation.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use unicode_normalization::UnicodeNormalization;

/// Label shown for the synthetic parent-directory entry.
pub const PARENT_LINK_LABEL: &str = "..";

/// What an [`Entry`] stands for, and therefore what activating it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory; symlinks pointing at directories are reported as such.
    Directory,
    /// The synthetic `..` row leading to the parent directory.
    ParentLink,
    /// The synthetic row shown in place of a listing that could not be read.
    ErrorMarker,
}

/// A single row of the explorer.
///
/// `Entry` is immutable: every directory load creates fresh values and the
/// old ones are dropped with the previous listing.
///
/// # Examples
///
/// ```
/// use iscript_core::fs::entry::{Entry, EntryKind};
/// use std::path::PathBuf;
///
/// let entry = Entry::new(PathBuf::from("/tmp/fx/sub"), EntryKind::Directory);
/// assert_eq!(entry.name(), "sub");
/// assert!(entry.display_name().ends_with('/'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    kind: EntryKind,
}

impl Entry {
    /// Creates an entry for a directory child at `path`.
    ///
    /// The name is the last path component, re-composed to NFC so that
    /// names read from NFD filesystems (macOS) render correctly.
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        Self { path, name, kind }
    }

    /// Creates the `..` entry pointing at `parent`.
    pub fn parent_link(parent: PathBuf) -> Self {
        Self {
            path: parent,
            name: PARENT_LINK_LABEL.to_string(),
            kind: EntryKind::ParentLink,
        }
    }

    /// Creates the error marker shown after `attempted` failed to load.
    pub fn error_marker(attempted: PathBuf, message: String) -> Self {
        Self {
            path: attempted,
            name: message,
            kind: EntryKind::ErrorMarker,
        }
    }

    /// Returns the absolute path this entry refers to.
    ///
    /// For the error marker this is the path whose load failed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the bare basename (or `..`, or the error text).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_parent_link(&self) -> bool {
        self.kind == EntryKind::ParentLink
    }

    pub fn is_error(&self) -> bool {
        self.kind == EntryKind::ErrorMarker
    }

    /// Returns the label the explorer shows for this entry.
    ///
    /// Directories get a trailing path separator; the error marker is
    /// prefixed so it cannot be mistaken for a file name.
    pub fn display_name(&self) -> String {
        match self.kind {
            EntryKind::Directory => format!("{}{MAIN_SEPARATOR}", self.name),
            EntryKind::ErrorMarker => format!("[error] {}", self.name),
            EntryKind::File | EntryKind::ParentLink => self.name.clone(),
        }
    }
}
