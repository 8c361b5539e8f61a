//! The ordered list of files picked by the user.

use std::path::{Path, PathBuf};

/// Append-only list of selected absolute paths.
///
/// Every mutation returns a **new** `SelectionList`. There is no removal:
/// once a path is picked it stays for the rest of the session, and picking
/// the same file twice records it twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    paths: Vec<PathBuf>,
}

impl SelectionList {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` to the end of the list.
    pub fn push(self, path: PathBuf) -> Self {
        let mut paths = self.paths;
        paths.push(path);
        Self { paths }
    }

    /// Returns the selected paths in insertion order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns `true` if `path` has been selected at least once.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Returns `true` if `self` is a prefix of `other`, i.e. `other` can
    /// be reached from `self` by appending only.
    pub fn is_prefix_of(&self, other: &SelectionList) -> bool {
        other.paths.starts_with(&self.paths)
    }
}
