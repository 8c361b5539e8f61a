//! Directory navigation state machine.
//!
//! [`NavigationState`] owns the current directory, the explorer rows for
//! it and the [`SelectionList`]. It has a single state, *browsing*: every
//! [`load`](NavigationState::load) and
//! [`activate`](NavigationState::activate) re-enters it, either with a new
//! listing or, on failure, with the previous listing kept and an error
//! marker shown in its place.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event};
use crate::fs::entry::{Entry, EntryKind};
use crate::fs::ops::{expand, is_root, list_directory, parent_of, resolve};
use crate::nav::selection::SelectionList;

/// Navigation model behind the explorer pane.
///
/// Immutable: all state transitions consume `self` and return the new
/// state together with the [`Event`] they produced.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current_dir: PathBuf,
    entries: Vec<Entry>,
    selections: SelectionList,
    failure: Option<Entry>,
}

impl NavigationState {
    /// Creates a model and performs the initial load of `start_dir`.
    ///
    /// `start_dir` should be absolute (normally the process cwd). If it
    /// cannot be read the model starts out showing the error marker.
    pub fn open(start_dir: &Path) -> (Self, Event) {
        let state = Self {
            current_dir: start_dir.to_path_buf(),
            entries: Vec::new(),
            selections: SelectionList::new(),
            failure: None,
        };
        state.load_path(start_dir)
    }

    /// Returns the current directory (canonical after any successful load).
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Returns the rows of the last successful load.
    ///
    /// These survive a failed load untouched; see [`displayed`](Self::displayed)
    /// for what the explorer should actually show.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Returns the rows the explorer shows: the listing, or the single
    /// error marker while the last load has failed.
    pub fn displayed(&self) -> &[Entry] {
        match &self.failure {
            Some(marker) => std::slice::from_ref(marker),
            None => &self.entries,
        }
    }

    /// Returns the error marker if the most recent load failed.
    pub fn failure(&self) -> Option<&Entry> {
        self.failure.as_ref()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Returns the selected paths in the order they were picked.
    pub fn selections(&self) -> &SelectionList {
        &self.selections
    }

    /// Applies a UI command.
    pub fn handle(self, cmd: Command) -> (Self, Event) {
        match cmd {
            Command::Activate(index) => self.activate(index),
            Command::Jump(text) => self.load(&text),
        }
    }

    /// Loads the directory named by user-typed `input`.
    ///
    /// Relative input resolves against the current directory and `~`
    /// expands to the home directory.
    pub fn load(self, input: &str) -> (Self, Event) {
        match resolve(&self.current_dir, input) {
            Ok(path) => self.load_path(&path),
            Err(err) => {
                let attempted = expand(&self.current_dir, input);
                self.with_failure(attempted, err)
            }
        }
    }

    /// Loads `path`, replacing the current directory and its rows.
    ///
    /// On failure the previous directory, rows and selection are kept and
    /// the error marker becomes the displayed row.
    pub fn load_path(self, path: &Path) -> (Self, Event) {
        let target = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        };

        match read_listing(&target) {
            Ok((dir, entries)) => {
                tracing::debug!(dir = %dir.display(), count = entries.len(), "directory loaded");
                let event = Event::DirectoryLoaded {
                    path: dir.clone(),
                    entry_count: entries.len(),
                };
                let state = Self {
                    current_dir: dir,
                    entries,
                    failure: None,
                    ..self
                };
                (state, event)
            }
            Err(err) => self.with_failure(target, err),
        }
    }

    /// Activates the displayed row at `index`.
    ///
    /// - parent-link: load the parent directory
    /// - directory: load it
    /// - file: append its path to the selection
    ///
    /// Inert while the error marker is showing, on the marker itself, and
    /// for out-of-range indices.
    pub fn activate(self, index: usize) -> (Self, Event) {
        if self.failure.is_some() {
            return (self, Event::Ignored);
        }
        let Some(entry) = self.entries.get(index) else {
            return (self, Event::Ignored);
        };

        match entry.kind() {
            EntryKind::ParentLink => {
                let parent = parent_of(&self.current_dir);
                self.load_path(&parent)
            }
            EntryKind::Directory => {
                let dir = entry.path().to_path_buf();
                self.load_path(&dir)
            }
            EntryKind::File => {
                let path = entry.path().to_path_buf();
                tracing::debug!(path = %path.display(), "file selected");
                let state = Self {
                    selections: self.selections.push(path.clone()),
                    ..self
                };
                (state, Event::FileSelected(path))
            }
            EntryKind::ErrorMarker => (self, Event::Ignored),
        }
    }

    fn with_failure(self, attempted: PathBuf, err: CoreError) -> (Self, Event) {
        let error = err.to_string();
        tracing::warn!(path = %attempted.display(), %error, "directory load failed");
        let event = Event::LoadFailed {
            path: attempted.clone(),
            error: error.clone(),
        };
        let state = Self {
            failure: Some(Entry::error_marker(attempted, error)),
            ..self
        };
        (state, event)
    }
}

/// Canonicalizes `target` and builds its explorer rows, parent-link first.
fn read_listing(target: &Path) -> CoreResult<(PathBuf, Vec<Entry>)> {
    let dir = target
        .canonicalize()
        .map_err(|e| CoreError::from_io(target, e))?;
    let children = list_directory(&dir)?;

    let mut entries = Vec::with_capacity(children.len() + 1);
    if !is_root(&dir) {
        entries.push(Entry::parent_link(parent_of(&dir)));
    }
    entries.extend(children);
    Ok((dir, entries))
}
