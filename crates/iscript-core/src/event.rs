//! Command and event types for communication between UI and Core.
//!
//! The UI translates user input into [`Command`]s, which the navigation
//! model applies and answers with an [`Event`] describing the outcome.

use std::path::PathBuf;

/// A request the UI asks the navigation model to perform.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the explorer row at the given index.
    Activate(usize),
    /// Load the directory named by user-typed text (Path-Jump).
    Jump(String),
}

/// The outcome of applying a [`Command`].
///
/// Events flow **Core → UI**. The UI uses them to decide what to rebuild
/// and what to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A directory has been successfully read and is now current.
    DirectoryLoaded {
        /// The canonical path of the new current directory.
        path: PathBuf,
        /// Number of rows now shown, parent-link included.
        entry_count: usize,
    },
    /// A load failed; the previous directory stays current.
    LoadFailed {
        /// The path whose load was attempted.
        path: PathBuf,
        /// The error message shown in the error marker.
        error: String,
    },
    /// A file was appended to the selection list.
    FileSelected(PathBuf),
    /// The command had no effect.
    Ignored,
}

impl Event {
    /// Returns `true` if the explorer listing changed.
    pub fn reloaded(&self) -> bool {
        matches!(self, Self::DirectoryLoaded { .. } | Self::LoadFailed { .. })
    }
}
