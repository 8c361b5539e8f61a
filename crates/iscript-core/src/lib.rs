//! iscript core library: UI-agnostic logic for the install-script builder.
//!
//! `iscript-core` holds everything the terminal frontend drives but does
//! not draw: the filesystem adapter, the directory navigation state machine
//! with its selection list, and script rendering.
//!
//! # Modules
//!
//! - [`fs`]: Filesystem adapter ([`Entry`], directory listing, path resolution).
//! - [`nav`]: [`NavigationState`] and the append-only [`SelectionList`].
//! - [`event`]: [`Command`] and [`Event`] types for UI ↔ Core communication.
//! - [`script`]: Install-script rendering for the script form.
//! - [`config`]: Built-in theme defaults.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod script;

pub use config::theme::Theme;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::{Entry, EntryKind};
pub use fs::ops::{cwd, expand, is_root, join, list_directory, parent_of, resolve};
pub use nav::selection::SelectionList;
pub use nav::state::NavigationState;
pub use script::render_script;
