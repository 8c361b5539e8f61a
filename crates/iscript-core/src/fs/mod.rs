//! Filesystem adapter for the explorer.
//!
//! [`entry::Entry`] is the row type shown in the explorer and
//! [`ops`] holds the stateless listing and path helpers.

pub mod entry;
pub mod ops;

pub use entry::{Entry, EntryKind};
