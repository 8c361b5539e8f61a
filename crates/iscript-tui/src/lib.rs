//! Terminal frontend for iscript.
//!
//! Holds everything the two binaries share: the file selector's view
//! binder and input mapping, the script form, layout, rendering and
//! terminal setup.

pub mod app;
pub mod input;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod ui;
