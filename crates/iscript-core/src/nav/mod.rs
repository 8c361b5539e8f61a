//! Navigation logic for the explorer.
//!
//! [`state::NavigationState`] is the directory state machine and
//! [`selection::SelectionList`] the append-only list of picked files.

pub mod selection;
pub mod state;
