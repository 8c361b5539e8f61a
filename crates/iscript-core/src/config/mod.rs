//! Presentation defaults.
//!
//! The tool reads no configuration file; [`theme::Theme::default`] is the
//! single source of colours for both binaries.

pub mod theme;
