//! CLI command implementations

pub mod replay;
pub mod theme;
pub mod tui;
