//! Terminal User Interface (TUI) module
//!
//! Renders the site's pages in the terminal and turns key presses into engine
//! actions.

pub mod events;
pub mod runner;
pub mod state;
pub mod widgets;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use events::{handle_key, KeyOutcome};
pub use runner::{TuiOptions, TuiRunner};
pub use state::TuiState;
