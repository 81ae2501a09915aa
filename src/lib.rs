//! Dataprove - The Data Prove marketing site and project dashboard, in the terminal
//!
//! This library provides the core functionality for the dataprove CLI, including:
//! - Schema definitions for pages, themes, modals, projects, invites and config
//! - Domain logic for the sign-in, sign-up, project and invite forms
//! - A workflow engine that turns UI actions into render commands
//! - Theme preference storage backed by JSON files
//! - A terminal front end and a headless replay runner

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;
pub mod tui;

// Re-export commonly used types
pub use engine::{RenderCommand, UiAction, WorkflowEngine};
pub use errors::{DataproveError, Result};
pub use schemas::{Config, Destination, Theme};
pub use store::{FileThemeStore, MemoryThemeStore, ThemeStore};
