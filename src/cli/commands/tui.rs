//! TUI command - Open the site in the terminal

use std::path::Path;

use crate::config::load_config;
use crate::engine::WorkflowEngine;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::schemas::Destination;
use crate::store::FileThemeStore;
use crate::tui::{TuiOptions, TuiRunner};

/// Run the interactive front end, starting on `page`
pub async fn run(cwd: Option<&Path>, page: Destination, show_logs: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    tracing::debug!("Loaded config with {} projects", config.projects.len());

    let engine = WorkflowEngine::new(config, FileThemeStore::new(&root))?;
    let mut runner = TuiRunner::new(engine, TuiOptions { page, show_logs });
    runner.run().await
}
