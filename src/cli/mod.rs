//! CLI module for dataprove
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{Destination, Theme};

/// Dataprove - The Data Prove marketing site and project dashboard, in the terminal
#[derive(Parser, Debug)]
#[command(name = "dataprove")]
#[command(version)]
#[command(about = "The Data Prove marketing site and project dashboard, in the terminal")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal front end
    Tui {
        /// Page to load first (home, signin, signup, dashboard)
        #[arg(long, default_value = "home")]
        page: Destination,

        /// Start with the render log visible
        #[arg(long)]
        logs: bool,
    },

    /// Run a scripted list of actions headlessly and print the render commands
    Replay {
        /// Path to a JSON array of actions and waits
        script: PathBuf,

        /// Page the script starts on (home, signin, signup, dashboard)
        #[arg(long, default_value = "home")]
        page: Destination,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Print the stored theme
    Get,

    /// Store a theme (light or dark)
    Set { theme: Theme },

    /// Flip between light and dark
    Toggle,
}
