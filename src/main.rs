//! Dataprove CLI - The Data Prove site and project dashboard, in the terminal

use clap::Parser;
use dataprove::cli::{Cli, Commands};
use dataprove::errors::to_exit_code;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // The TUI owns the screen; its render log replaces the formatter output
    let writer = match cli.command {
        Some(Commands::Tui { .. }) => BoxMakeWriter::new(std::io::sink),
        _ => BoxMakeWriter::new(std::io::stderr),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> dataprove::Result<()> {
    match cli.command {
        Some(Commands::Tui { page, logs }) => {
            dataprove::cli::commands::tui::run(cli.cwd.as_deref(), page, logs).await
        }
        Some(Commands::Replay { script, page, json }) => {
            dataprove::cli::commands::replay::run(cli.cwd.as_deref(), &script, page, json).await
        }
        Some(Commands::Theme { action }) => {
            dataprove::cli::commands::theme::run(cli.cwd.as_deref(), action).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
