//! FanSEO CLI
//!
//! Keyword opportunity analysis for sports team websites.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
///
/// When `json_mode` is true, all tracing output goes to stderr with ANSI
/// disabled so stdout carries only the JSON document.
fn init_tracing(log_file: Option<&std::path::Path>, json_mode: bool, verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "fanseo=debug,fanseo_web=debug,fanseo_core=debug,fanseo_serp=debug"
    } else {
        "fanseo=info,fanseo_web=debug,fanseo_core=info,fanseo_serp=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        // Log to both stdout and file
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else if json_mode {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Credentials may come from a local .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Serve(args) => args.log_file.clone(),
        _ => None,
    };
    let json_mode = matches!(&cli.command, Commands::Analyze(args) if args.json);
    init_tracing(log_file.as_deref(), json_mode, cli.verbose)?;

    cli.execute().await
}
