//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fanseo_core::config::{Settings, DEFAULT_HOST, DEFAULT_PORT};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Also append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, settings: Settings) -> Result<()> {
    let live = settings.has_credentials();

    println!();
    println!("  {} {}", "FanSEO".cyan().bold(), "API Server".bold());
    println!();
    println!(
        "  {}   POST http://{}:{}/api/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    GET  http://{}:{}/api/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!(
        "  {}  {}",
        "SERP data".green(),
        if live {
            "DataForSEO (first 3 keywords per request)".normal()
        } else {
            "simulated (no DataForSEO credentials)".yellow()
        }
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    fanseo_web::run_server(Arc::new(settings)).await?;

    Ok(())
}
