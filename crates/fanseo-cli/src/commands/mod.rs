//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fanseo_core::config::{SerpSettings, Settings, DEFAULT_SERP_URL};

pub mod analyze;
pub mod health;
pub mod serve;

/// FanSEO - keyword opportunity analysis for sports teams
#[derive(Parser)]
#[command(name = "fanseo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// DataForSEO API login
    #[arg(long, env = "DATAFORSEO_LOGIN", global = true, hide_env_values = true)]
    pub dataforseo_login: Option<String>,

    /// DataForSEO API password
    #[arg(long, env = "DATAFORSEO_PASSWORD", global = true, hide_env_values = true)]
    pub dataforseo_password: Option<String>,

    /// Seconds to wait between submitting a search task and collecting it
    #[arg(long, env = "DATAFORSEO_WAIT_SECS", default_value = "5", global = true)]
    pub dataforseo_wait_secs: u64,

    /// Retrievals attempted per search task before giving up
    #[arg(long, env = "DATAFORSEO_POLL_ATTEMPTS", default_value = "1", global = true)]
    pub dataforseo_poll_attempts: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Analyze keywords for a team from the terminal
    Analyze(analyze::AnalyzeArgs),

    /// Show configuration health
    Health,
}

impl Cli {
    /// Provider settings from flags and environment.
    fn serp_settings(&self) -> SerpSettings {
        SerpSettings {
            base_url: DEFAULT_SERP_URL.to_string(),
            login: self.dataforseo_login.clone(),
            password: self.dataforseo_password.clone(),
            initial_wait: Duration::from_secs(self.dataforseo_wait_secs),
            poll_attempts: self.dataforseo_poll_attempts,
            ..SerpSettings::default()
        }
    }

    pub async fn execute(self) -> Result<()> {
        let serp = self.serp_settings();

        match self.command {
            Commands::Serve(args) => {
                let settings = Settings {
                    host: args.host.clone(),
                    port: args.port,
                    serp,
                };
                serve::execute(args, settings).await
            }
            Commands::Analyze(args) => {
                let settings = Settings {
                    serp,
                    ..Settings::default()
                };
                analyze::execute(args, settings).await
            }
            Commands::Health => {
                let settings = Settings {
                    serp,
                    ..Settings::default()
                };
                health::execute(&settings)
            }
        }
    }
}
