//! Configuration health command.

use anyhow::Result;
use colored::Colorize;
use fanseo_core::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    if settings.has_credentials() {
        println!(
            "{} DataForSEO credentials configured ({})",
            "✓".green().bold(),
            settings.serp.base_url.dimmed()
        );
    } else {
        println!(
            "{} DataForSEO credentials missing, analysis will use simulated data",
            "!".yellow().bold()
        );
        println!("  Set DATAFORSEO_LOGIN and DATAFORSEO_PASSWORD to enable live results.");
    }

    Ok(())
}
