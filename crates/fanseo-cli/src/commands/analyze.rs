//! One-shot analysis command.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use fanseo_core::analysis::model::AnalysisRequest;
use fanseo_core::{Analyzer, SearchProvider, Settings};
use fanseo_serp::DataForSeoClient;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Team name, e.g. "Boston Bruins"
    #[arg(long)]
    pub team: String,

    /// League label (informational)
    #[arg(long)]
    pub league: Option<String>,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,

    /// Keywords to analyze (only the first 5 are processed)
    #[arg(required = true, num_args = 1..)]
    pub keywords: Vec<String>,
}

pub async fn execute(args: AnalyzeArgs, settings: Settings) -> Result<()> {
    let provider = DataForSeoClient::from_settings(&settings.serp)
        .map(|client| Arc::new(client) as Arc<dyn SearchProvider>);
    let analyzer = Analyzer::new(provider);

    let request = AnalysisRequest::new(args.team, args.league, args.keywords);
    let response = analyzer.analyze(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        output::print_analysis(&response);
    }

    Ok(())
}
