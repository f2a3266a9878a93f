//! Application state.

use std::sync::Arc;

use fanseo_core::{Analyzer, SearchProvider, Settings};
use fanseo_serp::DataForSeoClient;

/// Application state shared across handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Build state from settings. The live provider is wired in only when
    /// both credential halves are configured.
    pub fn new(settings: Arc<Settings>) -> Self {
        let provider = DataForSeoClient::from_settings(&settings.serp)
            .map(|client| Arc::new(client) as Arc<dyn SearchProvider>);

        Self {
            analyzer: Analyzer::new(provider),
            settings,
        }
    }

    /// Build state around an existing analyzer.
    pub fn with_analyzer(analyzer: Analyzer, settings: Arc<Settings>) -> Self {
        Self { analyzer, settings }
    }
}
