//! Search provider seam.
//!
//! The orchestrator only sees this trait; the DataForSEO client lives in
//! `fanseo-serp`.

use async_trait::async_trait;

/// One organic result, in provider rank order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResultItem {
    pub domain: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
}

impl SearchResultItem {
    pub fn with_domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }
}

/// Ranked results for one keyword plus what the lookup cost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SerpListing {
    pub items: Vec<SearchResultItem>,
    pub cost: f64,
}

/// Source of live organic search results.
///
/// Implementations never fail outward: every transport or provider error
/// is reported as `None` and the caller falls back to simulation.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn organic_results(&self, keyword: &str) -> Option<SerpListing>;
}
