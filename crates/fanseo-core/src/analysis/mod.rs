//! Keyword opportunity analysis.
//!
//! Per request: the first [`MAX_REAL_LOOKUPS`] keywords go to the live
//! search provider when one is configured, everything else (and every failed
//! lookup) is simulated. Records are then sorted and summarized.

pub mod model;

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::SeoResult;
use crate::keyword::KeywordProfile;
use crate::matcher;
use crate::provider::{SearchProvider, SerpListing};
use crate::simulation;
use model::{AnalysisRecord, AnalysisRequest, AnalysisResponse, Summary, TeamRank};

/// Keywords processed per request; the rest are ignored.
pub const MAX_KEYWORDS: usize = 5;

/// Live provider lookups per request.
pub const MAX_REAL_LOOKUPS: usize = 3;

/// Competitor domains kept per record.
pub const MAX_COMPETITORS: usize = 3;

/// Runs the analysis pipeline. Holds no per-request state.
#[derive(Clone, Default)]
pub struct Analyzer {
    provider: Option<Arc<dyn SearchProvider>>,
}

impl Analyzer {
    /// Create an analyzer. `None` disables the live path entirely.
    pub fn new(provider: Option<Arc<dyn SearchProvider>>) -> Self {
        Self { provider }
    }

    /// An analyzer that only ever simulates.
    pub fn simulated() -> Self {
        Self { provider: None }
    }

    pub fn has_live_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Analyze a request. Keywords are processed sequentially.
    pub async fn analyze(&self, request: &AnalysisRequest) -> SeoResult<AnalysisResponse> {
        request.validate()?;

        let processed = request.keywords.len().min(MAX_KEYWORDS);
        info!(
            team = %request.team_name,
            submitted = request.keywords.len(),
            processed,
            live = self.has_live_provider(),
            "Analyzing keywords"
        );

        let mut records = Vec::with_capacity(processed);
        for (idx, keyword) in request.keywords.iter().take(MAX_KEYWORDS).enumerate() {
            let record = match self.live_provider_for(idx) {
                Some(provider) => analyze_live(provider, keyword, &request.team_name).await,
                None => simulation::simulate(keyword),
            };

            debug!(
                keyword = %record.keyword,
                opportunity = record.opportunity,
                real = record.is_real_data,
                "Keyword analyzed"
            );
            records.push(record);
        }

        // Stable: ties keep processing order.
        records.sort_by(|a, b| b.opportunity.cmp(&a.opportunity));
        let summary = Summary::from_records(&records);

        Ok(AnalysisResponse {
            success: true,
            team_name: request.team_name.clone(),
            league: request.league.clone(),
            total_keywords: request.keywords.len(),
            analyses: records,
            summary,
        })
    }

    fn live_provider_for(&self, idx: usize) -> Option<&dyn SearchProvider> {
        if idx < MAX_REAL_LOOKUPS {
            self.provider.as_deref()
        } else {
            None
        }
    }
}

/// One live attempt; any miss becomes a simulated record.
async fn analyze_live(
    provider: &dyn SearchProvider,
    keyword: &str,
    team_name: &str,
) -> AnalysisRecord {
    match provider.organic_results(keyword).await {
        Some(listing) if !listing.items.is_empty() => record_from_listing(keyword, team_name, &listing),
        Some(_) => {
            warn!(keyword, "Search provider returned no items, using simulated data");
            simulation::simulate(keyword)
        }
        None => {
            warn!(keyword, "Search provider lookup failed, using simulated data");
            simulation::simulate(keyword)
        }
    }
}

/// Build a live record from provider results.
pub fn record_from_listing(keyword: &str, team_name: &str, listing: &SerpListing) -> AnalysisRecord {
    record_from_listing_with(keyword, team_name, listing, &mut rand::thread_rng())
}

/// Build a live record with the given generator (used for search volume,
/// which the provider does not report).
pub fn record_from_listing_with<R: Rng>(
    keyword: &str,
    team_name: &str,
    listing: &SerpListing,
    rng: &mut R,
) -> AnalysisRecord {
    let profile = KeywordProfile::classify(keyword);

    let competitors: Vec<String> = listing
        .items
        .iter()
        .take(MAX_COMPETITORS)
        .filter_map(|item| item.domain.as_deref())
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect();

    let position = matcher::find_team_position(
        listing.items.iter().map(|item| item.domain.as_deref()),
        team_name,
    );
    let rank = TeamRank::from_position(position);
    let volume = simulation::search_volume(&profile, rng);

    simulation::build_record(&profile, rank, competitors, volume, true, listing.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::GapType;
    use crate::error::SeoError;
    use crate::provider::SearchResultItem;
    use async_trait::async_trait;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Answers with a fixed listing and counts calls.
    struct StubProvider {
        listing: Option<SerpListing>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(listing: Option<SerpListing>) -> Arc<Self> {
            Arc::new(Self {
                listing,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SearchProvider for StubProvider {
        async fn organic_results(&self, _keyword: &str) -> Option<SerpListing> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.listing.clone()
        }
    }

    fn listing(domains: &[&str], cost: f64) -> SerpListing {
        SerpListing {
            items: domains.iter().map(|d| SearchResultItem::with_domain(*d)).collect(),
            cost,
        }
    }

    fn request(keywords: &[&str]) -> AnalysisRequest {
        AnalysisRequest::new(
            "Boston Bruins",
            Some("NHL".to_string()),
            keywords.iter().map(|k| k.to_string()).collect(),
        )
    }

    fn assert_invariants(response: &AnalysisResponse) {
        for record in &response.analyses {
            assert!((3..=10).contains(&record.opportunity));
            assert!(record.competitors.len() <= MAX_COMPETITORS);
            if !record.is_real_data {
                assert_eq!(record.cost, 0.0);
            }
        }
        for pair in response.analyses.windows(2) {
            assert!(pair[0].opportunity >= pair[1].opportunity);
        }
        assert!(response.summary.real_data_count <= MAX_REAL_LOOKUPS);
        assert_eq!(response.summary, Summary::from_records(&response.analyses));
    }

    #[tokio::test]
    async fn test_simulated_scenario() {
        let analyzer = Analyzer::simulated();
        let response = analyzer
            .analyze(&request(&["bruins tickets", "bruins parking", "first time at td garden"]))
            .await
            .unwrap();

        assert_eq!(response.analyses.len(), 3);
        assert_eq!(response.total_keywords, 3);
        assert!(response.analyses.iter().all(|r| !r.is_real_data && r.cost == 0.0));
        assert_eq!(response.summary.real_data_count, 0);

        let first_timer = response
            .analyses
            .iter()
            .find(|r| r.keyword == "first time at td garden")
            .unwrap();
        assert_eq!(first_timer.gap_type, GapType::FirstTimerExperience);
        assert_invariants(&response);
    }

    #[tokio::test]
    async fn test_only_first_five_processed() {
        let analyzer = Analyzer::simulated();
        let keywords = ["a", "b", "c", "d", "e", "f", "g"];
        let response = analyzer.analyze(&request(&keywords)).await.unwrap();

        assert_eq!(response.analyses.len(), MAX_KEYWORDS);
        assert_eq!(response.total_keywords, 7);
        assert!(response.analyses.iter().all(|r| r.keyword != "f" && r.keyword != "g"));
        assert_invariants(&response);
    }

    #[tokio::test]
    async fn test_live_lookups_capped() {
        let provider = StubProvider::new(Some(listing(&["espn.com", "bruins.com"], 0.002)));
        let analyzer = Analyzer::new(Some(provider.clone()));
        let response = analyzer
            .analyze(&request(&["a", "b", "c", "d", "e"]))
            .await
            .unwrap();

        assert_eq!(provider.calls(), MAX_REAL_LOOKUPS);
        assert_eq!(response.summary.real_data_count, MAX_REAL_LOOKUPS);
        for record in response.analyses.iter().filter(|r| r.is_real_data) {
            assert_eq!(record.team_rank, TeamRank::Position(2));
            assert_eq!(record.cost, 0.002);
            assert!(["a", "b", "c"].contains(&record.keyword.as_str()));
        }
        assert_invariants(&response);
    }

    #[tokio::test]
    async fn test_equal_scores_keep_input_order() {
        // Same listing for every keyword, team absent: all score 8
        let provider = StubProvider::new(Some(listing(&["espn.com"], 0.001)));
        let analyzer = Analyzer::new(Some(provider));
        let response = analyzer.analyze(&request(&["x1", "x2", "x3"])).await.unwrap();

        assert!(response.analyses.iter().all(|r| r.opportunity == 8));
        let order: Vec<&str> = response.analyses.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(order, vec!["x1", "x2", "x3"]);
    }

    #[tokio::test]
    async fn test_provider_failure_falls_back() {
        let provider = StubProvider::new(None);
        let analyzer = Analyzer::new(Some(provider.clone()));
        let response = analyzer
            .analyze(&request(&["bruins tickets", "bruins parking"]))
            .await
            .unwrap();

        assert_eq!(provider.calls(), 2);
        assert_eq!(response.analyses.len(), 2);
        assert!(response.analyses.iter().all(|r| !r.is_real_data));
        assert_invariants(&response);
    }

    #[tokio::test]
    async fn test_empty_listing_falls_back() {
        let provider = StubProvider::new(Some(listing(&[], 0.003)));
        let analyzer = Analyzer::new(Some(provider));
        let response = analyzer.analyze(&request(&["bruins tickets"])).await.unwrap();

        let record = &response.analyses[0];
        assert!(!record.is_real_data);
        assert_eq!(record.cost, 0.0);
    }

    #[tokio::test]
    async fn test_missing_team_name_rejected() {
        let analyzer = Analyzer::simulated();
        let req = AnalysisRequest::new("  ", None, vec!["bruins tickets".to_string()]);
        let err = analyzer.analyze(&req).await.unwrap_err();
        assert!(matches!(err, SeoError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_no_keywords() {
        let analyzer = Analyzer::simulated();
        let response = analyzer.analyze(&request(&[])).await.unwrap();
        assert!(response.analyses.is_empty());
        assert_eq!(response.summary, Summary::default());
    }

    #[test]
    fn test_record_from_listing() {
        let mut rng = StdRng::seed_from_u64(11);
        let listing = SerpListing {
            items: vec![
                SearchResultItem::with_domain("stubhub.com"),
                SearchResultItem::default(),
                SearchResultItem::with_domain("ticketmaster.com"),
                SearchResultItem::with_domain("seatgeek.com"),
                SearchResultItem::with_domain("www.nhl.com"),
                SearchResultItem::with_domain("bostonbruins.com"),
            ],
            cost: 0.0025,
        };
        let record = record_from_listing_with("bruins parking", "Boston Bruins", &listing, &mut rng);

        // Blank domain in the top three is dropped, not replaced
        assert_eq!(record.competitors, vec!["stubhub.com", "ticketmaster.com"]);
        assert_eq!(record.team_rank, TeamRank::Position(6));
        assert_eq!(record.gap_type, GapType::ArenaInformation);
        // 5 + 2 (parking) + 1 (rank 6) + 1 (resale)
        assert_eq!(record.opportunity, 9);
        assert!(record.is_real_data);
        assert_eq!(record.cost, 0.0025);
        assert!((100..400).contains(&record.search_volume));
    }

    #[test]
    fn test_record_team_not_found() {
        let mut rng = StdRng::seed_from_u64(5);
        let listing = listing(&["espn.com", "reddit.com"], 0.001);
        let record = record_from_listing_with("bruins schedule", "Boston Bruins", &listing, &mut rng);
        assert_eq!(record.team_rank, TeamRank::NotFound);
        assert_eq!(record.team_rank.to_string(), "Not found");
        // 5 + 3
        assert_eq!(record.opportunity, 8);
    }
}
