//! Simulated analysis records.
//!
//! Used when the live provider is unavailable, fails, or is skipped for cost
//! control. Records go through the same scorer and strategist as live ones.

use rand::Rng;

use crate::analysis::model::{AnalysisRecord, TeamRank};
use crate::keyword::{KeywordCategory, KeywordProfile};
use crate::{scorer, strategy};

/// Probability that a simulated team does not rank at all.
pub const NOT_FOUND_PROBABILITY: f64 = 0.6;

const COMPETITOR_PRIORITY: &[KeywordCategory] = &[
    KeywordCategory::Tickets,
    KeywordCategory::Parking,
    KeywordCategory::FirstTimer,
];

const VOLUME_PRIORITY: &[KeywordCategory] = &[
    KeywordCategory::Tickets,
    KeywordCategory::FirstTimer,
    KeywordCategory::Parking,
];

/// Synthetic competitor set for a keyword.
pub fn simulated_competitors(profile: &KeywordProfile) -> Vec<String> {
    let sites: [&str; 3] = match profile.first_of(COMPETITOR_PRIORITY) {
        Some(KeywordCategory::Tickets) => ["ticketmaster.com", "stubhub.com", "seatgeek.com"],
        Some(KeywordCategory::Parking) => ["spothero.com", "parkwhiz.com", "parkmobile.io"],
        Some(KeywordCategory::FirstTimer) => ["reddit.com", "tripadvisor.com", "quora.com"],
        _ => ["espn.com", "bleacherreport.com", "wikipedia.org"],
    };
    sites.iter().map(|s| s.to_string()).collect()
}

/// Half-open search volume range for a keyword.
pub fn volume_range(profile: &KeywordProfile) -> std::ops::Range<u32> {
    match profile.first_of(VOLUME_PRIORITY) {
        Some(KeywordCategory::Tickets) => 200..1000,
        Some(KeywordCategory::FirstTimer) => 150..550,
        Some(KeywordCategory::Parking) => 100..400,
        _ => 50..250,
    }
}

/// Draw a search volume from the keyword's category range.
pub fn search_volume<R: Rng>(profile: &KeywordProfile, rng: &mut R) -> u32 {
    rng.gen_range(volume_range(profile))
}

/// Draw a team rank: usually not found, otherwise uniform in 1..=10.
pub fn team_rank<R: Rng>(rng: &mut R) -> TeamRank {
    if rng.gen_bool(NOT_FOUND_PROBABILITY) {
        TeamRank::NotFound
    } else {
        TeamRank::Position(rng.gen_range(1..=10))
    }
}

/// Simulate a record using the thread-local generator.
pub fn simulate(keyword: &str) -> AnalysisRecord {
    simulate_with(keyword, &mut rand::thread_rng())
}

/// Simulate a record with the given generator.
pub fn simulate_with<R: Rng>(keyword: &str, rng: &mut R) -> AnalysisRecord {
    let profile = KeywordProfile::classify(keyword);
    let competitors = simulated_competitors(&profile);
    let rank = team_rank(rng);
    let volume = search_volume(&profile, rng);

    build_record(&profile, rank, competitors, volume, false, 0.0)
}

/// Assemble a record from its inputs. Shared by live and simulated paths.
pub(crate) fn build_record(
    profile: &KeywordProfile,
    rank: TeamRank,
    competitors: Vec<String>,
    search_volume: u32,
    is_real_data: bool,
    cost: f64,
) -> AnalysisRecord {
    AnalysisRecord {
        keyword: profile.keyword().to_string(),
        opportunity: scorer::score_profile(profile, rank, &competitors),
        gap_type: strategy::gap_type(profile, &competitors),
        team_rank: rank,
        content_suggestion: strategy::content_suggestion(profile),
        llm_strategy: strategy::llm_strategy(profile).to_string(),
        competitors,
        search_volume,
        is_real_data,
        cost,
    }
}
