//! Opportunity scoring.

use crate::analysis::model::TeamRank;
use crate::keyword::{KeywordCategory, KeywordProfile};

/// Lowest possible opportunity score.
pub const MIN_SCORE: u8 = 3;

/// Highest possible opportunity score.
pub const MAX_SCORE: u8 = 10;

const BASE_SCORE: i32 = 5;

/// Resale sites whose presence among competitors adds a point.
/// Matched as substrings of each competitor domain.
pub const RESALE_DOMAINS: &[&str] = &[
    "ticketmaster.com",
    "stubhub.com",
    "seatgeek.com",
    "vividseats.com",
];

/// Score a keyword from its text, the team's rank and the competitor set.
pub fn opportunity_score(keyword: &str, rank: TeamRank, competitors: &[String]) -> u8 {
    score_profile(&KeywordProfile::classify(keyword), rank, competitors)
}

/// Score an already classified keyword. Terms are additive, then clamped.
pub fn score_profile(profile: &KeywordProfile, rank: TeamRank, competitors: &[String]) -> u8 {
    let mut score = BASE_SCORE;

    if profile.has(KeywordCategory::FirstTimer) {
        score += 3;
    }
    if profile.has(KeywordCategory::Parking) {
        score += 2;
    }
    if profile.has(KeywordCategory::Tickets) {
        score += 2;
    }
    if profile.has(KeywordCategory::Seating) {
        score += 1;
    }

    score += rank_adjustment(rank);

    if has_resale_competitor(competitors) {
        score += 1;
    }

    score.clamp(MIN_SCORE as i32, MAX_SCORE as i32) as u8
}

/// Not ranking at all is the biggest opening; a top-3 rank is a small penalty.
fn rank_adjustment(rank: TeamRank) -> i32 {
    match rank {
        TeamRank::NotFound => 3,
        TeamRank::Position(p) if p > 10 => 2,
        TeamRank::Position(6..=10) => 1,
        TeamRank::Position(4..=5) => 0,
        TeamRank::Position(_) => -1,
    }
}

fn has_resale_competitor(competitors: &[String]) -> bool {
    competitors
        .iter()
        .any(|c| RESALE_DOMAINS.iter().any(|r| c.contains(r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_base_score_mid_rank() {
        // 5 + 0 (rank 4)
        assert_eq!(opportunity_score("bruins schedule", TeamRank::Position(4), &[]), 5);
    }

    #[test]
    fn test_not_found_bonus() {
        assert_eq!(opportunity_score("bruins schedule", TeamRank::NotFound, &[]), 8);
    }

    #[test]
    fn test_rank_adjustments() {
        let score = |p| opportunity_score("bruins schedule", TeamRank::Position(p), &[]);
        assert_eq!(score(1), 4);
        assert_eq!(score(3), 4);
        assert_eq!(score(5), 5);
        assert_eq!(score(6), 6);
        assert_eq!(score(10), 6);
        assert_eq!(score(11), 7);
    }

    #[test]
    fn test_additive_bonuses_clamp_high() {
        // 5 + 3 + 2 + 2 + 1 + 3 + 1 = 17 -> 10
        let score = opportunity_score(
            "first time cheap tickets parking seating",
            TeamRank::NotFound,
            &domains(&["stubhub.com"]),
        );
        assert_eq!(score, MAX_SCORE);
    }

    #[test]
    fn test_clamp_low_never_triggers_below_min() {
        // 5 - 1 = 4, the floor is never reached from base but still holds
        let score = opportunity_score("bruins roster", TeamRank::Position(1), &[]);
        assert!(score >= MIN_SCORE);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_resale_substring_match() {
        let with = opportunity_score(
            "bruins schedule",
            TeamRank::Position(4),
            &domains(&["www.vividseats.com"]),
        );
        let without = opportunity_score(
            "bruins schedule",
            TeamRank::Position(4),
            &domains(&["espn.com"]),
        );
        assert_eq!(with, without + 1);
    }

    #[test]
    fn test_parking_and_seating() {
        // 5 + 2 + 1 + 1 (rank 7)
        assert_eq!(
            opportunity_score("parking and seating", TeamRank::Position(7), &[]),
            9
        );
    }

    #[test]
    fn test_deterministic() {
        let comps = domains(&["ticketmaster.com", "espn.com"]);
        let a = opportunity_score("bruins tickets", TeamRank::Position(2), &comps);
        let b = opportunity_score("bruins tickets", TeamRank::Position(2), &comps);
        assert_eq!(a, b);
    }
}
