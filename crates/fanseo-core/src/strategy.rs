//! Gap classification and content strategy.
//!
//! The three mappings each have their own priority order and do not have to
//! agree. A parking keyword facing resale competitors is an
//! `ArenaInformation` gap because parking is checked first.

use crate::analysis::model::{ContentSuggestion, GapType};
use crate::keyword::{KeywordCategory, KeywordProfile};

/// Competitors that mark a keyword as reseller-dominated.
/// Matched by exact equality, unlike the scorer's resale list.
pub const RESELLER_DOMAINS: &[&str] = &["ticketmaster.com", "stubhub.com", "seatgeek.com"];

const CONTENT_PRIORITY: &[KeywordCategory] = &[
    KeywordCategory::FirstTimer,
    KeywordCategory::Parking,
    KeywordCategory::Seating,
];

const LLM_PRIORITY: &[KeywordCategory] = &[
    KeywordCategory::FirstTimer,
    KeywordCategory::Parking,
    KeywordCategory::Seating,
];

const FIRST_TIMER_LLM: &str = "Structure content as conversational Q&A that answers the \
    questions a first-time fan would ask an AI assistant, with direct, quotable answers \
    near the top of each section.";

const VENUE_LLM: &str = "Add structured data (FAQ and Place schema) with concrete local \
    context: addresses, walking distances, prices and entry times that AI search can cite.";

const GENERAL_LLM: &str = "Write in natural language that mirrors how fans phrase \
    questions, and use consistent team, arena and league terminology throughout.";

/// Classify the content gap for a keyword.
pub fn gap_type(profile: &KeywordProfile, competitors: &[String]) -> GapType {
    if profile.has(KeywordCategory::FirstTimer) {
        GapType::FirstTimerExperience
    } else if profile.has(KeywordCategory::Parking) {
        GapType::ArenaInformation
    } else if competitors
        .iter()
        .any(|c| RESELLER_DOMAINS.contains(&c.as_str()))
    {
        GapType::TicketResellerDominance
    } else if profile.has(KeywordCategory::Seating) || profile.has(KeywordCategory::Arena) {
        GapType::VenueExperience
    } else {
        GapType::GeneralContent
    }
}

/// Suggest a content piece for a keyword.
pub fn content_suggestion(profile: &KeywordProfile) -> ContentSuggestion {
    let (title, format, cta) = match profile.first_of(CONTENT_PRIORITY) {
        Some(KeywordCategory::FirstTimer) => (
            "Complete First-Timer's Guide to Game Day",
            "FAQ guide with arrival timeline and photo walkthrough",
            "Plan your first game",
        ),
        Some(KeywordCategory::Parking) => (
            "Arena Parking & Transportation Guide",
            "Interactive map with lot prices and transit options",
            "Reserve parking before game day",
        ),
        Some(KeywordCategory::Seating) => (
            "Seating Chart & View-From-Seat Guide",
            "Section-by-section chart with sightline photos",
            "Find your best seats",
        ),
        _ => (
            "Comprehensive Fan Guide",
            "Long-form guide with FAQ section",
            "Explore the full fan guide",
        ),
    };

    ContentSuggestion {
        title: title.to_string(),
        format: format.to_string(),
        cta: cta.to_string(),
    }
}

/// AI-search strategy note for a keyword.
pub fn llm_strategy(profile: &KeywordProfile) -> &'static str {
    match profile.first_of(LLM_PRIORITY) {
        Some(KeywordCategory::FirstTimer) => FIRST_TIMER_LLM,
        Some(KeywordCategory::Parking) | Some(KeywordCategory::Seating) => VENUE_LLM,
        _ => GENERAL_LLM,
    }
}
