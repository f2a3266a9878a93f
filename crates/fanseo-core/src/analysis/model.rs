//! Analysis domain models.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{SeoError, SeoResult};

/// Position of a team-owned domain in a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRank {
    NotFound,
    /// 1-based.
    Position(u32),
}

impl TeamRank {
    /// Build from a 1-based position, if any.
    pub fn from_position(position: Option<usize>) -> Self {
        match position {
            Some(p) => Self::Position(p as u32),
            None => Self::NotFound,
        }
    }
}

impl std::fmt::Display for TeamRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::Position(p) => write!(f, "#{}", p),
        }
    }
}

impl Serialize for TeamRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Why a keyword represents an unmet content need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapType {
    #[serde(rename = "First-Timer Experience Gap")]
    FirstTimerExperience,
    #[serde(rename = "Arena Information Gap")]
    ArenaInformation,
    #[serde(rename = "Ticket Reseller Dominance")]
    TicketResellerDominance,
    #[serde(rename = "Venue Experience Gap")]
    VenueExperience,
    #[serde(rename = "General Content Gap")]
    GeneralContent,
}

impl GapType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTimerExperience => "First-Timer Experience Gap",
            Self::ArenaInformation => "Arena Information Gap",
            Self::TicketResellerDominance => "Ticket Reseller Dominance",
            Self::VenueExperience => "Venue Experience Gap",
            Self::GeneralContent => "General Content Gap",
        }
    }
}

impl std::fmt::Display for GapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested piece of content for a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub title: String,
    pub format: String,
    pub cta: String,
}

/// One analyzed keyword.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub keyword: String,
    /// Always within 3..=10.
    pub opportunity: u8,
    pub gap_type: GapType,
    pub team_rank: TeamRank,
    /// At most three domains.
    pub competitors: Vec<String>,
    pub content_suggestion: ContentSuggestion,
    pub llm_strategy: String,
    pub search_volume: u32,
    pub is_real_data: bool,
    pub cost: f64,
}

/// Aggregates over a response's records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub high_opportunity: usize,
    pub total_search_volume: u64,
    pub real_data_count: usize,
}

impl Summary {
    /// Threshold for counting a record as high opportunity.
    pub const HIGH_OPPORTUNITY: u8 = 7;

    pub fn from_records(records: &[AnalysisRecord]) -> Self {
        Self {
            high_opportunity: records
                .iter()
                .filter(|r| r.opportunity >= Self::HIGH_OPPORTUNITY)
                .count(),
            total_search_volume: records.iter().map(|r| r.search_volume as u64).sum(),
            real_data_count: records.iter().filter(|r| r.is_real_data).count(),
        }
    }
}

/// A validated analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub team_name: String,
    pub league: Option<String>,
    pub keywords: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(team_name: impl Into<String>, league: Option<String>, keywords: Vec<String>) -> Self {
        Self {
            team_name: team_name.into(),
            league,
            keywords,
        }
    }

    pub fn validate(&self) -> SeoResult<()> {
        if self.team_name.trim().is_empty() {
            return Err(SeoError::validation(MISSING_FIELDS));
        }
        Ok(())
    }
}

const MISSING_FIELDS: &str = "Missing required fields: teamName and keywords array";

/// Raw `POST /api/analyze` body, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePayload {
    pub team_name: Option<String>,
    pub league: Option<String>,
    pub keywords: Option<Value>,
}

impl AnalyzePayload {
    /// Check required fields and convert into a request.
    pub fn into_request(self) -> SeoResult<AnalysisRequest> {
        let team_name = self
            .team_name
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| SeoError::validation(MISSING_FIELDS))?;

        let items = match self.keywords {
            Some(Value::Array(items)) => items,
            _ => return Err(SeoError::validation(MISSING_FIELDS)),
        };

        let keywords = items
            .into_iter()
            .map(|v| match v {
                Value::String(s) => Ok(s),
                other => Err(SeoError::validation(format!(
                    "Invalid keyword: expected a string, got {}",
                    other
                ))),
            })
            .collect::<SeoResult<Vec<_>>>()?;

        Ok(AnalysisRequest {
            team_name,
            league: self.league,
            keywords,
        })
    }
}

/// Full analysis result returned to callers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub success: bool,
    pub team_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    pub total_keywords: usize,
    /// Sorted by opportunity, highest first.
    pub analyses: Vec<AnalysisRecord>,
    pub summary: Summary,
}
