use serde::{Deserialize, Serialize};

use crate::models::domain::Creative;

/// Response for the match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub brief_summary: BriefSummary,
    pub total_candidates: usize,
    pub filtered_candidates: usize,
    pub top_matches: Vec<MatchResult>,
}

/// Echo of the brief fields that drove the ranking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefSummary {
    pub category: String,
    pub region: String,
    pub formats: Vec<String>,
    pub budget: String,
}

/// One ranked creative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub rank: usize,
    pub creative_id: String,
    pub name: String,
    pub location: String,
    pub skills: Vec<String>,
    pub mediums: Vec<String>,
    pub themes: Vec<String>,
    pub day_rate_band: String,
    pub rating: f64,
    pub completed_projects: u32,
    pub availability: String,
    pub total_score: f64,
    pub score_breakdown: ScoreBreakdownView,
}

/// Rounded per-dimension scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownView {
    pub skills_similarity: f64,
    pub theme_overlap: f64,
    pub portfolio_similarity: f64,
    pub budget_fit: f64,
    pub availability: f64,
    pub performance: f64,
    pub language_bonus: f64,
}

/// Roster listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub total: usize,
    pub creatives: Vec<Creative>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub roster_size: Option<usize>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
