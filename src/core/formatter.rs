use crate::core::matcher::MatchOutcome;
use crate::models::{
    Brief, BriefSummary, MatchResponse, MatchResult, RankedCandidate, ScoreBreakdown,
    ScoreBreakdownView, GLOBAL_REGION,
};

const DEFAULT_BUDGET_LABEL: &str = "medium";

/// Round to two decimal places
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Shape a match outcome into the response consumed by callers
pub fn format_response(brief: &Brief, outcome: &MatchOutcome<'_>) -> MatchResponse {
    MatchResponse {
        brief_summary: summarize_brief(brief),
        total_candidates: outcome.total_candidates,
        filtered_candidates: outcome.ranked.len(),
        top_matches: outcome
            .ranked
            .iter()
            .enumerate()
            .map(|(index, candidate)| format_result(index + 1, candidate))
            .collect(),
    }
}

pub fn summarize_brief(brief: &Brief) -> BriefSummary {
    BriefSummary {
        category: brief.category.clone(),
        region: brief
            .region
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| GLOBAL_REGION.to_string()),
        formats: brief.formats.clone(),
        budget: brief
            .budget
            .clone()
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BUDGET_LABEL.to_string()),
    }
}

fn format_result(rank: usize, candidate: &RankedCandidate<'_>) -> MatchResult {
    let creative = candidate.creative;

    MatchResult {
        rank,
        creative_id: creative.id.clone(),
        name: creative.name.clone(),
        location: creative.location(),
        skills: creative.skills.clone(),
        mediums: creative.mediums.clone(),
        themes: creative.themes.clone(),
        day_rate_band: creative.day_rate_band.clone(),
        rating: creative.rating,
        completed_projects: creative.completed_projects_count,
        availability: creative.availability.clone(),
        total_score: round2(candidate.breakdown.total),
        score_breakdown: round_breakdown(&candidate.breakdown),
    }
}

fn round_breakdown(breakdown: &ScoreBreakdown) -> ScoreBreakdownView {
    ScoreBreakdownView {
        skills_similarity: round2(breakdown.skills_similarity),
        theme_overlap: round2(breakdown.theme_overlap),
        portfolio_similarity: round2(breakdown.portfolio_similarity),
        budget_fit: round2(breakdown.budget_fit),
        availability: round2(breakdown.availability),
        performance: round2(breakdown.performance),
        language_bonus: round2(breakdown.language_bonus),
    }
}
