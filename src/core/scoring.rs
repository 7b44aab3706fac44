use crate::core::{
    filters::apply_hard_filters,
    similarity::{jaccard, normalize_tags, theme_overlap},
};
use crate::models::{Availability, Band, Brief, CandidateScore, Creative, ScoreBreakdown, ScoringWeights};

/// Number of objective words folded into the brief's skill tags
const OBJECTIVE_SKILL_WORDS: usize = 3;

/// Projects count at which experience saturates
const EXPERIENCE_CAP: f64 = 200.0;

const MAX_RATING: f64 = 5.0;

/// Budget band used when the brief's budget is missing or unrecognised
const DEFAULT_BUDGET_BAND: Band = Band::Medium;

/// Day-rate position used when the creative's band is unrecognised
const DEFAULT_RATE: f64 = 2.0;

/// Acceptable rate window for a budget band
#[derive(Debug, Clone, Copy, PartialEq)]
struct BudgetWindow {
    min: f64,
    max: f64,
    ideal: f64,
}

const fn budget_window(band: Band) -> BudgetWindow {
    match band {
        Band::Low => BudgetWindow { min: 0.0, max: 2.0, ideal: 1.0 },
        Band::Medium => BudgetWindow { min: 1.0, max: 3.0, ideal: 2.0 },
        Band::High => BudgetWindow { min: 2.0, max: 4.0, ideal: 3.0 },
    }
}

const fn rate_position(band: Band) -> f64 {
    match band {
        Band::Low => 1.0,
        Band::Medium => 2.0,
        Band::High => 3.0,
    }
}

/// Score a creative against a brief
///
/// Hard filters short-circuit: a rejected creative gets no dimension scores.
///
/// Scoring formula:
/// total = (
///     skills_similarity * 0.25 +
///     theme_overlap * 0.20 +
///     portfolio_similarity * 0.15 +
///     budget_fit * 0.15 +
///     availability * 0.15 +
///     performance * 0.10
/// ) * language_bonus
pub fn score_creative(creative: &Creative, brief: &Brief, weights: &ScoringWeights) -> CandidateScore {
    if let Some(reason) = apply_hard_filters(creative, brief) {
        return CandidateScore::Filtered(reason);
    }

    let mut breakdown = ScoreBreakdown {
        skills_similarity: jaccard(&brief_skill_tags(brief), &creative.skills),
        theme_overlap: theme_overlap(&brief.category, &creative.themes),
        portfolio_similarity: jaccard(&brief_portfolio_tags(brief), &creative.portfolio_tags),
        budget_fit: calculate_budget_fit(brief.budget.as_deref(), &creative.day_rate_band),
        availability: calculate_availability_score(&creative.availability),
        performance: calculate_performance_score(creative.rating, creative.completed_projects_count),
        language_bonus: calculate_language_bonus(&creative.languages),
        total: 0.0,
    };
    breakdown.total = breakdown.weighted_sum(weights) * breakdown.language_bonus;

    CandidateScore::Scored(breakdown)
}

/// Formats, the category, and the first few words of the objective
pub fn brief_skill_tags(brief: &Brief) -> Vec<String> {
    let mut tags: Vec<String> = brief.formats.clone();
    tags.push(brief.category.clone());
    tags.extend(
        brief
            .objective
            .split_whitespace()
            .take(OBJECTIVE_SKILL_WORDS)
            .map(str::to_string),
    );
    tags
}

/// Category, the whole objective, and channels, with empty values dropped
pub fn brief_portfolio_tags(brief: &Brief) -> Vec<String> {
    [&brief.category, &brief.objective]
        .into_iter()
        .chain(brief.channels.iter())
        .filter(|t| !t.is_empty())
        .cloned()
        .collect()
}

/// Calculate budget fit (0-1)
/// Peaks when the creative's rate sits at the ideal point of the brief's band
pub fn calculate_budget_fit(budget: Option<&str>, day_rate_band: &str) -> f64 {
    let window = budget_window(
        budget
            .and_then(Band::from_label)
            .unwrap_or(DEFAULT_BUDGET_BAND),
    );
    let rate = Band::from_label(day_rate_band)
        .map(rate_position)
        .unwrap_or(DEFAULT_RATE);

    let deviation = (rate - window.ideal).abs();

    if rate >= window.min && rate <= window.max {
        1.0 - deviation / (window.max - window.min)
    } else {
        (1.0 - deviation / 4.0).max(0.0)
    }
}

/// Calculate availability score (0-1)
#[inline]
pub fn calculate_availability_score(availability: &str) -> f64 {
    match Availability::from_label(availability) {
        Availability::Available => 1.0,
        Availability::Busy => 0.3,
        Availability::Unavailable => 0.0,
        Availability::Unknown => 0.5,
    }
}

/// Calculate performance score (0-1)
/// Rating dominates, completed projects add an experience component
#[inline]
pub fn calculate_performance_score(rating: f64, completed_projects: u32) -> f64 {
    let rating_score = (rating / MAX_RATING).min(1.0);
    let experience_score = (completed_projects as f64 / EXPERIENCE_CAP).min(1.0);

    rating_score * 0.7 + experience_score * 0.3
}

/// Calculate the language multiplier
/// 1.1 for English and Arabic, 1.0 for either one, 0.8 for neither
pub fn calculate_language_bonus<S: AsRef<str>>(languages: &[S]) -> f64 {
    let languages = normalize_tags(languages);
    let english = languages.contains("english");
    let arabic = languages.contains("arabic");

    match (english, arabic) {
        (true, true) => 1.1,
        (true, false) | (false, true) => 1.0,
        (false, false) => 0.8,
    }
}
