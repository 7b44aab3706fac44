use serde::{Deserialize, Serialize};

/// Marketing brief as it reaches the match engine.
///
/// `category` and `objective` are guaranteed non-empty by the intake layer
/// (see [`crate::models::MatchRequest`]); the engine does not re-check them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Brief {
    pub objective: String,
    pub category: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub formats: Vec<String>,
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub assets: Option<String>,
}

impl Brief {
    /// Region used for the hard filter, `None` when the brief targets everyone
    pub fn region_constraint(&self) -> Option<&str> {
        match self.region.as_deref() {
            None | Some("") | Some(GLOBAL_REGION) => None,
            Some(region) => Some(region),
        }
    }
}

/// Region value that disables the region filter
pub const GLOBAL_REGION: &str = "Global";

/// Creative professional from the roster dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creative {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub mediums: Vec<String>,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub portfolio_tags: Vec<String>,
    #[serde(default)]
    pub day_rate_band: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub completed_projects_count: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Creative {
    /// Display location, "city, country"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

/// Coarse three-level band shared by budgets and day rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    /// Case-insensitive parse; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Band::Low),
            "medium" => Some(Band::Medium),
            "high" => Some(Band::High),
            _ => None,
        }
    }
}

/// Creative availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Busy,
    Unavailable,
    Unknown,
}

impl Availability {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "available" => Availability::Available,
            "busy" => Availability::Busy,
            "unavailable" => Availability::Unavailable,
            _ => Availability::Unknown,
        }
    }
}

/// Hard filter that rejected a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterReason {
    Region,
    Medium,
}

impl FilterReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterReason::Region => "region",
            FilterReason::Medium => "medium",
        }
    }
}

/// Per-dimension scores for a candidate that passed both hard filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills_similarity: f64,
    pub theme_overlap: f64,
    pub portfolio_similarity: f64,
    pub budget_fit: f64,
    pub availability: f64,
    pub performance: f64,
    pub language_bonus: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Weighted sum of the relevance dimensions, before the language multiplier
    pub fn weighted_sum(&self, weights: &ScoringWeights) -> f64 {
        self.skills_similarity * weights.skills
            + self.theme_overlap * weights.theme
            + self.portfolio_similarity * weights.portfolio
            + self.budget_fit * weights.budget
            + self.availability * weights.availability
            + self.performance * weights.performance
    }
}

/// Outcome of scoring one creative against a brief
///
/// A filtered candidate carries only the reason it was rejected; a scored
/// candidate may still total exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateScore {
    Filtered(FilterReason),
    Scored(ScoreBreakdown),
}

impl CandidateScore {
    pub fn total(&self) -> f64 {
        match self {
            CandidateScore::Filtered(_) => 0.0,
            CandidateScore::Scored(breakdown) => breakdown.total,
        }
    }

    pub fn filtered_out(&self) -> Option<FilterReason> {
        match self {
            CandidateScore::Filtered(reason) => Some(*reason),
            CandidateScore::Scored(_) => None,
        }
    }

    /// 1.0 when the region filter passed, 0.0 otherwise
    pub fn region_filter(&self) -> f64 {
        match self {
            CandidateScore::Filtered(FilterReason::Region) => 0.0,
            _ => 1.0,
        }
    }

    /// 1.0 when the medium filter passed; `None` if it never ran
    pub fn medium_filter(&self) -> Option<f64> {
        match self {
            CandidateScore::Filtered(FilterReason::Region) => None,
            CandidateScore::Filtered(FilterReason::Medium) => Some(0.0),
            CandidateScore::Scored(_) => Some(1.0),
        }
    }

    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        match self {
            CandidateScore::Scored(breakdown) => Some(breakdown),
            CandidateScore::Filtered(_) => None,
        }
    }
}

/// A creative that survived filtering, with its score
#[derive(Debug, Clone)]
pub struct RankedCandidate<'a> {
    pub creative: &'a Creative,
    pub breakdown: ScoreBreakdown,
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub theme: f64,
    pub portfolio: f64,
    pub budget: f64,
    pub availability: f64,
    pub performance: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.theme + self.portfolio + self.budget + self.availability + self.performance
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.25,
            theme: 0.20,
            portfolio: 0.15,
            budget: 0.15,
            availability: 0.15,
            performance: 0.10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = ScoringWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_band_parse_is_case_insensitive() {
        assert_eq!(Band::from_label("HIGH"), Some(Band::High));
        assert_eq!(Band::from_label(" Medium "), Some(Band::Medium));
        assert_eq!(Band::from_label("premium"), None);
    }

    #[test]
    fn test_region_constraint() {
        let mut brief = Brief {
            objective: "launch".to_string(),
            category: "food".to_string(),
            ..Default::default()
        };
        assert_eq!(brief.region_constraint(), None);

        brief.region = Some("Global".to_string());
        assert_eq!(brief.region_constraint(), None);

        brief.region = Some("UAE".to_string());
        assert_eq!(brief.region_constraint(), Some("UAE"));
    }

    #[test]
    fn test_filtered_candidate_totals_zero() {
        let score = CandidateScore::Filtered(FilterReason::Region);
        assert_eq!(score.total(), 0.0);
        assert_eq!(score.region_filter(), 0.0);
        assert_eq!(score.medium_filter(), None);
        assert!(score.breakdown().is_none());
    }
}
