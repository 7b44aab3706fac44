use crate::core::scoring::score_creative;
use crate::models::{Brief, CandidateScore, Creative, RankedCandidate, ScoringWeights};

/// Default number of creatives returned per brief
pub const DEFAULT_TOP_N: usize = 10;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome<'a> {
    pub ranked: Vec<RankedCandidate<'a>>,
    pub total_candidates: usize,
}

/// Main matching orchestrator - runs the filter, score and rank pipeline
///
/// # Pipeline Stages
/// 1. Region hard filter
/// 2. Medium/format hard filter
/// 3. Weighted multi-dimension scoring
/// 4. Drop zero scores, stable sort, truncate to top-N
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    top_n: usize,
}

impl Matcher {
    /// Matcher with the fixed scoring weights, keeping at most `top_n` results
    pub fn with_top_n(top_n: usize) -> Self {
        let weights = ScoringWeights::default();
        debug_assert!((weights.sum() - 1.0).abs() < 1e-9, "weights must sum to 1");

        Self { weights, top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Score every creative in the roster, in roster order
    pub fn score_all(&self, brief: &Brief, roster: &[Creative]) -> Vec<CandidateScore> {
        roster
            .iter()
            .map(|creative| score_creative(creative, brief, &self.weights))
            .collect()
    }

    /// Rank the roster for a brief
    ///
    /// # Arguments
    /// * `brief` - A validated brief (category and objective present)
    /// * `roster` - The full creative roster, read-only
    ///
    /// # Returns
    /// MatchOutcome with at most `top_n` candidates, best first. Ties keep
    /// roster order.
    pub fn find_matches<'a>(&self, brief: &Brief, roster: &'a [Creative]) -> MatchOutcome<'a> {
        let total_candidates = roster.len();

        let mut ranked: Vec<RankedCandidate<'a>> = roster
            .iter()
            .zip(self.score_all(brief, roster))
            .filter_map(|(creative, score)| match score {
                CandidateScore::Filtered(reason) => {
                    tracing::debug!(creative_id = %creative.id, reason = reason.as_str(), "Candidate filtered");
                    None
                }
                CandidateScore::Scored(breakdown) if breakdown.total > 0.0 => {
                    Some(RankedCandidate { creative, breakdown })
                }
                CandidateScore::Scored(_) => {
                    tracing::debug!(creative_id = %creative.id, "Candidate scored zero");
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal totals keep roster order
        ranked.sort_by(|a, b| b.breakdown.total.total_cmp(&a.breakdown.total));
        ranked.truncate(self.top_n);

        MatchOutcome {
            ranked,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_top_n(DEFAULT_TOP_N)
    }
}
