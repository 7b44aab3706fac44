//! Creative Match - brief-to-creative ranking service
//!
//! This library scores a roster of creative professionals against a
//! marketing brief. It runs hard filters (region, medium), set-overlap
//! similarity and weighted scoring, and returns a ranked top-N list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{format_response, jaccard, theme_overlap, MatchOutcome, Matcher};
pub use models::{Brief, CandidateScore, Creative, MatchRequest, MatchResponse, ScoreBreakdown, ScoringWeights};

/// Rank `roster` for `brief` and shape the response, using the default top-N
pub fn match_brief(brief: &Brief, roster: &[Creative]) -> MatchResponse {
    let outcome = Matcher::default().find_matches(brief, roster);
    format_response(brief, &outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let brief = Brief {
            objective: "launch app".to_string(),
            category: "technology".to_string(),
            formats: vec!["video".to_string()],
            ..Default::default()
        };

        let response = match_brief(&brief, &[]);
        assert_eq!(response.total_candidates, 0);
        assert!(response.top_matches.is_empty());
        assert_eq!(jaccard(&["a"], &["a"]), 1.0);
    }
}
