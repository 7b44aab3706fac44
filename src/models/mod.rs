// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Availability, Band, Brief, CandidateScore, Creative, FilterReason, RankedCandidate,
    ScoreBreakdown, ScoringWeights, GLOBAL_REGION,
};
pub use requests::MatchRequest;
pub use responses::{
    BriefSummary, ErrorResponse, HealthResponse, MatchResponse, MatchResult, RosterResponse,
    ScoreBreakdownView,
};
