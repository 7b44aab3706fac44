// Core algorithm exports
pub mod filters;
pub mod formatter;
pub mod matcher;
pub mod scoring;
pub mod similarity;

pub use filters::{apply_hard_filters, matches_medium, matches_region};
pub use formatter::{format_response, round2, summarize_brief};
pub use matcher::{MatchOutcome, Matcher, DEFAULT_TOP_N};
pub use scoring::score_creative;
pub use similarity::{jaccard, related_themes, theme_overlap};
