use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{Brief, GLOBAL_REGION};

const DEFAULT_TONE: &str = "Professional";
const DEFAULT_TIMELINE: &str = "4 weeks";
const DEFAULT_BUDGET: &str = "medium";
const DEFAULT_ASSETS: &str = "Logo and brand colors available";

/// Request to match creatives against a brief
///
/// `channels` and `formats` accept either a single string or an array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1, message = "objective is required"))]
    #[serde(default)]
    pub objective: String,
    #[validate(length(min = 1, message = "category is required"))]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub channels: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
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

impl MatchRequest {
    /// Convert a validated request into a brief, filling intake defaults
    pub fn into_brief(self) -> Brief {
        Brief {
            objective: self.objective,
            category: self.category,
            audience: non_empty(self.audience),
            region: Some(non_empty(self.region).unwrap_or_else(|| GLOBAL_REGION.to_string())),
            channels: self.channels,
            formats: self.formats,
            tone: Some(non_empty(self.tone).unwrap_or_else(|| DEFAULT_TONE.to_string())),
            timeline: Some(non_empty(self.timeline).unwrap_or_else(|| DEFAULT_TIMELINE.to_string())),
            budget: Some(non_empty(self.budget).unwrap_or_else(|| DEFAULT_BUDGET.to_string())),
            assets: Some(non_empty(self.assets).unwrap_or_else(|| DEFAULT_ASSETS.to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept `"video"`, `["video", "photo"]` or `null`
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::One(single)) => vec![single],
        Some(OneOrMany::Many(many)) => many,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_formats_are_coerced() {
        let req: MatchRequest = serde_json::from_str(
            r#"{"objective": "launch app", "category": "technology", "formats": "video", "channels": ["instagram"]}"#,
        )
        .unwrap();

        assert_eq!(req.formats, vec!["video"]);
        assert_eq!(req.channels, vec!["instagram"]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_null_channels_become_empty() {
        let req: MatchRequest = serde_json::from_str(
            r#"{"objective": "launch", "category": "food", "channels": null}"#,
        )
        .unwrap();

        assert!(req.channels.is_empty());
        assert!(req.formats.is_empty());
    }

    #[test]
    fn test_missing_category_fails_validation() {
        let req: MatchRequest = serde_json::from_str(r#"{"objective": "launch app"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("category"));
    }

    #[test]
    fn test_into_brief_fills_defaults() {
        let req = MatchRequest {
            objective: "grow awareness".to_string(),
            category: "travel".to_string(),
            region: Some("".to_string()),
            ..Default::default()
        };

        let brief = req.into_brief();
        assert_eq!(brief.region.as_deref(), Some("Global"));
        assert_eq!(brief.budget.as_deref(), Some("medium"));
        assert_eq!(brief.tone.as_deref(), Some("Professional"));
        assert_eq!(brief.timeline.as_deref(), Some("4 weeks"));
    }
}
