//! View-model types consumed by the rendering layer.
//!
//! Field names serialize in camelCase. Every field is always populated:
//! upstream gaps are resolved to placeholder text by the mappers.

use char_core::enums::{PointCategory, Topic};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Heading above a topic's summary text.
pub const SUMMARY_TITLE: &str = "What you need to know";

// ---------------------------------------------------------------------------
// Topic tree
// ---------------------------------------------------------------------------

/// Everything a topic page renders.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicData {
    pub topic_title: String,
    pub topic_description: String,
    pub topic_summary: String,
    pub summary_title: String,
    pub subtopics: Vec<SubtopicData>,
}

impl TopicData {
    /// Default content for a supported topic the project has no data for.
    #[must_use]
    pub fn placeholder(topic: Topic) -> Self {
        Self {
            topic_title: topic.default_title().to_string(),
            topic_description: topic.default_description().to_string(),
            topic_summary: String::new(),
            summary_title: SUMMARY_TITLE.to_string(),
            subtopics: Vec::new(),
        }
    }

    /// Content for a topic key that names no supported topic.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            topic_title: "Topic not available".to_string(),
            topic_description: "Information for this topic is not available.".to_string(),
            topic_summary: String::new(),
            summary_title: SUMMARY_TITLE.to_string(),
            subtopics: Vec::new(),
        }
    }

    /// Whether there is anything beyond placeholder text to show.
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.subtopics.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubtopicData {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub risk_factors: Vec<ComponentRiskFactor>,
}

/// A risk factor card. `kind` is the badge: the dominant point category.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRiskFactor {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PointCategory,
    pub points: Vec<RiskFactorPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactorPoint {
    pub id: u64,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: PointCategory,
}

// ---------------------------------------------------------------------------
// Overview
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBackgroundData {
    pub project_name: String,
    pub description: String,
    pub location: String,
    pub start_date: String,
    pub feedstock_types: Vec<String>,
    pub stakeholders: Vec<String>,
}

/// Headline insights grouped into the three overview columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInsightsData {
    pub strengths: Vec<InsightItem>,
    pub considerations: Vec<InsightItem>,
    pub recommended_actions: Vec<InsightItem>,
}

impl ProjectInsightsData {
    #[must_use]
    pub fn total(&self) -> usize {
        self.strengths.len() + self.considerations.len() + self.recommended_actions.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightItem {
    pub topic: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uses_topic_defaults() {
        let data = TopicData::placeholder(Topic::Policy);
        assert_eq!(data.topic_title, "Policy & Regulatory Landscape");
        assert_eq!(data.summary_title, SUMMARY_TITLE);
        assert!(data.topic_summary.is_empty());
        assert!(!data.has_content());
    }

    #[test]
    fn risk_factor_serializes_kind_as_type() {
        let factor = ComponentRiskFactor {
            id: 3,
            name: "Permanence".into(),
            kind: PointCategory::Consideration,
            points: vec![RiskFactorPoint {
                id: 9,
                text: "Stable for centuries".into(),
                kind: PointCategory::Strength,
            }],
        };
        let json = serde_json::to_value(&factor).unwrap();
        assert_eq!(json["type"], "consideration");
        assert_eq!(json["points"][0]["type"], "strength");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn topic_data_serializes_camel_case() {
        let json = serde_json::to_value(TopicData::unavailable()).unwrap();
        assert!(json.get("topicTitle").is_some());
        assert!(json.get("summaryTitle").is_some());
        assert_eq!(json["subtopics"], serde_json::json!([]));
    }
}
