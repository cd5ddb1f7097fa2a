use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::RawId;
use crate::serde_helpers::{lenient, lenient_list};

/// One analysed subtopic of a project, with its risk factors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubtopicRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub subtopic_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub summary: Option<SubtopicSummary>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub risk_factors: Vec<RiskFactorRaw>,
}

impl SubtopicRaw {
    /// The topic label this subtopic is filed under, if any.
    #[must_use]
    pub fn topic_label(&self) -> Option<&str> {
        self.summary.as_ref().and_then(|s| s.topic.as_deref())
    }
}

/// Summary metadata of a subtopic.
///
/// `topic` links the subtopic to a topic by value; see
/// [`Topic::subtopic_label`](crate::enums::Topic::subtopic_label).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubtopicSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<String>,
    /// Subtopic title.
    #[serde(default, alias = "title", deserialize_with = "lenient")]
    pub subtopic: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub overall_summary: Option<String>,
}

/// A named risk factor and its assessment points.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskFactorRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub points: Vec<PointRaw>,
}

/// A single assessment point under a risk factor.
///
/// `category` is kept as raw text; it is parsed with
/// [`PointCategory::parse`](crate::enums::PointCategory::parse) at mapping
/// time so unrecognized values can be reported instead of failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PointRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub main_idea: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub explanation: Option<String>,
}
