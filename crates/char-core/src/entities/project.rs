use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{InsightRaw, SubtopicRaw, TopicSummary};
use crate::serde_helpers::{lenient, lenient_list, lenient_or_default};

/// The denormalized per-project record served by the store.
///
/// `project_id` is the stable key. The record is read-only for everything in
/// this workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectAggregate {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    /// Free-form start date, usually ISO `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub feedstock_type: Option<OneOrMany>,
    #[serde(default, deserialize_with = "lenient")]
    pub stakeholders: Option<OneOrMany>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub topic_summaries: Vec<TopicSummary>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub subtopics: Vec<SubtopicRaw>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub main_insights: Vec<InsightRaw>,
}

/// A column that holds either one value or a list of values.
///
/// Non-string entries of a list are skipped when decoding.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for OneOrMany {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match Value::deserialize(d)? {
            Value::String(value) => Ok(Self::One(value)),
            Value::Array(items) => Ok(Self::Many(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(value) => Some(value),
                        _ => None,
                    })
                    .collect(),
            )),
            other => Err(D::Error::custom(format!(
                "expected a string or a list of strings, found {other}"
            ))),
        }
    }
}

impl OneOrMany {
    /// Entries as a list; a scalar becomes a single-element list.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

/// Row of the project list view: just enough to render a card and search.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectListing {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub project_id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub feedstock_type: Option<OneOrMany>,
}

impl From<&ProjectAggregate> for ProjectListing {
    fn from(aggregate: &ProjectAggregate) -> Self {
        Self {
            project_id: aggregate.project_id.clone(),
            project_name: aggregate.project_name.clone(),
            location: aggregate.location.clone(),
            start_date: aggregate.start_date.clone(),
            feedstock_type: aggregate.feedstock_type.clone(),
        }
    }
}
