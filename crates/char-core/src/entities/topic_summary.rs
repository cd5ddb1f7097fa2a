use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::lenient;

/// Per-topic introduction and summary text for one project.
///
/// `topic` is matched by value against [`Topic::summary_label`]. At most one
/// summary per topic is expected; duplicates resolve to the first match.
///
/// [`Topic::summary_label`]: crate::enums::Topic::summary_label
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TopicSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub topic_introduction: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub topic_summary: Option<String>,
}
