use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::serde_helpers::lenient;

/// A headline insight for the project overview.
///
/// `insight_type` is one of `main_strengths`, `main_considerations`,
/// `main_recommended_actions` in well-formed data. `topic` is free text and
/// is not checked against the topic table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightRaw {
    #[serde(default, deserialize_with = "lenient")]
    pub insight_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub main_idea: Option<String>,
}
