//! Topic and category enums for Charview.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! except [`Topic`], which serializes as its route slug.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lowercase, trim, and fold `-` / space separators to `_`.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// PointCategory
// ---------------------------------------------------------------------------

/// Category of a risk-factor point, an insight, or a risk factor's badge.
///
/// `Mixed` is the undifferentiated category: it is what unrecognized source
/// values degrade to, and what a risk factor shows when no single category
/// dominates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PointCategory {
    Strength,
    Consideration,
    RecommendedAction,
    Mixed,
}

impl PointCategory {
    /// The categories that take part in dominance tallies, in display order.
    pub const TALLIED: [Self; 3] = [Self::Strength, Self::Consideration, Self::RecommendedAction];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Consideration => "consideration",
            Self::RecommendedAction => "recommended_action",
            Self::Mixed => "mixed",
        }
    }

    /// Parse a raw source category.
    ///
    /// Accepts singular and plural forms in any case, with `_`, `-` or space
    /// separators (`"Strengths"`, `"recommended-action"`). Returns `None` for
    /// anything outside the lookup.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "strength" | "strengths" => Some(Self::Strength),
            "consideration" | "considerations" => Some(Self::Consideration),
            "recommended_action" | "recommended_actions" | "recommendation"
            | "recommendations" | "action" | "actions" => Some(Self::RecommendedAction),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Parse an aggregate insight type such as `"main_strengths"`.
    ///
    /// The `main_` prefix is optional. `Mixed` is never an insight bucket, so
    /// `"main_mixed"` yields `None` like any other unrecognized value.
    #[must_use]
    pub fn from_insight_type(raw: &str) -> Option<Self> {
        let normalized = normalize_label(raw);
        let stripped = normalized.strip_prefix("main_").unwrap_or(&normalized);
        Self::parse(stripped).filter(|category| *category != Self::Mixed)
    }
}

impl fmt::Display for PointCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Topic
// ---------------------------------------------------------------------------

/// The five analysis topics a project is reviewed under.
///
/// Each topic carries two labels used to locate its raw data by value:
///
/// ```text
/// slug               summary label          subtopic label
/// carbon-integrity   Carbon Integrity       Climate Science
/// delivery           Delivery Risk          Delivery Risk
/// environment        Environmental Impact   Environmental Impact
/// policy             Policy                 Policy & Regulation
/// social             Social Impact          Social Impact
/// ```
///
/// The subtopic label differs from the summary label for some topics. Raw
/// subtopics are tagged with the subtopic label only; matching them against
/// the summary label drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    CarbonIntegrity,
    Delivery,
    Environment,
    Policy,
    Social,
}

impl Topic {
    /// All topics in navigation order.
    pub const ALL: [Self; 5] = [
        Self::CarbonIntegrity,
        Self::Delivery,
        Self::Environment,
        Self::Policy,
        Self::Social,
    ];

    /// Route slug, one page per slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CarbonIntegrity => "carbon-integrity",
            Self::Delivery => "delivery",
            Self::Environment => "environment",
            Self::Policy => "policy",
            Self::Social => "social",
        }
    }

    /// Value of `TopicSummary.topic` for this topic.
    #[must_use]
    pub const fn summary_label(self) -> &'static str {
        match self {
            Self::CarbonIntegrity => "Carbon Integrity",
            Self::Delivery => "Delivery Risk",
            Self::Environment => "Environmental Impact",
            Self::Policy => "Policy",
            Self::Social => "Social Impact",
        }
    }

    /// Value of a raw subtopic's `summary.topic` for this topic.
    #[must_use]
    pub const fn subtopic_label(self) -> &'static str {
        match self {
            Self::CarbonIntegrity => "Climate Science",
            Self::Delivery => "Delivery Risk",
            Self::Environment => "Environmental Impact",
            Self::Policy => "Policy & Regulation",
            Self::Social => "Social Impact",
        }
    }

    /// Page title shown when the project has no data for this topic.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::CarbonIntegrity => "Carbon Integrity & Durability",
            Self::Delivery => "Delivery Risk",
            Self::Environment => "Environmental Impact",
            Self::Policy => "Policy & Regulatory Landscape",
            Self::Social => "Social Impact",
        }
    }

    #[must_use]
    pub const fn default_description(self) -> &'static str {
        match self {
            Self::CarbonIntegrity => {
                "How robust the project's carbon removal claims are, from measurement to long-term storage."
            }
            Self::Delivery => {
                "Whether the project can deliver the credits it has sold, on time and at volume."
            }
            Self::Environment => {
                "The project's effects on soils, water, air and biodiversity beyond carbon."
            }
            Self::Policy => {
                "The regulatory and policy context the project operates in and how it may change."
            }
            Self::Social => {
                "How the project affects local communities, workers and other stakeholders."
            }
        }
    }

    /// Resolve a page key to a topic.
    ///
    /// Matches the route slug, the legacy short slug `integrity`, the summary
    /// label and the default title, all case-insensitively and with `-`, `_`
    /// and spaces treated alike. `"delivery"`, `"Delivery Risk"` and
    /// `"DELIVERY-RISK"` all resolve to [`Topic::Delivery`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let wanted = normalize_label(key);
        if wanted == "integrity" {
            return Some(Self::CarbonIntegrity);
        }
        Self::ALL.into_iter().find(|topic| {
            [topic.slug(), topic.summary_label(), topic.default_title()]
                .into_iter()
                .any(|label| normalize_label(label) == wanted)
        })
    }

    /// Case-insensitive comparison against the summary label.
    #[must_use]
    pub fn matches_summary(self, raw_topic: &str) -> bool {
        raw_topic.trim().eq_ignore_ascii_case(self.summary_label())
    }

    /// Case-insensitive comparison against the subtopic label.
    #[must_use]
    pub fn matches_subtopic(self, raw_topic: &str) -> bool {
        raw_topic.trim().eq_ignore_ascii_case(self.subtopic_label())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Topic {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| CoreError::UnknownTopic(s.to_string()))
    }
}
