//! Page assembly from a single fetched aggregate.

use char_core::entities::ProjectAggregate;
use char_core::enums::Topic;
use char_core::serde_helpers::non_blank;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mapping::{UNNAMED_PROJECT, map_background, map_insights, map_project_to_topic_data};
use crate::models::{ProjectBackgroundData, ProjectInsightsData, TopicData};
use crate::navigation::{SidebarSection, TopicTab, build_sidebar, topic_tabs};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicPage {
    pub project_id: String,
    pub project_name: String,
    /// `None` when the requested key named no supported topic.
    pub topic: Option<Topic>,
    pub tabs: Vec<TopicTab>,
    pub content: TopicData,
    pub sidebar: Vec<SidebarSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPage {
    pub project_id: String,
    pub tabs: Vec<TopicTab>,
    pub background: ProjectBackgroundData,
    pub insights: ProjectInsightsData,
}

/// Topic page for `topic_key`. Content and sidebar come from one mapping pass.
#[must_use]
pub fn topic_page(aggregate: &ProjectAggregate, topic_key: &str) -> TopicPage {
    let topic = Topic::from_key(topic_key);
    let content = map_project_to_topic_data(aggregate, topic_key);
    let sidebar = build_sidebar(&content);

    TopicPage {
        project_id: aggregate.project_id.clone(),
        project_name: non_blank(aggregate.project_name.as_deref())
            .unwrap_or(UNNAMED_PROJECT)
            .to_string(),
        topic,
        tabs: topic_tabs(topic),
        content,
        sidebar,
    }
}

#[must_use]
pub fn overview_page(aggregate: &ProjectAggregate) -> OverviewPage {
    OverviewPage {
        project_id: aggregate.project_id.clone(),
        tabs: topic_tabs(None),
        background: map_background(aggregate),
        insights: map_insights(aggregate),
    }
}
