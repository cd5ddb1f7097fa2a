//! Sidebar and topic-tab navigation data.
//!
//! Derived from an already mapped [`TopicData`], so the page content and its
//! sidebar always agree and the aggregate is fetched once. Anchors are what
//! the client-side scroll-spy observes, so they are unique within a page.

use std::collections::HashSet;

use char_core::enums::{PointCategory, Topic};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::TopicData;

/// One subtopic entry in the sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SidebarSection {
    pub anchor: String,
    pub title: String,
    pub links: Vec<SidebarLink>,
}

/// A risk factor under a sidebar section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLink {
    pub anchor: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: PointCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicTab {
    pub topic: Topic,
    pub title: String,
    pub active: bool,
}

/// Sidebar sections with anchors `subtopic-{slug of id}` and
/// `{section anchor}-rf-{risk factor id}`.
///
/// An empty or already used slug falls back to the entry's position.
#[must_use]
pub fn build_sidebar(topic: &TopicData) -> Vec<SidebarSection> {
    let mut used = HashSet::new();
    topic
        .subtopics
        .iter()
        .enumerate()
        .map(|(index, subtopic)| {
            let anchor = claim_anchor(&mut used, "subtopic", &slugify(&subtopic.id), index);
            let links = subtopic
                .risk_factors
                .iter()
                .enumerate()
                .map(|(position, factor)| SidebarLink {
                    anchor: claim_anchor(
                        &mut used,
                        &format!("{anchor}-rf"),
                        &factor.id.to_string(),
                        position,
                    ),
                    label: factor.name.clone(),
                    kind: factor.kind,
                })
                .collect();
            SidebarSection {
                anchor,
                title: subtopic.title.clone(),
                links,
            }
        })
        .collect()
}

/// `{prefix}-{slug}` if free, else `{prefix}-{index}`, else
/// `{prefix}-{index}-{n}` for the first free `n >= 2`.
fn claim_anchor(used: &mut HashSet<String>, prefix: &str, slug: &str, index: usize) -> String {
    if !slug.is_empty() {
        let preferred = format!("{prefix}-{slug}");
        if used.insert(preferred.clone()) {
            return preferred;
        }
    }
    let mut candidate = format!("{prefix}-{index}");
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{prefix}-{index}-{n}");
        n += 1;
    }
    candidate
}

/// The five topic tabs in navigation order; `active` marks the current page.
#[must_use]
pub fn topic_tabs(active: Option<Topic>) -> Vec<TopicTab> {
    Topic::ALL
        .into_iter()
        .map(|topic| TopicTab {
            topic,
            title: topic.default_title().to_string(),
            active: active == Some(topic),
        })
        .collect()
}

/// Lowercase ASCII alphanumerics joined by single dashes.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{ComponentRiskFactor, SubtopicData};

    fn topic_data() -> TopicData {
        let mut data = TopicData::placeholder(Topic::Delivery);
        data.subtopics = vec![SubtopicData {
            id: "St 9".into(),
            title: "Offtake".into(),
            summary: String::new(),
            risk_factors: vec![ComponentRiskFactor {
                id: 31,
                name: "Buyer concentration".into(),
                kind: PointCategory::Consideration,
                points: Vec::new(),
            }],
        }];
        data
    }

    #[test]
    fn sidebar_mirrors_topic_tree() {
        let sidebar = build_sidebar(&topic_data());
        assert_eq!(sidebar.len(), 1);
        assert_eq!(sidebar[0].anchor, "subtopic-st-9");
        assert_eq!(sidebar[0].title, "Offtake");
        assert_eq!(sidebar[0].links[0].anchor, "subtopic-st-9-rf-31");
        assert_eq!(sidebar[0].links[0].kind, PointCategory::Consideration);
    }

    fn subtopic(id: &str, factor_ids: &[u64]) -> SubtopicData {
        SubtopicData {
            id: id.into(),
            title: id.into(),
            summary: String::new(),
            risk_factors: factor_ids
                .iter()
                .map(|&id| ComponentRiskFactor {
                    id,
                    name: format!("factor {id}"),
                    kind: PointCategory::Mixed,
                    points: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn colliding_and_empty_slugs_fall_back_to_position() {
        let mut data = TopicData::placeholder(Topic::Social);
        data.subtopics = vec![
            subtopic("St 9", &[31, 31, 1]),
            subtopic("st-9", &[]),
            subtopic("***", &[]),
            subtopic("4", &[]),
            subtopic("", &[]),
        ];

        let sidebar = build_sidebar(&data);
        let anchors = sidebar.iter().map(|s| s.anchor.as_str()).collect::<Vec<_>>();
        assert_eq!(
            anchors,
            ["subtopic-st-9", "subtopic-1", "subtopic-2", "subtopic-4", "subtopic-4-2"]
        );

        let links = sidebar[0]
            .links
            .iter()
            .map(|l| l.anchor.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            links,
            ["subtopic-st-9-rf-31", "subtopic-st-9-rf-1", "subtopic-st-9-rf-2"]
        );

        let mut all = anchors.clone();
        all.extend(links);
        let unique = all.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn empty_topic_has_empty_sidebar() {
        assert!(build_sidebar(&TopicData::unavailable()).is_empty());
    }

    #[test]
    fn tabs_mark_only_the_active_topic() {
        let tabs = topic_tabs(Some(Topic::Policy));
        assert_eq!(tabs.len(), 5);
        assert_eq!(
            tabs.iter().filter(|t| t.active).map(|t| t.topic).collect::<Vec<_>>(),
            [Topic::Policy]
        );
        assert!(topic_tabs(None).iter().all(|t| !t.active));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Policy & Regulation!! "), "policy-regulation");
        assert_eq!(slugify("subtopic-00ab"), "subtopic-00ab");
        assert_eq!(slugify("***"), "");
    }
}
