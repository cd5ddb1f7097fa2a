use char_core::entities::{ProjectAggregate, SubtopicRaw, TopicSummary};
use char_core::enums::Topic;
use char_core::serde_helpers::non_blank;

use super::map_subtopic;
use crate::ids::IdScope;
use crate::models::{SUMMARY_TITLE, TopicData};

/// Build the topic page content for `topic_key`.
///
/// `topic_key` is a route slug or a topic label in any case (see
/// [`Topic::from_key`]). A key naming no supported topic yields
/// [`TopicData::unavailable`] without looking at the aggregate.
#[must_use]
pub fn map_project_to_topic_data(aggregate: &ProjectAggregate, topic_key: &str) -> TopicData {
    match Topic::from_key(topic_key) {
        Some(topic) => map_topic(aggregate, topic),
        None => {
            tracing::debug!(topic_key, "unsupported topic key");
            TopicData::unavailable()
        }
    }
}

/// Build the topic page content for a resolved topic.
///
/// Falls back to [`TopicData::placeholder`] when the project has no summary
/// for the topic or no subtopic filed under the topic's subtopic label.
#[must_use]
pub fn map_topic(aggregate: &ProjectAggregate, topic: Topic) -> TopicData {
    let Some(summary) = find_topic_summary(aggregate, topic) else {
        tracing::debug!(project_id = %aggregate.project_id, %topic, "no topic summary");
        return TopicData::placeholder(topic);
    };

    let matched = select_subtopics(aggregate, topic);
    if matched.is_empty() {
        tracing::debug!(
            project_id = %aggregate.project_id,
            %topic,
            label = topic.subtopic_label(),
            "no subtopics filed under topic"
        );
        return TopicData::placeholder(topic);
    }

    let scope = IdScope::root(&aggregate.project_id).child(topic.slug());
    let subtopics = matched
        .into_iter()
        .enumerate()
        .map(|(index, raw)| map_subtopic(raw, &scope.child(index)))
        .collect();

    TopicData {
        topic_title: non_blank(summary.topic.as_deref())
            .unwrap_or(topic.default_title())
            .to_string(),
        topic_description: non_blank(summary.topic_introduction.as_deref())
            .unwrap_or(topic.default_description())
            .to_string(),
        topic_summary: summary
            .topic_summary
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        summary_title: SUMMARY_TITLE.to_string(),
        subtopics,
    }
}

/// First summary whose topic equals the topic's summary label, ignoring case.
#[must_use]
pub fn find_topic_summary(aggregate: &ProjectAggregate, topic: Topic) -> Option<&TopicSummary> {
    aggregate
        .topic_summaries
        .iter()
        .find(|summary| summary.topic.as_deref().is_some_and(|t| topic.matches_summary(t)))
}

/// Subtopics filed under the topic's subtopic label, in source order.
#[must_use]
pub fn select_subtopics(aggregate: &ProjectAggregate, topic: Topic) -> Vec<&SubtopicRaw> {
    aggregate
        .subtopics
        .iter()
        .filter(|raw| raw.topic_label().is_some_and(|t| topic.matches_subtopic(t)))
        .collect()
}
