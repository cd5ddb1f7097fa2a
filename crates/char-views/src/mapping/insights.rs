use char_core::entities::{InsightRaw, ProjectAggregate};
use char_core::enums::PointCategory;
use char_core::serde_helpers::non_blank;

use super::{GENERAL_TOPIC, NO_DETAILS};
use crate::models::{InsightItem, ProjectInsightsData};

/// Group the aggregate's headline insights into the three overview columns.
///
/// Source order is kept within each column. Insights with a missing or
/// unrecognized type are dropped and logged.
#[must_use]
pub fn map_insights(aggregate: &ProjectAggregate) -> ProjectInsightsData {
    let mut data = ProjectInsightsData::default();

    for raw in &aggregate.main_insights {
        let category = raw
            .insight_type
            .as_deref()
            .and_then(PointCategory::from_insight_type);
        let bucket = match category {
            Some(PointCategory::Strength) => &mut data.strengths,
            Some(PointCategory::Consideration) => &mut data.considerations,
            Some(PointCategory::RecommendedAction) => &mut data.recommended_actions,
            Some(PointCategory::Mixed) | None => {
                tracing::warn!(
                    project_id = %aggregate.project_id,
                    insight_type = raw.insight_type.as_deref().unwrap_or("<missing>"),
                    "dropping insight with unrecognized type"
                );
                continue;
            }
        };
        bucket.push(insight_item(raw));
    }

    data
}

fn insight_item(raw: &InsightRaw) -> InsightItem {
    InsightItem {
        topic: non_blank(raw.topic.as_deref())
            .unwrap_or(GENERAL_TOPIC)
            .to_string(),
        text: non_blank(raw.main_idea.as_deref())
            .unwrap_or(NO_DETAILS)
            .to_string(),
    }
}
