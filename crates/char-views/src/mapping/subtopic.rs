use char_core::entities::SubtopicRaw;
use char_core::serde_helpers::non_blank;

use super::{NO_SUMMARY, UNNAMED_SUBTOPIC, map_risk_factor};
use crate::ids::{IdScope, text_id};
use crate::models::SubtopicData;

/// Map one raw subtopic. Risk factors keep source order, none are dropped.
#[must_use]
pub fn map_subtopic(raw: &SubtopicRaw, scope: &IdScope) -> SubtopicData {
    let summary = raw.summary.as_ref();

    SubtopicData {
        id: text_id(raw.subtopic_id.as_ref(), scope, "subtopic"),
        title: non_blank(summary.and_then(|s| s.subtopic.as_deref()))
            .unwrap_or(UNNAMED_SUBTOPIC)
            .to_string(),
        summary: non_blank(summary.and_then(|s| s.overall_summary.as_deref()))
            .unwrap_or(NO_SUMMARY)
            .to_string(),
        risk_factors: raw
            .risk_factors
            .iter()
            .enumerate()
            .map(|(index, factor)| map_risk_factor(factor, &scope.child(index)))
            .collect(),
    }
}
