use char_core::entities::PointRaw;
use char_core::enums::PointCategory;
use char_core::serde_helpers::non_blank;

use super::NO_DETAILS;
use crate::ids::{IdScope, numeric_id};
use crate::models::RiskFactorPoint;

/// Map one raw point.
///
/// Text prefers the explanation, then the main idea, then [`NO_DETAILS`].
#[must_use]
pub fn map_point(raw: &PointRaw, scope: &IdScope) -> RiskFactorPoint {
    let text = non_blank(raw.explanation.as_deref())
        .or_else(|| non_blank(raw.main_idea.as_deref()))
        .unwrap_or(NO_DETAILS);

    RiskFactorPoint {
        id: numeric_id(raw.id.as_ref(), scope),
        text: text.to_string(),
        kind: point_category(raw.category.as_deref(), scope),
    }
}

/// Unrecognized or missing categories render as [`PointCategory::Mixed`].
fn point_category(raw: Option<&str>, scope: &IdScope) -> PointCategory {
    let Some(text) = raw else {
        return PointCategory::Mixed;
    };
    PointCategory::parse(text).unwrap_or_else(|| {
        tracing::warn!(category = text, scope = %scope, "unrecognized point category, showing as mixed");
        PointCategory::Mixed
    })
}
