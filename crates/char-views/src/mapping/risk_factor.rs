use char_core::entities::RiskFactorRaw;
use char_core::enums::PointCategory;
use char_core::serde_helpers::non_blank;

use super::{UNNAMED_RISK_FACTOR, map_point};
use crate::ids::{IdScope, numeric_id};
use crate::models::ComponentRiskFactor;

/// Map one raw risk factor, keeping point order.
#[must_use]
pub fn map_risk_factor(raw: &RiskFactorRaw, scope: &IdScope) -> ComponentRiskFactor {
    let points = raw
        .points
        .iter()
        .enumerate()
        .map(|(index, point)| map_point(point, &scope.child(index)))
        .collect::<Vec<_>>();

    ComponentRiskFactor {
        id: numeric_id(raw.id.as_ref(), scope),
        name: non_blank(raw.name.as_deref())
            .unwrap_or(UNNAMED_RISK_FACTOR)
            .to_string(),
        kind: dominant_category(points.iter().map(|point| point.kind)),
        points,
    }
}

/// The category with the strictly highest count.
///
/// `Mixed` points are not counted. No points, or a tie for the highest
/// count, gives `Mixed`.
#[must_use]
pub fn dominant_category<I>(categories: I) -> PointCategory
where
    I: IntoIterator<Item = PointCategory>,
{
    let mut counts = [0usize; PointCategory::TALLIED.len()];
    for category in categories {
        if let Some(slot) = PointCategory::TALLIED.iter().position(|c| *c == category) {
            counts[slot] += 1;
        }
    }

    let highest = counts.iter().copied().max().unwrap_or(0);
    if highest == 0 {
        return PointCategory::Mixed;
    }

    let mut leaders = PointCategory::TALLIED
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count == highest);
    match (leaders.next(), leaders.next()) {
        (Some((category, _)), None) => *category,
        _ => PointCategory::Mixed,
    }
}
