use chrono::{DateTime, NaiveDate};

use char_core::entities::{OneOrMany, ProjectAggregate};
use char_core::serde_helpers::non_blank;

use super::{NO_DESCRIPTION, NO_LOCATION, NO_START_DATE, UNNAMED_PROJECT};
use crate::models::ProjectBackgroundData;

/// Project metadata for the overview page, with per-field placeholders.
#[must_use]
pub fn map_background(aggregate: &ProjectAggregate) -> ProjectBackgroundData {
    ProjectBackgroundData {
        project_name: non_blank(aggregate.project_name.as_deref())
            .unwrap_or(UNNAMED_PROJECT)
            .to_string(),
        description: non_blank(aggregate.project_description.as_deref())
            .unwrap_or(NO_DESCRIPTION)
            .to_string(),
        location: non_blank(aggregate.location.as_deref())
            .unwrap_or(NO_LOCATION)
            .to_string(),
        start_date: format_start_date(aggregate.start_date.as_deref()),
        feedstock_types: entries(aggregate.feedstock_type.as_ref())
            .map(capitalize)
            .collect(),
        stakeholders: entries(aggregate.stakeholders.as_ref())
            .map(str::to_string)
            .collect(),
    }
}

/// Non-blank trimmed entries of a scalar-or-list column.
fn entries(column: Option<&OneOrMany>) -> impl Iterator<Item = &str> {
    column
        .map(OneOrMany::as_slice)
        .unwrap_or_default()
        .iter()
        .filter_map(|entry| non_blank(Some(entry.as_str())))
}

/// Uppercase the first character, leave the rest as written.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// `"2023-03-01"` → `"March 2023"`. RFC 3339 timestamps are shortened the
/// same way; any other text is shown as written.
#[must_use]
pub fn format_start_date(raw: Option<&str>) -> String {
    let Some(text) = non_blank(raw) else {
        return NO_START_DATE.to_string();
    };
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()));
    date.map_or_else(|| text.to_string(), |d| d.format("%B %Y").to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_aggregate_is_fully_populated() {
        let data = map_background(&ProjectAggregate::default());
        assert_eq!(data.project_name, "Unnamed Project");
        assert_eq!(data.description, "No description available");
        assert_eq!(data.location, "Location not specified");
        assert_eq!(data.start_date, "Start date not specified");
        assert!(data.feedstock_types.is_empty());
        assert!(data.stakeholders.is_empty());
    }

    #[test]
    fn scalar_feedstock_is_wrapped_and_capitalized() {
        let aggregate = ProjectAggregate {
            feedstock_type: Some(OneOrMany::One("rice husks".into())),
            ..Default::default()
        };
        assert_eq!(map_background(&aggregate).feedstock_types, ["Rice husks"]);
    }

    #[test]
    fn list_columns_pass_through_without_blanks() {
        let aggregate = ProjectAggregate {
            feedstock_type: Some(OneOrMany::Many(vec![
                "wood chips".into(),
                " ".into(),
                "élite pellets".into(),
            ])),
            stakeholders: Some(OneOrMany::Many(vec![
                "Cooperative".into(),
                " Buyer ".into(),
            ])),
            ..Default::default()
        };
        let data = map_background(&aggregate);
        assert_eq!(data.feedstock_types, ["Wood chips", "Élite pellets"]);
        assert_eq!(data.stakeholders, ["Cooperative", "Buyer"]);
    }

    #[test]
    fn start_dates_are_formatted_when_parseable() {
        assert_eq!(format_start_date(Some("2023-03-01")), "March 2023");
        assert_eq!(
            format_start_date(Some("2021-11-15T08:00:00Z")),
            "November 2021"
        );
        assert_eq!(format_start_date(Some("Q2 2024")), "Q2 2024");
        assert_eq!(format_start_date(Some("")), "Start date not specified");
    }

    #[test]
    fn capitalize_handles_empty_input() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("x"), "X");
    }
}
