use anyhow::Context;
use char_core::enums::PointCategory;
use char_store::AggregateFetcher;
use char_views::models::InsightItem;
use char_views::pages::{OverviewPage, overview_page};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverviewArgs;
use crate::context::AppContext;
use crate::output::{Table, output_with};

/// Handle `charview overview`.
pub async fn handle(
    args: &OverviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let aggregate = ctx
        .source
        .require_project(&args.project_id)
        .await
        .with_context(|| format!("failed to load project '{}'", args.project_id))?;

    output_with(&overview_page(&aggregate), flags.format, overview_table)
}

fn overview_table(page: &OverviewPage) -> Table {
    let background = &page.background;
    let mut table = Table::new(["section", "topic", "text"]);
    for (section, text) in [
        ("project", background.project_name.clone()),
        ("description", background.description.clone()),
        ("location", background.location.clone()),
        ("start_date", background.start_date.clone()),
        ("feedstock", background.feedstock_types.join(", ")),
        ("stakeholders", background.stakeholders.join(", ")),
    ] {
        table.push_row(vec![section.into(), "-".into(), text]);
    }

    let insights = &page.insights;
    for (category, items) in [
        (PointCategory::Strength, &insights.strengths),
        (PointCategory::Consideration, &insights.considerations),
        (PointCategory::RecommendedAction, &insights.recommended_actions),
    ] {
        for InsightItem { topic, text } in items {
            table.push_row(vec![category.to_string(), topic.clone(), text.clone()]);
        }
    }
    table
}
