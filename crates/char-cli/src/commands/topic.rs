use anyhow::Context;
use char_store::{AggregateFetcher, check_aggregate};
use char_views::pages::{TopicPage, topic_page};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TopicArgs;
use crate::context::AppContext;
use crate::output::{Table, output_with};

/// Handle `charview topic`.
pub async fn handle(args: &TopicArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let aggregate = ctx
        .source
        .require_project(&args.project_id)
        .await
        .with_context(|| format!("failed to load project '{}'", args.project_id))?;

    let issues = check_aggregate(&aggregate);
    if !issues.is_empty() {
        tracing::info!(
            project_id = %args.project_id,
            issues = issues.len(),
            "aggregate has data issues; run `charview validate` for details"
        );
    }

    let page = topic_page(&aggregate, &args.topic);
    if page.topic.is_none() {
        tracing::warn!(topic = %args.topic, "unknown topic key; showing unavailable placeholder");
    }

    output_with(&page, flags.format, topic_table)
}

/// One row per risk factor, grouped by subtopic.
fn topic_table(page: &TopicPage) -> Table {
    let mut table = Table::new(["subtopic", "risk_factor", "type", "points"]);
    for subtopic in &page.content.subtopics {
        if subtopic.risk_factors.is_empty() {
            table.push_row(vec![subtopic.title.clone(), "-".into(), "-".into(), "0".into()]);
        }
        for factor in &subtopic.risk_factors {
            table.push_row(vec![
                subtopic.title.clone(),
                factor.name.clone(),
                factor.kind.to_string(),
                factor.points.len().to_string(),
            ]);
        }
    }
    if page.content.subtopics.is_empty() {
        table.push_row(vec![
            page.content.topic_title.clone(),
            page.content.topic_description.clone(),
        ]);
    }
    table
}
