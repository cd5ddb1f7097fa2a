use anyhow::Context;
use char_store::AggregateFetcher;
use char_views::listing::{ListQuery, ProjectListPage, build_project_list};

use crate::cli::root_commands::ProjectsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::page_size::effective_page_size;
use crate::context::AppContext;
use crate::output::{Table, output_with};

/// Handle `charview projects`.
pub async fn handle(
    args: &ProjectsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let listings = ctx
        .source
        .list_projects()
        .await
        .context("failed to list projects")?;

    let query = ListQuery {
        search: args.search.clone(),
        page: args.page,
        page_size: effective_page_size(args.page_size, Some(ctx.config.general.page_size)),
    };
    let page = build_project_list(&listings, &query);
    tracing::debug!(total = page.total, page = page.page, "built project list");

    output_with(&page, flags.format, projects_table)?;
    if flags.format == OutputFormat::Table && !flags.quiet {
        println!(
            "\npage {} of {} ({} projects)",
            page.page, page.total_pages, page.total
        );
    }
    Ok(())
}

fn projects_table(page: &ProjectListPage) -> Table {
    let mut table = Table::new(["id", "name", "location", "start_date", "feedstock"]);
    for card in &page.items {
        table.push_row(vec![
            card.id.clone(),
            card.name.clone(),
            card.location.clone(),
            card.start_date.clone(),
            card.feedstock_types.join(", "),
        ]);
    }
    table
}
