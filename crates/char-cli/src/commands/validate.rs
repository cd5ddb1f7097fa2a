use anyhow::{Context, bail};
use char_store::{AggregateFetcher, DataIssue, check_aggregate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::context::AppContext;
use crate::output::{Table, output_with};

#[derive(Debug, Serialize)]
struct ValidateResponse {
    project_id: String,
    issues: Vec<DataIssue>,
}

/// Handle `charview validate`.
pub async fn handle(
    args: &ValidateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let aggregate = ctx
        .source
        .require_project(&args.project_id)
        .await
        .with_context(|| format!("failed to load project '{}'", args.project_id))?;

    let response = ValidateResponse {
        project_id: args.project_id.clone(),
        issues: check_aggregate(&aggregate),
    };
    output_with(&response, flags.format, issues_table)?;

    if args.strict && !response.issues.is_empty() {
        bail!(
            "{} data issue(s) found in project '{}'",
            response.issues.len(),
            args.project_id
        );
    }
    Ok(())
}

fn issues_table(response: &ValidateResponse) -> Table {
    let mut table = Table::new(["kind", "path", "message"]);
    for issue in &response.issues {
        table.push_row(vec![
            issue.kind.as_str().to_string(),
            issue.path.clone(),
            issue.message.clone(),
        ]);
    }
    table
}
