use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render one topic page of a project.
    Topic(TopicArgs),
    /// Render a project's overview: background and headline insights.
    Overview(OverviewArgs),
    /// List projects with search and pagination.
    Projects(ProjectsArgs),
    /// Report data-quality issues in a project's aggregate.
    Validate(ValidateArgs),
    /// Show the topic table.
    Topics,
    /// Dump JSON schema for a view-model type.
    Schema(SchemaArgs),
}

/// Arguments for `charview topic`.
#[derive(Clone, Debug, Args)]
pub struct TopicArgs {
    pub project_id: String,
    /// Topic key: slug (`social`), summary label or title.
    pub topic: String,
}

/// Arguments for `charview overview`.
#[derive(Clone, Debug, Args)]
pub struct OverviewArgs {
    pub project_id: String,
}

/// Arguments for `charview projects`.
#[derive(Clone, Debug, Args)]
pub struct ProjectsArgs {
    /// Terms matched against name, location and feedstock.
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Cards per page (defaults to `general.page_size`).
    #[arg(long)]
    pub page_size: Option<u32>,
}

/// Arguments for `charview validate`.
#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    pub project_id: String,
    /// Exit with an error when any issue is found.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `charview schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Aggregate,
    TopicData,
    TopicPage,
    OverviewPage,
    ProjectList,
}
