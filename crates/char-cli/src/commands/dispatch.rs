use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Topic(args) => commands::topic::handle(&args, ctx, flags).await,
        Commands::Overview(args) => commands::overview::handle(&args, ctx, flags).await,
        Commands::Projects(args) => commands::projects::handle(&args, ctx, flags).await,
        Commands::Validate(args) => commands::validate::handle(&args, ctx, flags).await,
        Commands::Topics | Commands::Schema(_) => {
            unreachable!("topics/schema are pre-dispatched in main")
        }
    }
}
