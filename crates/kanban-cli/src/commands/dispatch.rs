use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Create(args) => commands::create::run(args, ctx, flags).await,
        Commands::List(args) => commands::list::run(args.status.as_deref(), ctx, flags).await,
        Commands::Board => commands::board::run(ctx, flags).await,
        Commands::Show(args) => commands::show::run(&args.key, ctx, flags).await,
        Commands::Edit(args) => commands::edit::run(args.into(), ctx, flags).await,
    }
}
