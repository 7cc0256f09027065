use kanban_core::TaskType;
use kanban_core::entities::NewTask;
use kanban_core::responses::WriteOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::report_write;
use crate::context::AppContext;

pub async fn run(args: CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let new_task = build_new_task(args, ctx.config.general.default_type)?;
    let record = new_task.into_draft();
    let written = ctx.gateway.insert(&record).await?;
    report_write(&WriteOutcome::inserted(&record.key, written), flags)
}

fn build_new_task(args: CreateArgs, default_type: TaskType) -> anyhow::Result<NewTask> {
    if args.key.trim().is_empty() {
        anyhow::bail!("key must not be empty");
    }
    let kind = match args.kind.as_deref() {
        Some(raw) => parse_enum::<TaskType>(raw, "type")?,
        None => default_type,
    };
    Ok(NewTask {
        key: args.key,
        kind,
        estimate: args.estimate,
        description: args.description,
        parent: args.parent.filter(|parent| !parent.is_empty()),
    })
}
