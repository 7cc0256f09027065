use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(key: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(record) = ctx.gateway.find(key).await? else {
        anyhow::bail!("no task with key '{key}'");
    };
    output(&record, flags.format)
}
