use kanban_core::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(status: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = match status {
        Some(raw) => {
            let status = parse_enum::<TaskStatus>(raw, "status")?;
            ctx.gateway.read_by_status(status).await?
        }
        None => ctx.gateway.read_all().await?,
    };
    output(&records, flags.format)
}
