use kanban_core::TaskStatus;
use kanban_core::responses::{BoardColumn, BoardResponse};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_board;

/// Fill each status column with its own `read_by_status` query.
pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut columns = Vec::with_capacity(TaskStatus::ALL.len());
    for status in TaskStatus::ALL {
        let records = ctx.gateway.read_by_status(status).await?;
        columns.push(BoardColumn { status, records });
    }
    output_board(&BoardResponse { columns }, flags.format)
}
