pub mod parse;

use kanban_core::responses::WriteOutcome;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Print the outcome of a conditional write; a rejected write is an error so
/// the process exits non-zero.
pub fn report_write(outcome: &WriteOutcome, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(outcome, flags.format)?;
    if !outcome.written {
        anyhow::bail!("{} ('{}')", outcome.message, outcome.key);
    }
    Ok(())
}
