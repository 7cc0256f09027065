use chrono::{Local, NaiveDateTime};
use kanban_core::responses::WriteOutcome;
use kanban_core::{HistoryEntry, TaskRecord, TaskStatus, TaskType};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EditArgs;
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::report_write;
use crate::context::AppContext;

pub struct Params {
    pub key: String,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub time_spent: Option<String>,
    pub description: Option<String>,
    pub parent: Option<String>,
    pub clear_parent: bool,
    pub comment: Option<String>,
}

impl From<EditArgs> for Params {
    fn from(args: EditArgs) -> Self {
        Self {
            key: args.key,
            kind: args.kind,
            status: args.status,
            time_spent: args.time_spent,
            description: args.description,
            parent: args.parent,
            clear_parent: args.clear_parent,
            comment: args.comment,
        }
    }
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_edit_params(&params)?;

    let Some(mut record) = ctx.gateway.find(&params.key).await? else {
        return report_write(&WriteOutcome::updated(&params.key, false), flags);
    };

    let changes = apply_edit(&mut record, &params)?;
    let entry = history_entry(
        params.comment.as_deref(),
        &changes,
        ctx.config.general.record_history,
        Local::now().naive_local(),
    );
    if let Some(entry) = entry {
        record.record(entry);
    }

    let written = ctx.gateway.update(&record).await?;
    report_write(&WriteOutcome::updated(&record.key, written), flags)
}

fn validate_edit_params(params: &Params) -> anyhow::Result<()> {
    if params.kind.is_none()
        && params.status.is_none()
        && params.time_spent.is_none()
        && params.description.is_none()
        && params.parent.is_none()
        && !params.clear_parent
        && params.comment.is_none()
    {
        anyhow::bail!(
            "At least one of --type, --status, --time-spent, --description, --parent, --clear-parent, or --comment must be provided"
        );
    }
    Ok(())
}

/// Apply the requested changes to the mutable fields and describe each one.
fn apply_edit(record: &mut TaskRecord, params: &Params) -> anyhow::Result<Vec<String>> {
    let mut changes = Vec::new();

    if let Some(raw) = params.kind.as_deref() {
        let kind = parse_enum::<TaskType>(raw, "type")?;
        if kind != record.kind {
            changes.push(format!("type: {} -> {kind}", record.kind));
            record.kind = kind;
        }
    }
    if let Some(raw) = params.status.as_deref() {
        let status = parse_enum::<TaskStatus>(raw, "status")?;
        if status != record.status {
            changes.push(format!("status: {} -> {status}", record.status));
            record.status = status;
        }
    }
    if let Some(time_spent) = &params.time_spent {
        if *time_spent != record.time_spent {
            changes.push(format!("time_spent: {} -> {time_spent}", record.time_spent));
            record.time_spent.clone_from(time_spent);
        }
    }
    if let Some(description) = &params.description {
        if *description != record.description {
            changes.push("description updated".to_string());
            record.description.clone_from(description);
        }
    }

    let parent = if params.clear_parent {
        Some(None)
    } else {
        params.parent.clone().map(Some)
    };
    if let Some(parent) = parent {
        if parent != record.parent {
            changes.push(format!(
                "parent: {} -> {}",
                record.parent.as_deref().unwrap_or("none"),
                parent.as_deref().unwrap_or("none")
            ));
            record.parent = parent;
        }
    }

    Ok(changes)
}

/// An explicit comment is always recorded; otherwise the change summary is,
/// when history recording is on and something changed.
fn history_entry(
    comment: Option<&str>,
    changes: &[String],
    record_history: bool,
    at: NaiveDateTime,
) -> Option<HistoryEntry> {
    match comment {
        Some(text) => Some(HistoryEntry::comment(at, text)),
        None if record_history && !changes.is_empty() => {
            Some(HistoryEntry::comment(at, changes.join("; ")))
        }
        None => None,
    }
}
