use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create a Draft task record.
    Create(CreateArgs),
    /// List task records, optionally filtered by status.
    List(ListArgs),
    /// Show the board: one column per status.
    Board,
    /// Show a single task record.
    Show(ShowArgs),
    /// Edit the mutable fields of a task record.
    Edit(EditArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Unique key of the new record.
    pub key: String,
    /// Epic, Task or Subtask (defaults to `general.default_type`).
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Free-form estimate, e.g. "3H".
    #[arg(long, default_value = "")]
    pub estimate: String,
    /// Key of the containing record.
    #[arg(long)]
    pub parent: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Draft, Open, Active, Complete or Discarded.
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    pub key: String,
}

#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    pub key: String,
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub time_spent: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, conflicts_with = "clear_parent")]
    pub parent: Option<String>,
    /// Remove the parent link.
    #[arg(long)]
    pub clear_parent: bool,
    /// Comment for the history entry appended by this edit.
    #[arg(long)]
    pub comment: Option<String>,
}
