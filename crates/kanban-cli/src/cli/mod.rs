use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat, StoreOverrides};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kanban` binary.
#[derive(Debug, Parser)]
#[command(name = "kanban", version, about = "Kanban - task records on a five-stage board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store endpoint: a libSQL file path, ":memory:", or a libsql:// URL
    #[arg(long, global = true)]
    pub uri: Option<String>,

    /// Database namespace
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Collection name
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Credentials file used when the store is not configured
    /// (defaults to resources/credentials.txt)
    #[arg(long, global = true)]
    pub credentials: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            store: StoreOverrides {
                uri: self.uri.clone(),
                namespace: self.namespace.clone(),
                collection: self.collection.clone(),
            },
            credentials: self.credentials.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["kanban", "--format", "table", "--verbose", "board"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Board));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["kanban", "board", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["kanban", "--format", "xml", "board"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn create_takes_key_and_options() {
        let cli = Cli::try_parse_from([
            "kanban", "create", "T1", "--type", "epic", "--estimate", "3H", "--parent", "E0",
        ])
        .expect("cli should parse");

        let Commands::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.key, "T1");
        assert_eq!(args.kind.as_deref(), Some("epic"));
        assert_eq!(args.estimate, "3H");
        assert_eq!(args.parent.as_deref(), Some("E0"));
        assert_eq!(args.description, "");
    }

    #[test]
    fn edit_rejects_parent_with_clear_parent() {
        let parsed =
            Cli::try_parse_from(["kanban", "edit", "T1", "--parent", "E1", "--clear-parent"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn store_overrides_are_collected() {
        let cli = Cli::try_parse_from([
            "kanban",
            "--uri",
            "kanban.db",
            "--collection",
            "showcase",
            "--credentials",
            "creds.txt",
            "list",
        ])
        .expect("cli should parse");
        let flags = cli.global_flags();

        assert_eq!(flags.store.uri.as_deref(), Some("kanban.db"));
        assert_eq!(flags.store.namespace, None);
        assert_eq!(flags.store.collection.as_deref(), Some("showcase"));
        assert_eq!(flags.credentials.as_deref(), Some("creds.txt"));
    }
}
