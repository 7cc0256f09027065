use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug, Default)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub store: StoreOverrides,
    pub credentials: Option<String>,
}

/// Connection parameters given on the command line. Each one replaces the
/// configured value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreOverrides {
    pub uri: Option<String>,
    pub namespace: Option<String>,
    pub collection: Option<String>,
}

