use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lane cards.
    Text,
    /// Pretty-printed JSON per lane.
    Json,
    /// Single-line JSON per lane.
    Raw,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub base_url: Option<String>,
    pub quiet: bool,
    pub verbose: bool,
}
